/// Receives the steps taken by an algorithm, such as the rules fired by
/// [`simplify_with`](super::simplify::simplify_with).
///
/// The unit type `()` discards every step, and `Vec<S>` records them in order.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
