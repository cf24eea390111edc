/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `2+3 = 5`
    /// `sin(0) = 0`
    FoldConstant,

    /// `-(-a) = a`
    DoubleNegation,

    /// `-a*-b = a*b`
    MultiplyNegatives,

    /// `-a/-b = a/b`
    DivideNegatives,

    /// `a+(-b) = a-b`
    AddNegative,

    /// `a-(-b) = a+b`
    SubtractNegative,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a+a = 2*a`
    AddSelf,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `a-a = 0`
    SubtractSelf,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `a*a = a^2`
    MultiplySelf,

    /// `0/a = 0`
    DivideZero,

    /// `a/1 = a`
    DivideOne,

    /// `a/a = 1`
    DivideSelf,

    /// `1^a = 1`
    PowerOneLeft,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,
}
