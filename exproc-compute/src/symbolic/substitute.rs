use exproc_parser::Node;

/// Replaces the variables of the tree with copies of other trees, in a single pass.
///
/// A variable is replaced by the tree of the first entry in `subs` with the same name; variables
/// without an entry are kept. The replacement trees are not substituted into, so a replacement
/// that mentions a substituted variable keeps it as-is.
pub fn substitute(node: &Node, subs: &[(&str, &Node)]) -> Node {
    match node {
        Node::Variable(name) => subs.iter()
            .find(|(target, _)| *target == name.as_str())
            .map_or_else(|| node.clone(), |(_, replacement)| (*replacement).clone()),
        Node::Constant(_) => node.clone(),
        Node::Binary { op, lhs, rhs } => Node::binary(
            *op,
            substitute(lhs, subs),
            substitute(rhs, subs),
        ),
        Node::Unary { op, operand } => Node::unary(*op, substitute(operand, subs)),
    }
}

#[cfg(test)]
mod tests {
    use exproc_parser::parse;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let node = parse("x * sin(x) + y").unwrap();
        let replacement = parse("t + 1").unwrap();
        assert_eq!(
            substitute(&node, &[("x", &replacement)]),
            parse("(t + 1) * sin(t + 1) + y").unwrap(),
        );
    }

    #[test]
    fn first_match_wins() {
        let node = parse("x").unwrap();
        let one = Node::constant(1.0);
        let two = Node::constant(2.0);
        assert_eq!(substitute(&node, &[("x", &one), ("x", &two)]), one);
    }

    #[test]
    fn single_pass() {
        let node = parse("x + y").unwrap();
        let x_replacement = parse("y ^ 2").unwrap();
        let y_replacement = parse("x").unwrap();
        assert_eq!(
            substitute(&node, &[("x", &x_replacement), ("y", &y_replacement)]),
            parse("y ^ 2 + x").unwrap(),
        );
    }

    proptest! {
        #[test]
        fn no_substitutions_copies(a in 0u32..100, b in 0u32..100, name in "[a-z]{1,3}") {
            // the prefix keeps generated names from colliding with function names
            let source = format!("v{} * ({} - v{}) ^ sin({})", name, a, name, b);
            let node = parse(&source).unwrap();
            prop_assert_eq!(substitute(&node, &[]), node.clone());
        }
    }
}
