use exproc_parser::Node;

/// Returns the distinct variable names in the tree, in the order they first appear when reading
/// the tree from left to right.
pub fn free_variables(node: &Node) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in node.post_order_iter().filter_map(Node::as_variable) {
        if !names.iter().any(|seen| seen == name) {
            names.push(name.to_owned());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use exproc_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn first_occurrence_order() {
        let node = parse("b * sin(a) + b ^ c - a").unwrap();
        assert_eq!(free_variables(&node), vec!["b", "a", "c"]);
    }

    #[test]
    fn constant_tree() {
        assert!(free_variables(&parse("2 * ln(3)").unwrap()).is_empty());
    }
}
