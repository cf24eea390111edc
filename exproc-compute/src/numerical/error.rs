use std::fmt;

/// The largest edit distance at which a bound name is suggested for an undefined one.
const SUGGESTION_DISTANCE: usize = 2;

/// A variable in the tree has no value in the bindings it was evaluated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedVariable {
    /// The name of the variable.
    pub name: String,

    /// Bound names that are close to the undefined one, in binding order.
    pub suggestions: Vec<String>,
}

impl UndefinedVariable {
    /// Creates the error for `name`, suggesting similar names from the bindings.
    pub fn new(name: &str, bindings: &[(&str, f64)]) -> Self {
        let mut suggestions: Vec<String> = Vec::new();
        for (bound, _) in bindings {
            if levenshtein::levenshtein(name, bound) <= SUGGESTION_DISTANCE
                && !suggestions.iter().any(|s| s.as_str() == *bound)
            {
                suggestions.push(bound.to_string());
            }
        }

        Self {
            name: name.to_owned(),
            suggestions,
        }
    }
}

impl fmt::Display for UndefinedVariable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "undefined variable `{}`", self.name)?;
        if !self.suggestions.is_empty() {
            let list = self.suggestions.iter()
                .map(|s| format!("`{}`", s))
                .collect::<Vec<_>>()
                .join(" or ");
            write!(f, "; did you mean {}?", list)?;
        }
        Ok(())
    }
}

impl std::error::Error for UndefinedVariable {}
