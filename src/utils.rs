use crate::constants::INDENT;
use crate::errors::TriageError;

/// Join a list of accepted names for use in an error message.
pub fn items_to_strings(items: &[&str]) -> String {
    items.join(", ")
}

/// Build the error returned when `value` does not name any variant of `type_name`.
pub fn parse_error(value: &str, type_name: &str, expected: &[&str]) -> TriageError {
    TriageError::ParseString(value.to_string(), type_name.to_string(), items_to_strings(expected))
}

/// Leading whitespace for a node rendered at `depth`.
pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_to_strings() {
        assert_eq!(items_to_strings(&["Splitting", "Stopping"]), "Splitting, Stopping");
        assert_eq!(items_to_strings(&[]), "");
    }

    #[test]
    fn test_parse_error_message() {
        let err = parse_error("Growing", "StageKind", &["Splitting", "Pruning"]);
        assert_eq!(
            err.to_string(),
            "Invalid value Growing passed for StageKind, expected one of Splitting, Pruning."
        );
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2).len(), 2 * INDENT.len());
    }
}
