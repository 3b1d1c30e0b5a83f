//! Error types for the checklist model and controller.

/// Result type alias for checklist operations.
pub type Result<T> = std::result::Result<T, CheckListError>;

/// Errors that can occur when operating on a check list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckListError {
    /// An index-based operation addressed a row that does not exist.
    #[error("Index {index} out of range for check list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// The model rejects duplicate values and an equal value is already present.
    #[error("Value already present at index {index}")]
    DuplicateValue { index: usize },

    /// A model of the wrong type was attached to a check list controller.
    #[error("Incompatible model: this check list expects a {expected}")]
    IncompatibleModel { expected: &'static str },
}

impl CheckListError {
    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CheckListError::out_of_range(3, 3);
        assert_eq!(
            err.to_string(),
            "Index 3 out of range for check list of size 3"
        );

        let err = CheckListError::IncompatibleModel {
            expected: "CheckListModel<String>",
        };
        assert!(err.to_string().contains("CheckListModel<String>"));
    }
}
