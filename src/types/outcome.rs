//! ComparisonOutcome - Result of checking one candidate against the reference

use super::KuaError;

/// Tri-state outcome of comparing two files
#[derive(Debug)]
pub enum ComparisonOutcome {
    /// Contents are identical under the active options
    Equal,

    /// Contents differ (size or content); a normal negative result
    NotEqual,

    /// The candidate could not be examined
    Error(KuaError),
}

impl ComparisonOutcome {
    pub fn is_equal(&self) -> bool {
        matches!(self, ComparisonOutcome::Equal)
    }

    pub fn is_not_equal(&self) -> bool {
        matches!(self, ComparisonOutcome::NotEqual)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ComparisonOutcome::Error(_))
    }

    /// Borrow the error, if any
    pub fn error(&self) -> Option<&KuaError> {
        match self {
            ComparisonOutcome::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bool> for ComparisonOutcome {
    fn from(equal: bool) -> Self {
        if equal {
            ComparisonOutcome::Equal
        } else {
            ComparisonOutcome::NotEqual
        }
    }
}

impl From<Result<bool, KuaError>> for ComparisonOutcome {
    fn from(result: Result<bool, KuaError>) -> Self {
        match result {
            Ok(equal) => equal.into(),
            Err(e) => ComparisonOutcome::Error(e),
        }
    }
}
