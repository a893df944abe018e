use crate::fetch::{FetchError, FetchErrorKind};

/// Three-state outcome of one fetch lifecycle.
///
/// Only `Loading → Failed` and `Loading → Succeeded` ever happen; both
/// terminal states are final for the lifecycle that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult<T> {
    Loading,
    Failed {
        kind: FetchErrorKind,
        message: String,
    },
    /// Items in server order.
    Succeeded { items: Vec<T> },
}

impl<T> Default for FetchResult<T> {
    fn default() -> Self {
        FetchResult::Loading
    }
}

impl<T> FetchResult<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchResult::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn items(&self) -> Option<&[T]> {
        match self {
            FetchResult::Succeeded { items } => Some(items),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchResult::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<Vec<T>, FetchError>> for FetchResult<T> {
    fn from(outcome: Result<Vec<T>, FetchError>) -> Self {
        match outcome {
            Ok(items) => FetchResult::Succeeded { items },
            Err(err) => FetchResult::Failed {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}
