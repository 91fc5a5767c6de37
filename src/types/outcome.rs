//! Tagged result for optional external calls
//!
//! External services are best-effort enrichment. Their callers branch on
//! `Success` / `Unavailable` instead of catching errors, so the fallback path
//! is visible at the call site.

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    /// The service was not configured or the attempt failed
    Unavailable(String),
}

impl<T> Outcome<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Return the value or compute a fallback from the reason
    pub fn unwrap_or_else(self, fallback: impl FnOnce(String) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Unavailable(reason) => fallback(reason),
        }
    }
}

impl<T: Default> Outcome<T> {
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Unavailable(_) => T::default(),
        }
    }
}
