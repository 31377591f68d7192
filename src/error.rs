//! Request-level error type.
//!
//! Exit codes follow the error taxonomy:
//! - 2: configuration errors (unresolvable catalog schema) and input
//!   validation errors (bad length, empty catalog id) — both reject the
//!   request before a selection result exists
//! - 4: internal failures that should not happen on valid data
//!
//! Row-level parse problems are deliberately *not* represented here; they are
//! accumulated as diagnostics on the catalog load and never fail a request.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// A configuration error: the catalog source cannot be used at all
    /// (e.g. a logical column resolves to no header).
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// An input validation error: the caller-supplied request is rejected
    /// before any selection runs.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// An internal failure (serialization and the like).
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_constructors_map_to_exit_codes() {
        // Configuration and input problems share exit code 2; only the
        // message distinguishes them for the user.
        assert_eq!(AppError::config("missing column").exit_code(), 2);
        assert_eq!(AppError::input("bad length").exit_code(), 2);
        assert_eq!(AppError::internal("serialize").exit_code(), 4);
    }

    #[test]
    fn display_is_the_bare_message() {
        assert_eq!(AppError::input("Length must be greater than zero.").to_string(),
            "Length must be greater than zero.");
    }
}
