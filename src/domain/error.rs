use std::fmt;
use std::panic::Location;

/// Error carried through the whole crate.
///
/// `status_code` is the HTTP-like code the outer web layer answers with, and
/// `is_operational` separates expected failures (safe to show a client) from
/// defects (masked as an internal error).
#[derive(Debug)]
pub struct AppError {
    message: String,
    status_code: u16,
    is_operational: bool,
    location: &'static Location<'static>,
}

impl AppError {
    /// Operational error with a caller-supplied status code.
    ///
    /// The recorded location is the caller's, never this constructor's.
    #[track_caller]
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            is_operational: true,
            location: Location::caller(),
        }
    }

    pub fn with_operational(mut self, is_operational: bool) -> Self {
        self.is_operational = is_operational;
        self
    }

    #[track_caller]
    pub fn programming(message: impl Into<String>) -> Self {
        Self::new(message, 500).with_operational(false)
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, 404)
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(message, 400)
    }

    #[track_caller]
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(message, 503)
    }

    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        Self::programming(message)
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::programming(message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn is_operational(&self) -> bool {
        self.is_operational
    }

    /// Where the error was constructed.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Diagnostic trace, `file:line:column` of the construction site. It never
    /// points inside this module's constructors.
    pub fn trace(&self) -> String {
        self.location.to_string()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        AppError::internal(format!("IO error: {}", err))
    }
}

impl From<sqlx::Error> for AppError {
    #[track_caller]
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            other => AppError::database(format!("Database error: {}", other)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(format!("Serialization error: {}", err))
    }
}

impl From<figment::Error> for AppError {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        AppError::config(format!("Invalid configuration: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_operational() {
        let (err, line) = (AppError::new("Not allowed", 403), line!());

        assert_eq!(err.message(), "Not allowed");
        assert_eq!(err.status_code(), 403);
        assert!(err.is_operational());
        assert_eq!(err.to_string(), "Not allowed");
        // the trace starts at the caller, not inside the constructor
        assert_eq!(err.location().line(), line);
        assert_eq!(err.location().file(), file!());
    }

    #[test]
    fn test_helper_constructors_report_caller_location() {
        let (err, line) = (AppError::not_found("Store missing"), line!());
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.location().line(), line);

        let (err, line) = (AppError::config("bad url"), line!());
        assert_eq!(err.location().line(), line);
    }

    #[test]
    fn test_trace_skips_constructor_frames() {
        std::env::set_var("RUST_BACKTRACE", "1");
        let (err, line) = (AppError::new("Not allowed", 403), line!());

        let trace = err.trace();
        assert!(!trace.contains("AppError::new"));
        assert_eq!(trace, format!("{}:{}:{}", file!(), line, err.location().column()));

        let (err, line) = (AppError::validation("bad slug"), line!());
        assert!(err.trace().contains(&format!(":{}:", line)));
    }

    #[test]
    fn test_programming_error_is_not_operational() {
        let err = AppError::programming("invariant broken");
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_operational());

        let err = AppError::new("teapot", 418).with_operational(false);
        assert_eq!(err.status_code(), 418);
        assert!(!err.is_operational());
    }

    #[test]
    fn test_category_codes() {
        assert_eq!(AppError::validation("x").status_code(), 400);
        assert!(AppError::validation("x").is_operational());
        assert_eq!(AppError::database("x").status_code(), 503);
        assert!(AppError::database("x").is_operational());
        assert!(!AppError::internal("x").is_operational());
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), 404);

        let err: AppError = sqlx::Error::PoolClosed.into();
        assert_eq!(err.status_code(), 503);
        assert!(err.message().starts_with("Database error:"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: AppError = io.into();
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_operational());
        assert!(err.message().contains("pipe closed"));
    }
}
