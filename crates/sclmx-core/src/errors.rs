use thiserror::Error;

/// Result type alias using SclmError
pub type Result<T> = std::result::Result<T, SclmError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and for the CI adapter's failure reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Report / record parsing
    InvalidTimestamp,
    InvalidVersion,
    MissingField,

    // Classification
    Unclassified,
    DuplicateMember,

    // Remote fetch
    RemoteUnavailable,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidTimestamp => "ERR_INVALID_TIMESTAMP",
            ExErrorKind::InvalidVersion => "ERR_INVALID_VERSION",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::Unclassified => "ERR_UNCLASSIFIED",
            ExErrorKind::DuplicateMember => "ERR_DUPLICATE_MEMBER",
            ExErrorKind::RemoteUnavailable => "ERR_REMOTE_UNAVAILABLE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable classification plus optional context (operation, member
/// path, report line number) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    member: Option<String>,
    line: Option<usize>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            member: None,
            line: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add member path context
    pub fn with_member(mut self, path: impl Into<String>) -> Self {
        self.member = Some(path.into());
        self
    }

    /// Add report line context (1-based)
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(member) = &self.member {
            write!(f, " (member: {})", member)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for SCLM change detection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SclmError {
    /// Timestamp text does not match `yyyy/MM/dd HH:mm:ss` or names an impossible date
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// Member version is not a non-negative decimal integer
    #[error("Invalid member version '{value}'")]
    InvalidVersion { value: String },

    /// A required field was never supplied while rebuilding a record
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// A record without a final classification was asked for its change line
    #[error("File {path} has no edit classification")]
    Unclassified { path: String },

    /// Two records in one revision share an identity path
    #[error("Duplicate member in revision: {path}")]
    DuplicateMember { path: String },

    /// The remote report could not be obtained and the policy forbids
    /// reconciling an empty snapshot against the baseline
    #[error("Remote SCLM report unavailable ({status}); refusing to mark baseline deleted")]
    RemoteUnavailable { status: String },

    /// Configuration is missing a field or cannot be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<SclmError> for ExError {
    fn from(err: SclmError) -> Self {
        match err {
            SclmError::InvalidTimestamp { value, reason } => {
                ExError::new(ExErrorKind::InvalidTimestamp)
                    .with_op("parse_timestamp")
                    .with_message(format!("'{}': {}", value, reason))
            }

            SclmError::InvalidVersion { value } => ExError::new(ExErrorKind::InvalidVersion)
                .with_message(format!("'{}' is not a non-negative integer", value)),

            SclmError::MissingField { field } => ExError::new(ExErrorKind::MissingField)
                .with_message(format!("required field `{}` is absent", field)),

            SclmError::Unclassified { path } => ExError::new(ExErrorKind::Unclassified)
                .with_op("describe")
                .with_member(path)
                .with_message("File has no edit classification"),

            SclmError::DuplicateMember { path } => ExError::new(ExErrorKind::DuplicateMember)
                .with_member(path)
                .with_message("Identity path appears more than once"),

            SclmError::RemoteUnavailable { status } => {
                ExError::new(ExErrorKind::RemoteUnavailable)
                    .with_op("reconcile")
                    .with_message(format!("remote report unavailable: {}", status))
            }

            SclmError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            SclmError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            SclmError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}

impl From<serde_json::Error> for SclmError {
    fn from(err: serde_json::Error) -> Self {
        SclmError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for SclmError {
    fn from(err: std::io::Error) -> Self {
        SclmError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::InvalidTimestamp,
            ExErrorKind::InvalidVersion,
            ExErrorKind::MissingField,
            ExErrorKind::Unclassified,
            ExErrorKind::DuplicateMember,
            ExErrorKind::RemoteUnavailable,
            ExErrorKind::InvalidConfig,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::InvalidTimestamp)
            .with_op("extract")
            .with_line(3)
            .with_message("bad date");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_INVALID_TIMESTAMP]"));
        assert!(text.contains("'extract'"));
        assert!(text.contains("(line: 3)"));
    }

    #[test]
    fn test_source_chain() {
        let inner = ExError::new(ExErrorKind::Io).with_message("disk");
        let outer = ExError::new(ExErrorKind::InvalidConfig).with_source(inner);
        assert_eq!(outer.source_error().map(|e| e.kind()), Some(ExErrorKind::Io));
        assert!(std::error::Error::source(&outer).is_some());
    }
}
