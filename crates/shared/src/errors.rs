//! Error envelope carried across crate boundaries.
//!
//! Every failure gets a namespaced [`ErrorCode`] (`namespace:code`), an
//! [`ErrorKind`] telling whether the caller could have avoided it, and
//! string metadata for diagnostics. I/O failures always land in the `io`
//! namespace so the binary can map them to a dedicated exit code.

use std::collections::BTreeMap;
use std::{fmt, io};

/// Diagnostic key/value pairs attached to an envelope.
pub type ErrorMetadata = BTreeMap<String, String>;

const IO_NAMESPACE: &str = "io";

/// Origin of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caused by caller input: missing fields, malformed config, bad env vars.
    Expected,
    /// Caused by the environment: I/O, serialization.
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Expected => "expected",
            Self::Unexpected => "unexpected",
        })
    }
}

/// Whether repeating the failed operation may succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Transient; a retry may succeed.
    Retriable,
    /// Permanent for the given input.
    NonRetriable,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Retriable => "retriable",
            Self::NonRetriable => "non-retriable",
        })
    }
}

/// Namespaced, stable failure identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    namespace: String,
    code: String,
}

impl ErrorCode {
    /// Build a code from its namespace and identifier.
    pub fn new(namespace: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            code: code.into(),
        }
    }

    /// `validation:missing_required_field`.
    pub fn missing_required_field() -> Self {
        Self::new("validation", "missing_required_field")
    }

    /// `core:internal`, for failures that indicate a bug or broken invariant.
    pub fn internal() -> Self {
        Self::new("core", "internal")
    }

    fn from_io_kind(kind: io::ErrorKind) -> Self {
        let code = match kind {
            io::ErrorKind::NotFound => "not_found",
            io::ErrorKind::PermissionDenied => "permission_denied",
            io::ErrorKind::InvalidData => "invalid_data",
            io::ErrorKind::Interrupted | io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
                "interrupted"
            },
            _ => "other",
        };
        Self::new(IO_NAMESPACE, code)
    }

    /// Namespace part, e.g. `config`.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Identifier part, e.g. `unsupported_version`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.namespace, self.code)
    }
}

/// A failure with its code, classification, and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    /// Where the failure came from.
    pub kind: ErrorKind,
    /// Retry classification.
    pub class: ErrorClass,
    /// Stable code.
    pub code: ErrorCode,
    /// Human-readable description.
    pub message: String,
    /// Extra diagnostics such as the offending path or env var.
    pub metadata: ErrorMetadata,
}

impl ErrorEnvelope {
    /// Caller-caused, never retriable.
    pub fn expected(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Expected, ErrorClass::NonRetriable, code, message)
    }

    /// Environment-caused, with an explicit retry class.
    pub fn unexpected(code: ErrorCode, message: impl Into<String>, class: ErrorClass) -> Self {
        Self::with_kind(ErrorKind::Unexpected, class, code, message)
    }

    fn with_kind(
        kind: ErrorKind,
        class: ErrorClass,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            class,
            code,
            message: message.into(),
            metadata: ErrorMetadata::new(),
        }
    }

    /// Attach one metadata entry, replacing any previous value for `key`.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// True for caller-caused failures.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        matches!(self.kind, ErrorKind::Expected)
    }

    /// True when the failure came from an I/O operation.
    #[must_use]
    pub fn is_io(&self) -> bool {
        self.code.namespace() == IO_NAMESPACE
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} {} {}: {}",
            self.kind, self.class, self.code, self.message
        )
    }
}

impl std::error::Error for ErrorEnvelope {}

impl From<io::Error> for ErrorEnvelope {
    fn from(error: io::Error) -> Self {
        let kind = error.kind();
        let class = match kind {
            io::ErrorKind::Interrupted | io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
                ErrorClass::Retriable
            },
            _ => ErrorClass::NonRetriable,
        };
        Self::unexpected(ErrorCode::from_io_kind(kind), error.to_string(), class)
    }
}
