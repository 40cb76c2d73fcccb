use thiserror::Error;

/// Result type alias using CodeShapeError
pub type Result<T> = std::result::Result<T, CodeShapeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and process exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    /// A compact string or object form in a snapshot document is malformed
    InvalidFormat,
    /// A requested snapshot is missing or decodes to an absent top-level array
    MissingInput,
    NotFound,
    /// A configuration file exists but cannot be used
    InvalidConfig,

    // Diff
    DeterminismViolation,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidFormat => "ERR_INVALID_FORMAT",
            ExErrorKind::MissingInput => "ERR_MISSING_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::DeterminismViolation => "ERR_DETERMINISM_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity, path) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (entity kind or identity key)
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
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

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
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
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for codeshape operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodeShapeError {
    // ===== Format Errors =====
    /// A compact `"<Type> <name>"` string had a token count other than 1 or 2
    #[error("Invalid compact form '{value}': expected 1 or 2 tokens, found {tokens}")]
    CompactFormat { value: String, tokens: usize },

    /// An entity that must be encoded as an object was given another JSON shape
    #[error("Invalid token to start {entity}: expected an object")]
    MissingObjectStart { entity: String },

    /// The snapshot document could not be decoded
    #[error("Snapshot decode failed: {message}")]
    Decode { message: String },

    /// The snapshot could not be encoded
    #[error("Snapshot encode failed: {message}")]
    Encode { message: String },

    // ===== Missing Input Errors =====
    /// No snapshot document exists at the requested location
    #[error("Snapshot not found: {path}")]
    SnapshotNotFound { path: String },

    /// The snapshot document decoded to a null / absent top-level array
    #[error("Snapshot has no top-level project array: {path}")]
    SnapshotAbsent { path: String },

    // ===== Configuration Errors =====
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    // ===== Generic Errors =====
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<CodeShapeError> for ExError {
    fn from(err: CodeShapeError) -> Self {
        match err {
            CodeShapeError::CompactFormat { value, tokens } => {
                ExError::new(ExErrorKind::InvalidFormat)
                    .with_op("parse_compact")
                    .with_message(format!(
                        "compact form '{}' has {} tokens, expected 1 or 2",
                        value, tokens
                    ))
            }

            CodeShapeError::MissingObjectStart { entity } => {
                ExError::new(ExErrorKind::InvalidFormat)
                    .with_op("decode_snapshot")
                    .with_entity(entity)
                    .with_message("Invalid token to start entity: expected an object")
            }

            CodeShapeError::Decode { message } => ExError::new(ExErrorKind::InvalidFormat)
                .with_op("decode_snapshot")
                .with_message(message),

            CodeShapeError::Encode { message } => ExError::new(ExErrorKind::Serialization)
                .with_op("encode_snapshot")
                .with_message(message),

            CodeShapeError::SnapshotNotFound { path } => ExError::new(ExErrorKind::MissingInput)
                .with_path(path)
                .with_message("Snapshot not found"),

            CodeShapeError::SnapshotAbsent { path } => ExError::new(ExErrorKind::MissingInput)
                .with_path(path)
                .with_message("Snapshot has no top-level project array"),

            CodeShapeError::Config { message } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            CodeShapeError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for CodeShapeError {
    fn from(err: serde_json::Error) -> Self {
        CodeShapeError::Decode {
            message: err.to_string(),
        }
    }
}
