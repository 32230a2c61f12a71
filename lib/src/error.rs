/// Custom error type for the markport library
///
/// Structural variants mean the bookmark export does not follow the two-level
/// `<DL>/<DT>/<H3>/<A>` layout and abort the whole conversion.
#[derive(Debug, thiserror::Error)]
pub enum MarkportError {
    /// A nested `<DL>` was opened before any `<H3>` label was read
    #[error("Structural error: nested list found before any label heading")]
    MissingLabel,

    /// A link element lacks the `ADD_DATE` attribute
    #[error("Structural error: link {url:?} has no ADD_DATE attribute")]
    MissingAddDate { url: String },

    /// `ADD_DATE` is present but not an integer
    #[error("Invalid ADD_DATE value {value:?}: {source}")]
    InvalidAddDate {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// I/O errors (reading the export, writing outputs)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors (intermediate document)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MarkportError {
    /// True for errors caused by the markup violating the expected nesting
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            MarkportError::MissingLabel | MarkportError::MissingAddDate { .. }
        )
    }
}

/// Result type alias using MarkportError
pub type Result<T> = std::result::Result<T, MarkportError>;

impl From<serde_yaml::Error> for MarkportError {
    fn from(err: serde_yaml::Error) -> Self {
        MarkportError::Yaml(err.to_string())
    }
}

impl From<toml::de::Error> for MarkportError {
    fn from(err: toml::de::Error) -> Self {
        MarkportError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for MarkportError {
    fn from(err: toml::ser::Error) -> Self {
        MarkportError::Toml(err.to_string())
    }
}

impl From<tempfile::PersistError> for MarkportError {
    fn from(err: tempfile::PersistError) -> Self {
        MarkportError::Io(err.error)
    }
}
