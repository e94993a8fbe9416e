/// Convenience result type used across shapeshift.
pub type ShapeshiftResult<T> = Result<T, ShapeshiftError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ShapeshiftError {
    /// A command list violates the sub-path or chain-continuity invariants.
    #[error("malformed path: {0}")]
    MalformedPath(String),

    /// Path-string text that does not follow the supported grammar.
    #[error("path parse error: {0}")]
    PathParse(String),

    /// Interpolation requested for a pair that is not morphable.
    #[error("paths are not morphable: {0}")]
    NotMorphable(String),

    /// Split requested on a command that cannot be split.
    #[error("command cannot be split: {0}")]
    NonSplittableCommand(String),

    /// Start and end layer trees cannot be paired for export.
    #[error("incompatible layer structure: {0}")]
    IncompatibleLayerStructure(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShapeshiftError {
    /// Build a [`ShapeshiftError::MalformedPath`] value.
    pub fn malformed_path(msg: impl Into<String>) -> Self {
        Self::MalformedPath(msg.into())
    }

    /// Build a [`ShapeshiftError::PathParse`] value.
    pub fn path_parse(msg: impl Into<String>) -> Self {
        Self::PathParse(msg.into())
    }

    /// Build a [`ShapeshiftError::NotMorphable`] value.
    pub fn not_morphable(msg: impl Into<String>) -> Self {
        Self::NotMorphable(msg.into())
    }

    /// Build a [`ShapeshiftError::NonSplittableCommand`] value.
    pub fn non_splittable(msg: impl Into<String>) -> Self {
        Self::NonSplittableCommand(msg.into())
    }

    /// Build a [`ShapeshiftError::IncompatibleLayerStructure`] value.
    pub fn incompatible_layers(msg: impl Into<String>) -> Self {
        Self::IncompatibleLayerStructure(msg.into())
    }

    /// Build a [`ShapeshiftError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ShapeshiftError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
