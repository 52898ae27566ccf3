/// Convenience result type used across stagger.
pub type StaggerResult<T> = Result<T, StaggerError>;

/// Error taxonomy for the configuration boundary.
///
/// The animation engine itself is infallible; these errors only surface while loading or
/// validating declarative configuration.
#[derive(thiserror::Error, Debug)]
pub enum StaggerError {
    /// Invalid user-provided configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation description that cannot be assembled into a graph.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StaggerError {
    /// Build a [`StaggerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StaggerError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`StaggerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
