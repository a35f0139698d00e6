/// Convenience result type used across flowwave.
pub type FlowResult<T> = Result<T, FlowError>;

/// Top-level error taxonomy for the fallible edges of the crate.
///
/// Wave sampling itself never fails; errors come from configuration, rendering limits, and IO.
#[derive(thiserror::Error, Debug)]
pub enum FlowError {
    /// Invalid user-provided configuration or dimensions.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation track definition.
    #[error("animation error: {0}")]
    Animation(String),

    /// Failure while rasterizing or encoding a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlowError {
    /// Build a [`FlowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlowError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`FlowError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FlowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
