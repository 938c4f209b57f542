/// Convenience result type used across stardrift.
pub type StardriftResult<T> = Result<T, StardriftError>;

/// Top-level error taxonomy used by the crate's fallible plumbing.
///
/// Animation components themselves never fail: they degrade to drawing less. Errors come from
/// configuration, surfaces, assets and output sinks.
#[derive(thiserror::Error, Debug)]
pub enum StardriftError {
    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or compositing frames.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while loading fonts, images or other external assets.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StardriftError {
    /// Build a [`StardriftError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StardriftError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StardriftError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`StardriftError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
