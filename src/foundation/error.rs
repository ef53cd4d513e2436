/// Crate-wide result alias.
pub type ScrollframeResult<T> = Result<T, ScrollframeError>;

/// Errors surfaced by configuration, preloading and frame decoding.
#[derive(thiserror::Error, Debug)]
pub enum ScrollframeError {
    /// Invalid construction-time input (frame count, smoothing coefficient, metrics).
    #[error("validation error: {0}")]
    Validation(String),

    /// A frame could not be fetched from its address.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Frame bytes were fetched but could not be decoded as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Site configuration is inconsistent.
    #[error("config error: {0}")]
    Config(String),

    /// Configuration (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its original context chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollframeError {
    /// Build a [`ScrollframeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollframeError::Fetch`].
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`ScrollframeError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ScrollframeError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrollframeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollframeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
