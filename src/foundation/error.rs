/// Convenience result type used across Linefall.
pub type LinefallResult<T> = Result<T, LinefallError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum LinefallError {
    /// Invalid user-provided configuration data (empty gradients or category
    /// tables, malformed hex colors, zero-dimension canvases).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Errors while rasterizing or encoding a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LinefallError {
    /// Build a [`LinefallError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`LinefallError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
