/// Convenience result type used across the crate.
pub type AquaResult<T> = Result<T, AquaError>;

/// Top-level error taxonomy used by rendering APIs.
///
/// Configuration and geometry problems are always detected before any
/// backend call is made; backend faults are propagated unmodified.
#[derive(thiserror::Error, Debug)]
pub enum AquaError {
    /// Unsupported widget kind, position, or size combination.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid raster dimensions, placement, or scale factor.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Non-zero status or fault reported by the native rendering backend.
    #[error("backend error: {0}")]
    Backend(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AquaError {
    /// Build an [`AquaError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build an [`AquaError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build an [`AquaError::Backend`] value.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Map a native status code to an error. Zero is success.
    pub fn from_status(status: i32) -> Option<Self> {
        if status == 0 {
            None
        } else {
            Some(Self::Backend(format!(
                "native renderer returned status {status}"
            )))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
