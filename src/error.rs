//! Error types for galaxy generation.
//!
//! This module provides error types for parameter validation, sprite texture
//! loading, and preset persistence.

use std::fmt;

/// Errors raised when a parameter set cannot be used for generation.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// `branches` was zero. Every index is assigned to `i % branches`.
    ZeroBranches,
    /// A float parameter was NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::ZeroBranches => write!(f, "Galaxy must have at least one branch (branches = 0)"),
            ParamError::NonFinite { field } => write!(f, "Parameter '{}' must be a finite number", field),
        }
    }
}

impl std::error::Error for ParamError {}

/// Errors that can occur during generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GalaxyError {
    /// The parameter set failed validation.
    Params(ParamError),
}

impl fmt::Display for GalaxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalaxyError::Params(e) => write!(f, "Invalid galaxy configuration: {}", e),
        }
    }
}

impl std::error::Error for GalaxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GalaxyError::Params(e) => Some(e),
        }
    }
}

impl From<ParamError> for GalaxyError {
    fn from(e: ParamError) -> Self {
        GalaxyError::Params(e)
    }
}

/// Errors that can occur during sprite texture loading.
#[derive(Debug)]
pub enum TextureError {
    /// Failed to decode the image file.
    ImageLoad(image::ImageError),
    /// Failed to read file from disk.
    Io(std::io::Error),
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::ImageLoad(e) => write!(f, "Failed to load image: {}", e),
            TextureError::Io(e) => write!(f, "Failed to read texture file: {}", e),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::ImageLoad(e) => Some(e),
            TextureError::Io(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::ImageLoad(e)
    }
}

impl From<std::io::Error> for TextureError {
    fn from(e: std::io::Error) -> Self {
        TextureError::Io(e)
    }
}

/// Errors that can occur when saving or loading a parameter preset.
#[derive(Debug)]
pub enum PresetError {
    /// Failed to read or write the preset file.
    Io(std::io::Error),
    /// The preset was not valid JSON for a parameter set.
    Json(serde_json::Error),
    /// The preset parsed but describes an unusable galaxy.
    Params(ParamError),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::Io(e) => write!(f, "Failed to access preset file: {}", e),
            PresetError::Json(e) => write!(f, "Malformed preset: {}", e),
            PresetError::Params(e) => write!(f, "Invalid preset: {}", e),
        }
    }
}

impl std::error::Error for PresetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresetError::Io(e) => Some(e),
            PresetError::Json(e) => Some(e),
            PresetError::Params(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for PresetError {
    fn from(e: std::io::Error) -> Self {
        PresetError::Io(e)
    }
}

impl From<serde_json::Error> for PresetError {
    fn from(e: serde_json::Error) -> Self {
        PresetError::Json(e)
    }
}

impl From<ParamError> for PresetError {
    fn from(e: ParamError) -> Self {
        PresetError::Params(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_param_error_wraps_as_source() {
        let err: GalaxyError = ParamError::ZeroBranches.into();
        assert!(err.to_string().contains("at least one branch"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_non_finite_names_field() {
        let err = ParamError::NonFinite { field: "spin" };
        assert!(err.to_string().contains("'spin'"));
    }
}
