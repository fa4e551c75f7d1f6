use thiserror::Error;

/// Errors surfaced by the carousel crates.
///
/// Configuration errors are returned synchronously to whoever supplied the bad value; the
/// previous valid value is kept. `MissingCallback` describes a programmer error and is raised as
/// a panic by the component that needed the callback.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error(
        "invalid blur radius {0} (expected {min}..={max})",
        min = crate::MIN_BLUR_RADIUS,
        max = crate::MAX_BLUR_RADIUS
    )]
    InvalidBlurRadius(u32),
    #[error(
        "invalid downscale factor {0} (expected {min}..={max})",
        min = crate::MIN_DOWNSCALE,
        max = crate::MAX_DOWNSCALE
    )]
    InvalidDownscale(f32),
    #[error("no {0} callback registered")]
    MissingCallback(&'static str),
    #[error("unsupported picker state version {found} (newest known is {supported})")]
    UnsupportedStateVersion { found: u32, supported: u32 },
}

impl CarouselError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidBlurRadius(_) | Self::InvalidDownscale(_))
    }
}
