use alloc::string::String;
use alloc::vec::Vec;

use crate::{CarouselError, Color, RequestId};

pub const MIN_BLUR_RADIUS: u32 = 1;
pub const MAX_BLUR_RADIUS: u32 = 25;
pub const DEFAULT_BLUR_RADIUS: u32 = 15;

pub const MIN_DOWNSCALE: f32 = 1.0;
pub const MAX_DOWNSCALE: f32 = 6.0;
pub const DEFAULT_DOWNSCALE_FACTOR: f32 = 5.0;

/// Alpha applied to the backdrop when it is displayed.
pub const DEFAULT_ALPHA: u8 = 100;

pub(crate) const DEFAULT_BACKGROUND_COLOR: Color = Color(0xF0FA_FAFA);
pub(crate) const DEFAULT_LINES_COLOR: Color = Color(0xFFBD_BDBD);
pub(crate) const DEFAULT_TEXT_COLOR_CENTER: Color = Color(0xFF21_2121);
pub(crate) const DEFAULT_TEXT_COLOR_NO_CENTER: Color = Color(0xFF75_7575);

/// Which blur kernel the pipeline runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlurAlgorithm {
    /// Always available.
    #[default]
    Software,
    /// Best effort; falls back to `Software` when unavailable at runtime.
    Accelerated,
}

/// Blur parameters for one picker instance.
///
/// `radius` and `downscale` are validated on assignment: an out-of-range value is rejected and
/// the previous one is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlurConfig {
    pub use_blur: bool,
    radius: u32,
    downscale: f32,
    pub algorithm: BlurAlgorithm,
    /// Color composited over the blurred image with an overlay blend.
    pub overlay_color: Option<Color>,
    pub alpha: u8,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            use_blur: true,
            radius: DEFAULT_BLUR_RADIUS,
            downscale: DEFAULT_DOWNSCALE_FACTOR,
            algorithm: BlurAlgorithm::Software,
            overlay_color: None,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl BlurConfig {
    pub fn is_valid_radius(radius: u32) -> bool {
        (MIN_BLUR_RADIUS..=MAX_BLUR_RADIUS).contains(&radius)
    }

    pub fn is_valid_downscale(downscale: f32) -> bool {
        (MIN_DOWNSCALE..=MAX_DOWNSCALE).contains(&downscale)
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn downscale(&self) -> f32 {
        self.downscale
    }

    pub fn set_radius(&mut self, radius: u32) -> Result<(), CarouselError> {
        if !Self::is_valid_radius(radius) {
            cwarn!(radius, "rejecting blur radius");
            return Err(CarouselError::InvalidBlurRadius(radius));
        }
        self.radius = radius;
        Ok(())
    }

    pub fn set_downscale(&mut self, downscale: f32) -> Result<(), CarouselError> {
        if !Self::is_valid_downscale(downscale) {
            cwarn!(downscale, "rejecting downscale factor");
            return Err(CarouselError::InvalidDownscale(downscale));
        }
        self.downscale = downscale;
        Ok(())
    }

    pub fn with_radius(mut self, radius: u32) -> Result<Self, CarouselError> {
        self.set_radius(radius)?;
        Ok(self)
    }

    pub fn with_downscale(mut self, downscale: f32) -> Result<Self, CarouselError> {
        self.set_downscale(downscale)?;
        Ok(self)
    }

    pub fn with_use_blur(mut self, use_blur: bool) -> Self {
        self.use_blur = use_blur;
        self
    }

    pub fn with_algorithm(mut self, algorithm: BlurAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_overlay_color(mut self, overlay_color: Option<Color>) -> Self {
        self.overlay_color = overlay_color;
        self
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Re-checks bounds after deserialization, where the setters were bypassed.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if !Self::is_valid_radius(self.radius) {
            return Err(CarouselError::InvalidBlurRadius(self.radius));
        }
        if !Self::is_valid_downscale(self.downscale) {
            return Err(CarouselError::InvalidDownscale(self.downscale));
        }
        Ok(())
    }
}

/// Where the panel slides in from. Hosts pick the matching transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PopupLocation {
    #[default]
    Unspecified,
    Bottom,
    Top,
}

/// An immutable snapshot of everything a picker is configured with.
///
/// Built with [`PickerSettings::builder`] and applied as a whole by the controller; it is also the
/// settings half of the persisted state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerSettings {
    request_id: RequestId,
    items: Vec<String>,
    text_color_center: Color,
    text_color_no_center: Color,
    background_color: Color,
    lines_color: Color,
    items_clickable: bool,
    auto_dismiss: bool,
    popup_location: PopupLocation,
    blur: BlurConfig,
}

impl Default for PickerSettings {
    fn default() -> Self {
        PickerSettingsBuilder::default().build()
    }
}

impl PickerSettings {
    pub fn builder() -> PickerSettingsBuilder {
        PickerSettingsBuilder::default()
    }

    /// A builder pre-filled with these settings.
    pub fn to_builder(&self) -> PickerSettingsBuilder {
        PickerSettingsBuilder {
            inner: self.clone(),
        }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn text_color_center(&self) -> Color {
        self.text_color_center
    }

    pub fn text_color_no_center(&self) -> Color {
        self.text_color_no_center
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn lines_color(&self) -> Color {
        self.lines_color
    }

    pub fn items_clickable(&self) -> bool {
        self.items_clickable
    }

    pub fn auto_dismiss(&self) -> bool {
        self.auto_dismiss
    }

    pub fn popup_location(&self) -> PopupLocation {
        self.popup_location
    }

    pub fn blur(&self) -> &BlurConfig {
        &self.blur
    }
}

/// Builder for [`PickerSettings`].
///
/// Unvalidated fields use infallible `with_*` methods; blur radius and downscale are checked at
/// the point of assignment.
#[derive(Clone, Debug)]
pub struct PickerSettingsBuilder {
    inner: PickerSettings,
}

impl Default for PickerSettingsBuilder {
    fn default() -> Self {
        Self {
            inner: PickerSettings {
                request_id: 0,
                items: Vec::new(),
                text_color_center: DEFAULT_TEXT_COLOR_CENTER,
                text_color_no_center: DEFAULT_TEXT_COLOR_NO_CENTER,
                background_color: DEFAULT_BACKGROUND_COLOR,
                lines_color: DEFAULT_LINES_COLOR,
                items_clickable: true,
                auto_dismiss: true,
                popup_location: PopupLocation::Unspecified,
                blur: BlurConfig::default(),
            },
        }
    }
}

impl PickerSettingsBuilder {
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.inner.request_id = request_id;
        self
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_text_color_center(mut self, color: Color) -> Self {
        self.inner.text_color_center = color;
        self
    }

    pub fn with_text_color_no_center(mut self, color: Color) -> Self {
        self.inner.text_color_no_center = color;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.inner.background_color = color;
        self
    }

    pub fn with_lines_color(mut self, color: Color) -> Self {
        self.inner.lines_color = color;
        self
    }

    pub fn with_items_clickable(mut self, items_clickable: bool) -> Self {
        self.inner.items_clickable = items_clickable;
        self
    }

    pub fn with_auto_dismiss(mut self, auto_dismiss: bool) -> Self {
        self.inner.auto_dismiss = auto_dismiss;
        self
    }

    pub fn with_popup_location(mut self, popup_location: PopupLocation) -> Self {
        self.inner.popup_location = popup_location;
        self
    }

    pub fn with_use_blur(mut self, use_blur: bool) -> Self {
        self.inner.blur.use_blur = use_blur;
        self
    }

    pub fn with_blur_algorithm(mut self, algorithm: BlurAlgorithm) -> Self {
        self.inner.blur.algorithm = algorithm;
        self
    }

    pub fn with_blur_radius(mut self, radius: u32) -> Result<Self, CarouselError> {
        self.inner.blur.set_radius(radius)?;
        Ok(self)
    }

    pub fn with_blur_downscale(mut self, downscale: f32) -> Result<Self, CarouselError> {
        self.inner.blur.set_downscale(downscale)?;
        Ok(self)
    }

    pub fn with_blur_filter_color(mut self, color: Option<Color>) -> Self {
        self.inner.blur.overlay_color = color;
        self
    }

    pub fn with_blur_alpha(mut self, alpha: u8) -> Self {
        self.inner.blur.alpha = alpha;
        self
    }

    pub fn with_blur(mut self, blur: BlurConfig) -> Self {
        self.inner.blur = blur;
        self
    }

    pub fn build(self) -> PickerSettings {
        self.inner
    }
}
