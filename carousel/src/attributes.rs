use alloc::string::String;
use alloc::vec::Vec;

use crate::settings::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_LINES_COLOR, DEFAULT_TEXT_COLOR_CENTER,
    DEFAULT_TEXT_COLOR_NO_CENTER,
};
use crate::{
    BlurAlgorithm, CarouselError, Color, DEFAULT_BLUR_RADIUS, DEFAULT_DOWNSCALE_FACTOR,
    PickerSettings,
};

/// The host's style-attribute bag, as parsed from layout/theme resources.
///
/// Every field is optional in the source; missing ones take the defaults below. With
/// `feature = "serde"`, partial documents deserialize with the same defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerAttributes {
    pub auto_dismiss: bool,
    pub items_clickable: bool,
    pub background_color: Color,
    pub line_color: Color,
    pub text_color_center: Color,
    pub text_color_no_center: Color,
    pub use_blur: bool,
    pub blur_radius: u32,
    pub downscale_factor: f32,
    pub filter_color: Option<Color>,
    pub use_accelerated_blur: bool,
    pub initial_entries: Vec<String>,
}

impl Default for PickerAttributes {
    fn default() -> Self {
        Self {
            auto_dismiss: true,
            items_clickable: true,
            background_color: DEFAULT_BACKGROUND_COLOR,
            line_color: DEFAULT_LINES_COLOR,
            text_color_center: DEFAULT_TEXT_COLOR_CENTER,
            text_color_no_center: DEFAULT_TEXT_COLOR_NO_CENTER,
            use_blur: true,
            blur_radius: DEFAULT_BLUR_RADIUS,
            downscale_factor: DEFAULT_DOWNSCALE_FACTOR,
            filter_color: None,
            use_accelerated_blur: false,
            initial_entries: Vec::new(),
        }
    }
}

impl PickerAttributes {
    /// Converts the bag into settings, rejecting out-of-range blur values.
    pub fn to_settings(&self) -> Result<PickerSettings, CarouselError> {
        let algorithm = if self.use_accelerated_blur {
            BlurAlgorithm::Accelerated
        } else {
            BlurAlgorithm::Software
        };
        let settings = PickerSettings::builder()
            .with_items(self.initial_entries.iter().cloned())
            .with_auto_dismiss(self.auto_dismiss)
            .with_items_clickable(self.items_clickable)
            .with_background_color(self.background_color)
            .with_lines_color(self.line_color)
            .with_text_color_center(self.text_color_center)
            .with_text_color_no_center(self.text_color_no_center)
            .with_use_blur(self.use_blur)
            .with_blur_algorithm(algorithm)
            .with_blur_filter_color(self.filter_color)
            .with_blur_radius(self.blur_radius)?
            .with_blur_downscale(self.downscale_factor)?
            .build();
        Ok(settings)
    }
}
