use crate::{CarouselError, PickerSettings};

/// Current layout of [`PickerState`].
pub const STATE_VERSION: u32 = 1;

/// Everything needed to bring a picker back after the host tears it down.
///
/// Restoring is two-phase: apply `settings` in full, then, only if `is_panel_shown`, re-run the
/// show sequence at `centered_raw_position` once the host layout is ready again.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerState {
    pub version: u32,
    pub settings: PickerSettings,
    pub is_panel_shown: bool,
    pub centered_raw_position: usize,
}

impl PickerState {
    pub fn new(
        settings: PickerSettings,
        is_panel_shown: bool,
        centered_raw_position: usize,
    ) -> Self {
        Self {
            version: STATE_VERSION,
            settings,
            is_panel_shown,
            centered_raw_position,
        }
    }

    /// Rejects records written by a newer layout or carrying out-of-range blur values.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.version > STATE_VERSION {
            return Err(CarouselError::UnsupportedStateVersion {
                found: self.version,
                supported: STATE_VERSION,
            });
        }
        self.settings.blur().validate()
    }
}
