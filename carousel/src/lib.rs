//! Headless centering/selection state for a carousel picker.
//!
//! For the blurred backdrop pipeline and the host-facing controller, see the `carousel-adapter`
//! crate.
//!
//! This crate holds the pure state of a "wheel" style picker: a padded item list with empty
//! sentinel rows at both ends, the index currently in the center of the viewport, the discrete
//! emphasis each row gets by its distance from that center, and the tracker that turns raw scroll
//! telemetry into debounced selection notifications.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size and row height
//! - the first visible row and its top offset while scrolling
//! - a "scroll settled" signal, taps, and a monotonic clock for `tick(now_ms)`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod attributes;
mod error;
mod settings;
mod state;
mod store;
mod styler;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use attributes::PickerAttributes;
pub use error::CarouselError;
pub use settings::{
    BlurAlgorithm, BlurConfig, DEFAULT_ALPHA, DEFAULT_BLUR_RADIUS, DEFAULT_DOWNSCALE_FACTOR,
    MAX_BLUR_RADIUS, MAX_DOWNSCALE, MIN_BLUR_RADIUS, MIN_DOWNSCALE, PickerSettings,
    PickerSettingsBuilder, PopupLocation,
};
pub use state::{PickerState, STATE_VERSION};
pub use store::{PADDING, PaddedItemStore};
pub use styler::{RowStyle, style_for};
pub use tracker::{CenterTracker, DEFAULT_ROW_HEIGHT, SELECTION_DELAY_MS, SettleOutcome};
pub use types::{Color, EmphasisTier, RequestId, Selection, TextAppearance, Tilt};
