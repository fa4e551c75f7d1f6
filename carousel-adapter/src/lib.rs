//! Host-facing pieces for the `carousel` crate.
//!
//! The `carousel` crate owns the pure list state. This crate adds what a real picker panel needs
//! around it:
//!
//! - A blurred backdrop pipeline (snapshot, downscale, blur, optional color overlay), run as
//!   a single-flight job with an explicit `Ready`/`Executing` state
//! - A controller that composes list state and pipeline and speaks to the UI toolkit through a
//!   command outbox and a small capability trait
//!
//! This crate is intentionally toolkit-agnostic (no GTK/egui/Android bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod blur;
mod controller;
mod host;


pub use blur::{Backdrop, BlurListener, BlurPipeline, BlurState, StartOutcome};
pub use controller::{CarouselController, SelectionListener, Slide};
pub use host::{Command, Host, SnapshotSource, Transition, dispatch};

pub use carousel;
