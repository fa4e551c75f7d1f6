mod accelerated;
mod overlay;
mod software;

use std::time::Duration;

use carousel::{BlurAlgorithm, BlurConfig, CarouselError};
use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use image::RgbaImage;
use image::imageops::FilterType;

use crate::SnapshotSource;

#[cfg(test)]
pub(crate) use overlay::{apply as apply_overlay, overlay_channel};

/// Pipeline state. A run moves `Ready → Executing → Ready`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlurState {
    #[default]
    Ready,
    Executing,
}

/// What a call to [`BlurPipeline::start`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// Blur is disabled; the listener already received `None`.
    Delivered,
    /// A run is in flight; poll the pipeline to receive the result.
    Started,
    /// A run was already in flight (or the pipeline is detached). Nothing happened.
    Rejected,
}

/// Receives the finished backdrop (or `None` when there is nothing to show).
pub trait BlurListener {
    fn on_blur_finished(&mut self, backdrop: Option<Backdrop>);
}

impl<F: FnMut(Option<Backdrop>)> BlurListener for F {
    fn on_blur_finished(&mut self, backdrop: Option<Backdrop>) {
        self(backdrop)
    }
}

/// The composited backdrop raster.
///
/// Owned by exactly one holder at a time. [`Backdrop::release`] consumes it, so a released
/// image can be neither shown nor released again.
#[derive(Debug, PartialEq)]
pub struct Backdrop {
    id: u64,
    image: RgbaImage,
    alpha: u8,
}

impl Backdrop {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Display alpha for the whole image.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Frees the pixel buffer.
    pub fn release(self) {
        atrace!(id = self.id, bytes = self.image.len(), "Backdrop::release");
        drop(self.image);
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

struct InFlight {
    rx: Receiver<Option<RgbaImage>>,
    config: BlurConfig,
}

/// Snapshot → downscale → blur → overlay, as a single-flight asynchronous job.
///
/// Capture and downscale run on the calling (UI) thread inside `start`; the blur kernel runs on
/// the rayon pool; overlay and delivery happen inside `poll`/`wait`, which the UI loop calls.
/// A second `start` while a run is in flight is rejected, never queued, and a running job is
/// never aborted.
#[derive(Default)]
pub struct BlurPipeline {
    state: BlurState,
    detached: bool,
    in_flight: Option<InFlight>,
    next_id: u64,
}

impl core::fmt::Debug for BlurPipeline {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BlurPipeline")
            .field("state", &self.state)
            .field("detached", &self.detached)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl BlurPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BlurState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        !self.detached
    }

    /// Stops delivering results. New starts are rejected and an in-flight result is dropped
    /// when it arrives.
    pub fn detach(&mut self) {
        adebug!("BlurPipeline::detach");
        self.detached = true;
    }

    pub fn attach(&mut self) {
        self.detached = false;
    }

    /// Starts a run.
    ///
    /// With `config.use_blur == false` the listener is called synchronously with `None` and no
    /// worker is spawned.
    ///
    /// # Panics
    ///
    /// Panics if the result is delivered synchronously and `listener` is `None`.
    pub fn start(
        &mut self,
        source: &mut dyn SnapshotSource,
        config: &BlurConfig,
        listener: Option<&mut dyn BlurListener>,
    ) -> StartOutcome {
        if self.detached {
            adebug!("BlurPipeline::start while detached; ignored");
            return StartOutcome::Rejected;
        }
        if self.state == BlurState::Executing {
            adebug!("BlurPipeline::start while executing; treated as cancellation");
            return StartOutcome::Rejected;
        }
        if !config.use_blur {
            deliver(listener, None);
            return StartOutcome::Delivered;
        }

        self.state = BlurState::Executing;
        let (tx, rx) = crossbeam_channel::bounded(1);
        let config = *config;

        match capture(source) {
            None => {
                adebug!("BlurPipeline: empty snapshot; finishing without backdrop");
                let _ = tx.send(None);
            }
            Some(snapshot) => {
                let scaled = downscale(&snapshot, config.downscale());
                drop(snapshot);
                atrace!(
                    width = scaled.width(),
                    height = scaled.height(),
                    radius = config.radius(),
                    "BlurPipeline: spawning blur"
                );
                rayon::spawn(move || {
                    let blurred = blur(&scaled, config.radius(), config.algorithm);
                    // The receiver is gone only if the pipeline was dropped.
                    let _ = tx.send(Some(blurred));
                });
            }
        }

        self.in_flight = Some(InFlight { rx, config });
        StartOutcome::Started
    }

    /// Delivers a finished run, if any. Call from the UI loop every frame.
    ///
    /// Returns `true` when the listener was called.
    ///
    /// # Panics
    ///
    /// Panics if a result is ready and `listener` is `None`.
    pub fn poll(&mut self, listener: Option<&mut dyn BlurListener>) -> bool {
        let Some(job) = &self.in_flight else {
            return false;
        };
        let result = match job.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                awarn!("BlurPipeline: worker vanished; finishing without backdrop");
                None
            }
        };
        self.finish(result, listener)
    }

    /// Blocks up to `timeout` for the in-flight run, then delivers it like [`Self::poll`].
    pub fn wait(&mut self, listener: Option<&mut dyn BlurListener>, timeout: Duration) -> bool {
        let Some(job) = &self.in_flight else {
            return false;
        };
        let result = match job.rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => return false,
            Err(RecvTimeoutError::Disconnected) => {
                awarn!("BlurPipeline: worker vanished; finishing without backdrop");
                None
            }
        };
        self.finish(result, listener)
    }

    fn finish(
        &mut self,
        result: Option<RgbaImage>,
        listener: Option<&mut dyn BlurListener>,
    ) -> bool {
        let Some(job) = self.in_flight.take() else {
            return false;
        };
        if self.detached {
            adebug!("BlurPipeline: dropping result after detach");
            self.state = BlurState::Ready;
            return false;
        }

        let backdrop = result.map(|image| {
            let image = match job.config.overlay_color {
                Some(color) => overlay::apply(image, color),
                None => image,
            };
            self.next_id += 1;
            Backdrop {
                id: self.next_id,
                image,
                alpha: job.config.alpha,
            }
        });
        deliver(listener, backdrop);
        self.state = BlurState::Ready;
        true
    }
}

fn deliver(listener: Option<&mut dyn BlurListener>, backdrop: Option<Backdrop>) {
    match listener {
        Some(listener) => listener.on_blur_finished(backdrop),
        None => panic!("{}", CarouselError::MissingCallback("blur finished")),
    }
}

fn capture(source: &mut dyn SnapshotSource) -> Option<RgbaImage> {
    source
        .capture_snapshot()
        .filter(|image| image.width() > 0 && image.height() > 0)
}

/// Shrinks both dimensions by `factor` (rounded, at least 1) with nearest-neighbour sampling.
pub(crate) fn downscale(image: &RgbaImage, factor: f32) -> RgbaImage {
    let scale = |d: u32| ((d as f32 / factor).round() as u32).max(1);
    let (width, height) = (scale(image.width()), scale(image.height()));
    if (width, height) == image.dimensions() {
        return image.clone();
    }
    image::imageops::resize(image, width, height, FilterType::Nearest)
}

pub(crate) fn blur(image: &RgbaImage, radius: u32, algorithm: BlurAlgorithm) -> RgbaImage {
    match algorithm {
        BlurAlgorithm::Software => software::blur(image, radius),
        BlurAlgorithm::Accelerated => accelerated::blur(image, radius).unwrap_or_else(|| {
            adebug!("accelerated blur unavailable; using software kernel");
            software::blur(image, radius)
        }),
    }
}
