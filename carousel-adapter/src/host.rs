use carousel::{Color, PopupLocation, RowStyle};
use image::RgbaImage;

use crate::{Backdrop, CarouselController};

/// Something that can rasterize the surface behind the panel.
///
/// Called on the UI loop, once per show gesture. Return `None` when there is nothing to capture;
/// a zero-sized image is treated the same way.
pub trait SnapshotSource {
    fn capture_snapshot(&mut self) -> Option<RgbaImage>;
}

impl<F: FnMut() -> Option<RgbaImage>> SnapshotSource for F {
    fn capture_snapshot(&mut self) -> Option<RgbaImage> {
        self()
    }
}

/// Panel transitions the host plays and reports back on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    Show,
    Hide,
}

/// A render/scroll/transition request for the UI toolkit.
///
/// Drained from [`CarouselController::drain_commands`] in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Jump so this padded row sits at the viewport center.
    ///
    /// Must be applied as a programmatic jump that does not report `on_scroll_settled` back.
    /// The controller already scheduled whatever selection the move implies; a reported settle
    /// would add a second notification, or a spurious one for the initial centering.
    ScrollTo { padded_index: usize },
    SetRowStyle {
        position: usize,
        text: String,
        style: RowStyle,
        color: Color,
    },
    SetPanelVisible(bool),
    SetPanelColors { background: Color, lines: Color },
    /// Report start and end through `on_transition_started` / `on_transition_finished`.
    PlayTransition {
        transition: Transition,
        location: PopupLocation,
    },
    /// Pixels are borrowed from [`CarouselController::backdrop`] while its id matches.
    ShowBackdrop { id: u64 },
    ClearBackdrop { id: u64 },
}

/// The capability set a UI toolkit binding implements.
pub trait Host: SnapshotSource {
    /// Applies [`Command::ScrollTo`]. Implementations jump without animating and must not feed
    /// the resulting position back through `on_scroll_settled`.
    fn scroll_to(&mut self, padded_index: usize);
    fn set_row_style(&mut self, position: usize, text: &str, style: RowStyle, color: Color);
    fn set_panel_visible(&mut self, visible: bool);
    fn set_panel_colors(&mut self, background: Color, lines: Color);
    fn play_transition(&mut self, transition: Transition, location: PopupLocation);
    fn show_backdrop(&mut self, backdrop: &Backdrop);
    fn clear_backdrop(&mut self);
}

/// Drains the controller's outbox into `host`.
///
/// A `ShowBackdrop` whose image was already released by a later hide is skipped.
pub fn dispatch<H: Host + ?Sized>(controller: &mut CarouselController, host: &mut H) {
    for command in controller.drain_commands() {
        match command {
            Command::ScrollTo { padded_index } => host.scroll_to(padded_index),
            Command::SetRowStyle {
                position,
                text,
                style,
                color,
            } => host.set_row_style(position, &text, style, color),
            Command::SetPanelVisible(visible) => host.set_panel_visible(visible),
            Command::SetPanelColors { background, lines } => {
                host.set_panel_colors(background, lines)
            }
            Command::PlayTransition {
                transition,
                location,
            } => host.play_transition(transition, location),
            Command::ShowBackdrop { id } => match controller.backdrop() {
                Some(backdrop) if backdrop.id() == id => host.show_backdrop(backdrop),
                _ => {
                    atrace!(id, "dispatch: backdrop already released");
                }
            },
            Command::ClearBackdrop { .. } => host.clear_backdrop(),
        }
    }
}
