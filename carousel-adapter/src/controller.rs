use carousel::{
    CarouselError, CenterTracker, Color, PaddedItemStore, PickerSettings, PickerState,
    PopupLocation, Selection, SettleOutcome,
};

use crate::{
    Backdrop, BlurListener, BlurPipeline, BlurState, Command, SnapshotSource, StartOutcome,
    Transition,
};

/// Receives `(request_id, raw_position, value)` once a selection has settled.
pub type SelectionListener = Box<dyn FnMut(Selection)>;

/// Non-toggling show/hide gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slide {
    /// Shows the panel if it is hidden.
    Up,
    /// Hides the panel if it is shown.
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PanelPhase {
    Hidden,
    AwaitingBackdrop,
    Showing,
    Shown,
    Hiding,
}

/// Panel-side state: visibility, the owned backdrop, and the command outbox.
#[derive(Debug)]
struct Panel {
    phase: PanelPhase,
    show_position: usize,
    backdrop: Option<Backdrop>,
    outbox: Vec<Command>,
    background: Color,
    lines: Color,
    location: PopupLocation,
}

impl Panel {
    fn new(settings: &PickerSettings) -> Self {
        Self {
            phase: PanelPhase::Hidden,
            show_position: 0,
            backdrop: None,
            outbox: Vec::new(),
            background: settings.background_color(),
            lines: settings.lines_color(),
            location: settings.popup_location(),
        }
    }

    fn release_backdrop(&mut self) {
        if let Some(backdrop) = self.backdrop.take() {
            self.outbox.push(Command::ClearBackdrop { id: backdrop.id() });
            backdrop.release();
        }
    }
}

impl BlurListener for Panel {
    fn on_blur_finished(&mut self, backdrop: Option<Backdrop>) {
        if self.phase != PanelPhase::AwaitingBackdrop {
            adebug!(phase = ?self.phase, "Panel: backdrop arrived after the show was abandoned");
            if let Some(backdrop) = backdrop {
                backdrop.release();
            }
            return;
        }

        self.release_backdrop();
        if let Some(backdrop) = &backdrop {
            self.outbox.push(Command::ShowBackdrop { id: backdrop.id() });
        }
        self.backdrop = backdrop;
        self.outbox.push(Command::SetPanelColors {
            background: self.background,
            lines: self.lines,
        });
        self.outbox.push(Command::SetPanelVisible(true));
        self.outbox.push(Command::PlayTransition {
            transition: Transition::Show,
            location: self.location,
        });
        self.phase = PanelPhase::Showing;
    }
}

/// The picker root: item store, center tracker and blur pipeline behind one event surface.
///
/// The controller holds no UI objects and no clock. Adapters feed it lifecycle, scroll and
/// transition events, call `tick(now_ms)` every frame, and apply the queued [`Command`]s
/// (directly from [`Self::drain_commands`] or through [`crate::dispatch`]).
pub struct CarouselController {
    settings: PickerSettings,
    store: PaddedItemStore,
    tracker: CenterTracker,
    pipeline: BlurPipeline,
    panel: Panel,
    on_item_selected: Option<SelectionListener>,
    pending_restore: Option<usize>,
}

impl core::fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselController")
            .field("settings", &self.settings)
            .field("store", &self.store)
            .field("tracker", &self.tracker)
            .field("pipeline", &self.pipeline)
            .field("panel", &self.panel)
            .field("pending_restore", &self.pending_restore)
            .finish_non_exhaustive()
    }
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new(PickerSettings::default())
    }
}

impl CarouselController {
    pub fn new(settings: PickerSettings) -> Self {
        let mut controller = Self {
            store: PaddedItemStore::build(core::iter::empty::<String>(), None),
            tracker: CenterTracker::new(settings.request_id()),
            pipeline: BlurPipeline::new(),
            panel: Panel::new(&settings),
            settings: settings.clone(),
            on_item_selected: None,
            pending_restore: None,
        };
        controller.apply_settings(settings);
        controller
    }

    pub fn set_on_item_selected(&mut self, listener: impl FnMut(Selection) + 'static) {
        self.on_item_selected = Some(Box::new(listener));
    }

    pub fn clear_on_item_selected(&mut self) {
        self.on_item_selected = None;
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn store(&self) -> &PaddedItemStore {
        &self.store
    }

    pub fn tracker(&self) -> &CenterTracker {
        &self.tracker
    }

    pub fn blur_state(&self) -> BlurState {
        self.pipeline.state()
    }

    /// `true` from the moment the show transition is queued until the hide transition finishes.
    pub fn is_panel_shown(&self) -> bool {
        matches!(
            self.panel.phase,
            PanelPhase::Showing | PanelPhase::Shown | PanelPhase::Hiding
        )
    }

    /// The backdrop currently displayed behind the panel.
    pub fn backdrop(&self) -> Option<&Backdrop> {
        self.panel.backdrop.as_ref()
    }

    /// Takes all queued commands, oldest first.
    pub fn drain_commands(&mut self) -> Vec<Command> {
        core::mem::take(&mut self.panel.outbox)
    }

    /// Replaces the whole configuration in one step.
    ///
    /// The item store is rebuilt around the middle item, pending notifications are dropped and
    /// every row is restyled. Applying the same settings twice leaves the same state.
    pub fn apply_settings(&mut self, settings: PickerSettings) {
        let raw_len = settings.items().len();
        adebug!(
            request_id = settings.request_id(),
            raw_len,
            use_blur = settings.blur().use_blur,
            "CarouselController::apply_settings"
        );

        self.store = PaddedItemStore::build(settings.items().iter().cloned(), Some(raw_len / 2))
            .with_clickable(settings.items_clickable());
        self.tracker.reset();
        self.tracker.set_request_id(settings.request_id());

        self.panel.background = settings.background_color();
        self.panel.lines = settings.lines_color();
        self.panel.location = settings.popup_location();
        self.settings = settings;

        self.panel.outbox.push(Command::SetPanelColors {
            background: self.panel.background,
            lines: self.panel.lines,
        });
        self.emit_row_styles();

        if self.tracker.is_layout_ready() {
            let outcome = self.tracker.on_layout_complete(&mut self.store);
            self.apply_outcome(outcome);
        }
    }

    /// Shows the panel centered on the middle item, or hides it if it is already shown.
    pub fn show(&mut self, source: &mut dyn SnapshotSource) {
        let position = self.store.raw_len() / 2;
        self.show_at(source, position);
    }

    /// Shows the panel centered on `raw_position`, or hides it if it is already shown.
    pub fn show_at(&mut self, source: &mut dyn SnapshotSource, raw_position: usize) {
        match self.panel.phase {
            PanelPhase::Hidden => self.begin_show(source, raw_position),
            PanelPhase::Showing | PanelPhase::Shown => self.hide(),
            PanelPhase::AwaitingBackdrop | PanelPhase::Hiding => {
                atrace!(phase = ?self.panel.phase, "show ignored mid-transition");
            }
        }
    }

    pub fn slide(&mut self, source: &mut dyn SnapshotSource, direction: Slide) {
        match (direction, self.panel.phase) {
            (Slide::Up, PanelPhase::Hidden) => self.show(source),
            (Slide::Down, PanelPhase::Showing | PanelPhase::Shown) => self.hide(),
            _ => {}
        }
    }

    /// Plays the hide transition. The backdrop is released once it finishes.
    ///
    /// A hide while the backdrop is still being computed is ignored.
    pub fn hide(&mut self) {
        match self.panel.phase {
            PanelPhase::Showing | PanelPhase::Shown => {
                self.panel.outbox.push(Command::PlayTransition {
                    transition: Transition::Hide,
                    location: self.panel.location,
                });
                self.panel.phase = PanelPhase::Hiding;
            }
            PanelPhase::AwaitingBackdrop => {
                adebug!("hide ignored while the backdrop is pending");
            }
            PanelPhase::Hidden | PanelPhase::Hiding => {}
        }
    }

    pub fn on_transition_started(&mut self, transition: Transition) {
        if transition != Transition::Show || self.panel.phase != PanelPhase::Showing {
            return;
        }
        let padded = PaddedItemStore::to_padded(self.panel.show_position);
        self.store.set_center(padded);
        self.emit_row_styles();
        self.panel.outbox.push(Command::ScrollTo {
            padded_index: self.store.center(),
        });
    }

    pub fn on_transition_finished(&mut self, transition: Transition) {
        match (transition, self.panel.phase) {
            (Transition::Show, PanelPhase::Showing) => self.panel.phase = PanelPhase::Shown,
            (Transition::Hide, PanelPhase::Hiding) => {
                self.panel.outbox.push(Command::SetPanelVisible(false));
                self.panel.release_backdrop();
                self.panel.phase = PanelPhase::Hidden;
            }
            _ => {
                atrace!(?transition, phase = ?self.panel.phase, "stale transition report");
            }
        }
    }

    /// Advances the controller: delivers a finished backdrop and relays due selections.
    ///
    /// # Panics
    ///
    /// Panics if a selection is due and no listener was set with
    /// [`Self::set_on_item_selected`].
    pub fn tick(&mut self, now_ms: u64) {
        self.pipeline.poll(Some(&mut self.panel));

        while let Some(selection) = self.tracker.tick(&self.store, now_ms) {
            adebug!(
                request_id = selection.request_id,
                raw_position = selection.raw_position,
                "item selected"
            );
            if self.settings.auto_dismiss() {
                self.hide();
            }
            match self.on_item_selected.as_mut() {
                Some(listener) => listener(selection),
                None => panic!("{}", CarouselError::MissingCallback("item selected")),
            }
        }
    }

    /// Blocks up to `timeout` for an in-flight backdrop and delivers it.
    pub fn wait_for_backdrop(&mut self, timeout: std::time::Duration) -> bool {
        self.pipeline.wait(Some(&mut self.panel), timeout)
    }

    pub fn set_viewport(&mut self, viewport_main: u32) {
        self.tracker.set_viewport(viewport_main);
    }

    pub fn set_row_height(&mut self, row_height: u32) {
        self.tracker.set_row_height(row_height);
    }

    pub fn on_scroll(&mut self, first_visible_index: usize, top_offset_of_first_visible: i32) {
        let outcome = self.tracker.on_scroll(
            &mut self.store,
            first_visible_index,
            top_offset_of_first_visible,
        );
        self.apply_outcome(outcome);
    }

    pub fn on_scroll_settled(&mut self, now_ms: u64) {
        let outcome = self.tracker.on_scroll_settled(&mut self.store, now_ms);
        self.apply_outcome(outcome);
    }

    pub fn on_item_tapped(&mut self, padded_position: usize, now_ms: u64) {
        let outcome = self
            .tracker
            .on_item_tapped(&mut self.store, padded_position, now_ms);
        self.apply_outcome(outcome);
    }

    /// Layout-complete hook. The first call per item set styles every row and centers the
    /// middle item; a restored shown panel is re-shown here.
    pub fn on_layout_complete(&mut self, source: &mut dyn SnapshotSource) {
        let outcome = self.tracker.on_layout_complete(&mut self.store);
        if outcome.scroll_to.is_some() {
            self.emit_row_styles();
        }
        self.apply_outcome(outcome);

        if let Some(position) = self.pending_restore.take() {
            adebug!(position, "re-showing restored panel");
            self.show_at(source, position);
        }
    }

    pub fn on_attached(&mut self) {
        self.pipeline.attach();
    }

    /// The host view is going away: stop delivering results and drop everything pending.
    ///
    /// Queued show commands are withdrawn; if the panel was up, the outbox ends with the
    /// commands that take it down, so host and controller agree once reattached.
    pub fn on_detached(&mut self) {
        self.pipeline.detach();
        self.tracker.cancel_pending();

        self.panel.outbox.retain(|command| {
            !matches!(
                command,
                Command::SetPanelVisible(_)
                    | Command::PlayTransition { .. }
                    | Command::ShowBackdrop { .. }
            )
        });
        let was_hidden = self.panel.phase == PanelPhase::Hidden;
        self.panel.release_backdrop();
        if !was_hidden {
            self.panel.outbox.push(Command::SetPanelVisible(false));
        }
        self.panel.phase = PanelPhase::Hidden;
    }

    /// Captures what is needed to rebuild this picker later.
    pub fn save_state(&self) -> PickerState {
        PickerState::new(
            self.settings.clone(),
            self.is_panel_shown(),
            self.store.center_raw().unwrap_or(0),
        )
    }

    /// Applies a saved state. A shown panel is re-shown at the saved position on the next
    /// [`Self::on_layout_complete`].
    pub fn restore_state(&mut self, state: PickerState) -> Result<(), CarouselError> {
        state.validate()?;
        let PickerState {
            settings,
            is_panel_shown,
            centered_raw_position,
            ..
        } = state;
        self.apply_settings(settings);
        self.pending_restore = is_panel_shown.then_some(centered_raw_position);
        Ok(())
    }

    fn begin_show(&mut self, source: &mut dyn SnapshotSource, raw_position: usize) {
        let last = self.store.raw_len().saturating_sub(1);
        self.panel.show_position = raw_position.min(last);
        self.panel.phase = PanelPhase::AwaitingBackdrop;

        let outcome = self
            .pipeline
            .start(source, self.settings.blur(), Some(&mut self.panel));
        if outcome == StartOutcome::Rejected {
            adebug!("show rejected by the blur pipeline");
            self.panel.phase = PanelPhase::Hidden;
        }
    }

    fn apply_outcome(&mut self, outcome: SettleOutcome) {
        if outcome.restyle {
            self.emit_row_styles();
        }
        if let Some(padded_index) = outcome.scroll_to {
            self.panel.outbox.push(Command::ScrollTo { padded_index });
        }
    }

    fn emit_row_styles(&mut self) {
        let center_color = self.settings.text_color_center();
        let other_color = self.settings.text_color_no_center();
        let outbox = &mut self.panel.outbox;
        self.store.for_each_row_style(|position, text, tier| {
            let color = if tier.is_center() {
                center_color
            } else {
                other_color
            };
            outbox.push(Command::SetRowStyle {
                position,
                text: text.to_string(),
                style: tier.style(),
                color,
            });
        });
    }
}
