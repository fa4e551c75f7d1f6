use alloc::collections::VecDeque;
use alloc::string::ToString;

use crate::{PADDING, PaddedItemStore, RequestId, Selection};

/// Default row height, in the host's layout units.
pub const DEFAULT_ROW_HEIGHT: u32 = 40;

/// Delay between a visual settle and the selection notification, so the host has rendered the
/// new row geometry before the caller reads it.
pub const SELECTION_DELAY_MS: u64 = 200;

/// What the host should do after a tracker event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleOutcome {
    /// Row emphasis changed; re-run the styling pass.
    pub restyle: bool,
    /// Scroll so this padded index sits at the viewport center.
    pub scroll_to: Option<usize>,
}

impl SettleOutcome {
    pub fn is_noop(&self) -> bool {
        !self.restyle && self.scroll_to.is_none()
    }

    fn merge(self, other: Self) -> Self {
        Self {
            restyle: self.restyle || other.restyle,
            scroll_to: other.scroll_to.or(self.scroll_to),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingSelection {
    due_ms: u64,
    raw_position: usize,
}

/// Turns low-level scroll telemetry into a stable "currently centered" row and debounced,
/// delayed selection notifications.
///
/// The tracker holds no clock and no UI objects. Adapters drive it with:
/// - `set_viewport` / `on_layout_complete` when layout is known
/// - `on_scroll` per scroll frame and `on_scroll_settled` when motion stops
/// - `on_item_tapped` for direct taps
/// - `tick(now_ms)` each frame to collect due notifications
#[derive(Clone, Debug)]
pub struct CenterTracker {
    request_id: RequestId,
    row_height: u32,
    viewport_main: u32,

    first_item: usize,
    scroll_top: i32,
    last_notified: Option<usize>,

    layout_ready: bool,
    initial_centering_done: bool,
    pending: VecDeque<PendingSelection>,
}

impl Default for CenterTracker {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CenterTracker {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            row_height: DEFAULT_ROW_HEIGHT,
            viewport_main: 0,
            first_item: 0,
            scroll_top: 0,
            last_notified: None,
            layout_ready: false,
            initial_centering_done: false,
            pending: VecDeque::new(),
        }
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height.max(1);
        self
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn set_request_id(&mut self, request_id: RequestId) {
        self.request_id = request_id;
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    pub fn set_row_height(&mut self, row_height: u32) {
        self.row_height = row_height.max(1);
    }

    pub fn viewport_main(&self) -> u32 {
        self.viewport_main
    }

    pub fn set_viewport(&mut self, viewport_main: u32) {
        self.viewport_main = viewport_main;
    }

    pub fn first_item(&self) -> usize {
        self.first_item
    }

    pub fn scroll_top(&self) -> i32 {
        self.scroll_top
    }

    pub fn is_layout_ready(&self) -> bool {
        self.layout_ready
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Forgets everything tied to the previous item set.
    pub fn reset(&mut self) {
        self.first_item = 0;
        self.scroll_top = 0;
        self.last_notified = None;
        self.initial_centering_done = false;
        self.pending.clear();
        ctrace!("CenterTracker::reset");
    }

    /// Drops pending notifications without touching the rest of the state.
    pub fn cancel_pending(&mut self) {
        self.pending.clear();
    }

    /// One-shot layout hook.
    ///
    /// The first call per item set centers the middle raw item without producing a selection:
    /// that centering is a layout side effect, not a user choice. Later calls are no-ops.
    pub fn on_layout_complete(&mut self, store: &mut PaddedItemStore) -> SettleOutcome {
        self.layout_ready = true;
        if self.initial_centering_done {
            return SettleOutcome::default();
        }
        self.initial_centering_done = true;
        let middle = PaddedItemStore::to_padded(store.raw_len() / 2);
        cdebug!(middle, "CenterTracker: initial centering");
        SettleOutcome {
            restyle: false,
            scroll_to: Some(middle),
        }
    }

    /// Records the current scroll frame.
    ///
    /// Once layout is ready, the emphasis follows the row under the viewport center while the
    /// user drags.
    pub fn on_scroll(
        &mut self,
        store: &mut PaddedItemStore,
        first_visible_index: usize,
        top_offset_of_first_visible: i32,
    ) -> SettleOutcome {
        self.first_item = first_visible_index;
        self.scroll_top = top_offset_of_first_visible;
        if !self.layout_ready {
            return SettleOutcome::default();
        }
        SettleOutcome {
            restyle: self.recenter_on_hit(store),
            scroll_to: None,
        }
    }

    /// Scroll motion stopped: snap to a row boundary and schedule the selection notification.
    pub fn on_scroll_settled(&mut self, store: &mut PaddedItemStore, now_ms: u64) -> SettleOutcome {
        let outcome = SettleOutcome {
            restyle: self.recenter_on_hit(store),
            scroll_to: None,
        };

        let raw_len = store.raw_len();
        if raw_len == 0 {
            return outcome;
        }

        // An inertial fling can settle more than a row past the first visible item.
        let overshoot = (self.scroll_top as i64) < -(self.row_height as i64);
        let snap = if overshoot {
            self.first_item.saturating_add(1)
        } else {
            self.first_item
        };
        let snap = snap.min(raw_len - 1);
        ctrace!(
            first_item = self.first_item,
            scroll_top = self.scroll_top,
            overshoot,
            snap,
            "CenterTracker::on_scroll_settled"
        );

        outcome.merge(self.select(store, snap, now_ms))
    }

    /// A row was tapped. Non-selectable rows (sentinels, or everything while taps are disabled)
    /// are ignored.
    pub fn on_item_tapped(
        &mut self,
        store: &mut PaddedItemStore,
        padded_position: usize,
        now_ms: u64,
    ) -> SettleOutcome {
        if !store.is_selectable(padded_position) {
            ctrace!(padded_position, "CenterTracker: tap on non-selectable row");
            return SettleOutcome::default();
        }
        let raw = padded_position - PADDING;
        self.select(store, raw, now_ms)
    }

    /// Returns the next due selection, if any. Call repeatedly until `None`.
    pub fn tick(&mut self, store: &PaddedItemStore, now_ms: u64) -> Option<Selection> {
        loop {
            let next = *self.pending.front()?;
            if now_ms < next.due_ms {
                return None;
            }
            self.pending.pop_front();
            // The item set may have shrunk since the notification was scheduled.
            let Some(value) = store.raw_value(next.raw_position) else {
                cwarn!(
                    raw_position = next.raw_position,
                    "CenterTracker: dropping stale selection"
                );
                continue;
            };
            return Some(Selection {
                request_id: self.request_id,
                raw_position: next.raw_position,
                value: value.to_string(),
            });
        }
    }

    /// Padded index of the row under the viewport's geometric center.
    ///
    /// Returns `None` when there is no viewport yet or the center falls past the last row.
    pub fn hit_test(&self, store: &PaddedItemStore) -> Option<usize> {
        if self.viewport_main == 0 {
            return None;
        }
        let row = self.row_height as i64;
        let viewport_start = self.first_item as i64 * row - self.scroll_top as i64;
        let center = viewport_start + self.viewport_main as i64 / 2;
        if center < 0 {
            return None;
        }
        let index = (center / row) as usize;
        (index < store.len()).then_some(index)
    }

    fn recenter_on_hit(&mut self, store: &mut PaddedItemStore) -> bool {
        let Some(hit) = self.hit_test(store) else {
            return false;
        };
        if self.last_notified == Some(hit) {
            return false;
        }
        self.last_notified = Some(hit);
        store.set_center(hit)
    }

    fn select(&mut self, store: &mut PaddedItemStore, raw: usize, now_ms: u64) -> SettleOutcome {
        let padded = PaddedItemStore::to_padded(raw);
        let restyle = store.set_center(padded);
        self.pending.push_back(PendingSelection {
            due_ms: now_ms.saturating_add(SELECTION_DELAY_MS),
            raw_position: raw,
        });
        SettleOutcome {
            restyle,
            scroll_to: Some(padded),
        }
    }
}
