use alloc::string::String;
use alloc::vec::Vec;

use crate::{EmphasisTier, style_for};

/// Number of empty sentinel rows on each end of the padded list.
pub const PADDING: usize = 2;

/// The padded item list plus the row currently receiving center emphasis.
///
/// Raw index `r` lives at padded index `r + PADDING`. The sentinel rows keep the first and last
/// real items reachable at the viewport center; they are never selectable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedItemStore {
    items: Vec<String>,
    center: usize,
    clickable: bool,
}

impl PaddedItemStore {
    /// Builds the padded list from `raw` items.
    ///
    /// `initial_raw_position = None` centers the first raw item (padded index `PADDING`);
    /// `Some(p)` centers `p + PADDING`, clamped into the list.
    pub fn build<I, S>(raw: I, initial_raw_position: Option<usize>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw = raw.into_iter();
        let mut items = Vec::with_capacity(raw.size_hint().0 + 2 * PADDING);
        items.extend(core::iter::repeat_with(String::new).take(PADDING));
        items.extend(raw.map(Into::into));
        items.extend(core::iter::repeat_with(String::new).take(PADDING));

        let mut store = Self {
            items,
            center: PADDING,
            clickable: true,
        };
        let center = initial_raw_position
            .map(|p| p.saturating_add(PADDING))
            .unwrap_or(PADDING);
        store.set_center(center);
        cdebug!(
            raw_len = store.raw_len(),
            center = store.center,
            "PaddedItemStore::build"
        );
        store
    }

    pub fn with_clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: even an empty raw list keeps its four sentinel rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn raw_len(&self) -> usize {
        self.items.len() - 2 * PADDING
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Text of a padded row.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.items.get(position).map(String::as_str)
    }

    /// Text of a raw item.
    pub fn raw_value(&self, raw_position: usize) -> Option<&str> {
        if raw_position >= self.raw_len() {
            return None;
        }
        self.get(raw_position + PADDING)
    }

    pub fn center(&self) -> usize {
        self.center
    }

    /// Moves the center emphasis, clamped to `[0, len - 1]`.
    ///
    /// Returns `true` when the center actually changed.
    pub fn set_center(&mut self, position: usize) -> bool {
        let next = position.min(self.items.len() - 1);
        if next != position {
            cwarn!(position, len = self.items.len(), "center out of range; clamped");
        }
        if next == self.center {
            return false;
        }
        ctrace!(from = self.center, to = next, "PaddedItemStore::set_center");
        self.center = next;
        true
    }

    /// The center as a raw index, or `None` while a sentinel row is centered.
    pub fn center_raw(&self) -> Option<usize> {
        Self::to_raw(self.center).filter(|&r| r < self.raw_len())
    }

    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    pub fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }

    pub fn is_sentinel(&self, position: usize) -> bool {
        let len = self.items.len();
        position < PADDING || position >= len - PADDING
    }

    /// Whether a tap on `position` may select it.
    pub fn is_selectable(&self, position: usize) -> bool {
        self.clickable && position < self.items.len() && !self.is_sentinel(position)
    }

    pub fn tier(&self, position: usize) -> EmphasisTier {
        style_for(position, self.center)
    }

    /// Visits every padded row in ascending order with its text and tier.
    pub fn for_each_row_style(&self, mut f: impl FnMut(usize, &str, EmphasisTier)) {
        for (position, text) in self.items.iter().enumerate() {
            f(position, text, style_for(position, self.center));
        }
    }

    pub fn to_padded(raw_position: usize) -> usize {
        raw_position + PADDING
    }

    pub fn to_raw(padded_position: usize) -> Option<usize> {
        padded_position.checked_sub(PADDING)
    }
}
