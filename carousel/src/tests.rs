use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    fn gen_range_i32(&mut self, start: i32, end_exclusive: i32) -> i32 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as i32
    }
}

fn items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item {i}")).collect()
}

/// Tracker laid out for five visible rows of `DEFAULT_ROW_HEIGHT`.
fn five_row_tracker() -> CenterTracker {
    let mut t = CenterTracker::new(7);
    t.set_viewport(DEFAULT_ROW_HEIGHT * 5);
    t
}

#[test]
fn padded_list_has_two_sentinels_on_each_end() {
    for n in [0usize, 1, 2, 5, 31] {
        let s = PaddedItemStore::build(items(n), None);
        assert_eq!(s.len(), n + 4);
        assert_eq!(s.raw_len(), n);
        let rows = s.items();
        assert_eq!(rows[0], "");
        assert_eq!(rows[1], "");
        assert_eq!(rows[n + 2], "");
        assert_eq!(rows[n + 3], "");
        for (i, v) in items(n).iter().enumerate() {
            assert_eq!(s.get(i + PADDING), Some(v.as_str()));
            assert_eq!(s.raw_value(i), Some(v.as_str()));
        }
    }
}

#[test]
fn unset_initial_position_centers_first_item() {
    let s = PaddedItemStore::build(["A", "B", "C", "D"], None);
    assert_eq!(s.items(), ["", "", "A", "B", "C", "D", "", ""]);
    assert_eq!(s.center(), 2);
    assert_eq!(s.get(s.center()), Some("A"));
    assert_eq!(s.center_raw(), Some(0));
}

#[test]
fn initial_position_is_offset_by_padding() {
    let s = PaddedItemStore::build(["A", "B", "C", "D"], Some(4 / 2));
    assert_eq!(s.center(), 4);
    assert_eq!(s.get(s.center()), Some("C"));

    // Out of range requests are clamped into the padded list.
    let s = PaddedItemStore::build(["A"], Some(100));
    assert_eq!(s.center(), s.len() - 1);
}

#[test]
fn sentinels_are_never_selectable() {
    let s = PaddedItemStore::build(items(3), None);
    let len = s.len();
    for p in [0, 1, len - 2, len - 1] {
        assert!(s.is_sentinel(p));
        assert!(!s.is_selectable(p));
    }
    for p in 2..len - 2 {
        assert!(s.is_selectable(p));
    }
    assert!(!s.is_selectable(len));

    let s = s.with_clickable(false);
    assert!((0..len).all(|p| !s.is_selectable(p)));
}

#[test]
fn style_tiers_by_distance() {
    let c = 10;
    assert_eq!(style_for(10, c), EmphasisTier::Center);
    assert_eq!(style_for(9, c), EmphasisTier::NearAbove);
    assert_eq!(style_for(11, c), EmphasisTier::NearBelow);
    assert_eq!(style_for(8, c), EmphasisTier::FarAbove);
    assert_eq!(style_for(12, c), EmphasisTier::FarBelow);
    assert_eq!(style_for(7, c), EmphasisTier::Distant(Tilt::Below));
    assert_eq!(style_for(0, c), EmphasisTier::Distant(Tilt::Below));
    assert_eq!(style_for(13, c), EmphasisTier::Distant(Tilt::Above));
    assert_eq!(style_for(500, c), EmphasisTier::Distant(Tilt::Above));

    assert_eq!(EmphasisTier::NearBelow.style().opacity, 1.0);
    assert_eq!(EmphasisTier::FarAbove.style().opacity, 0.7);
    assert_eq!(EmphasisTier::Center.style().rotation_x, 0);
    assert_eq!(EmphasisTier::Center.style().appearance, TextAppearance::Center);
}

#[test]
fn distant_tilt_is_fixed_regardless_of_distance() {
    let c = 50;
    let near = style_for(c - 3, c).style();
    let far = style_for(0, c).style();
    assert_eq!(near, far);
    let near = style_for(c + 3, c).style();
    let far = style_for(c + 40, c).style();
    assert_eq!(near, far);
}

#[test]
fn style_is_symmetric_around_center() {
    let c = 20usize;
    for d in 0..15usize {
        let above = style_for(c - d, c);
        let below = style_for(c + d, c);
        assert_eq!(above.mirrored(), below, "d={d}");
        let (a, b) = (above.style(), below.style());
        assert_eq!(a.rotation_x, -b.rotation_x, "d={d}");
        assert_eq!(a.opacity, b.opacity, "d={d}");
        assert_eq!(a.appearance, b.appearance, "d={d}");
    }
}

#[test]
fn for_each_row_style_visits_every_row_in_order() {
    let s = PaddedItemStore::build(["A", "B", "C"], Some(1));
    let mut seen = Vec::new();
    s.for_each_row_style(|p, text, tier| seen.push((p, String::from(text), tier)));
    assert_eq!(seen.len(), s.len());
    assert!(seen.iter().enumerate().all(|(i, (p, _, _))| i == *p));
    assert_eq!(seen[3], (3, String::from("B"), EmphasisTier::Center));
    assert_eq!(seen[0].2, EmphasisTier::Distant(Tilt::Below));
}

#[test]
fn hit_test_uses_viewport_center() {
    let s = PaddedItemStore::build(items(10), None);
    let mut t = five_row_tracker();
    let mut s2 = s.clone();

    // No viewport yet.
    assert_eq!(CenterTracker::new(0).hit_test(&s), None);

    t.on_scroll(&mut s2, 0, 0);
    assert_eq!(t.hit_test(&s), Some(2));

    t.on_scroll(&mut s2, 3, -10);
    assert_eq!(t.hit_test(&s), Some(5));

    t.on_scroll(&mut s2, 3, -25);
    assert_eq!(t.hit_test(&s), Some(6));
}

#[test]
fn scroll_before_layout_does_not_restyle() {
    let mut s = PaddedItemStore::build(items(10), None);
    let mut t = five_row_tracker();
    let out = t.on_scroll(&mut s, 4, 0);
    assert!(out.is_noop());
    assert_eq!(s.center(), 2);
    assert_eq!(t.first_item(), 4);
}

#[test]
fn live_scroll_debounces_identical_hits() {
    let mut s = PaddedItemStore::build(items(10), None);
    let mut t = five_row_tracker();
    t.on_layout_complete(&mut s);

    let out = t.on_scroll(&mut s, 3, 0);
    assert!(out.restyle);
    assert_eq!(s.center(), 5);

    // Same row under the center: nothing to do.
    let out = t.on_scroll(&mut s, 3, -5);
    assert!(!out.restyle);

    let out = t.on_scroll(&mut s, 4, 0);
    assert!(out.restyle);
    assert_eq!(s.center(), 6);
}

#[test]
fn first_layout_centers_without_selection() {
    let mut s = PaddedItemStore::build(items(9), Some(4));
    let mut t = five_row_tracker();

    let out = t.on_layout_complete(&mut s);
    assert_eq!(out.scroll_to, Some(4 + PADDING));
    assert!(!t.has_pending());

    // One-shot per item set.
    assert!(t.on_layout_complete(&mut s).is_noop());

    t.reset();
    assert_eq!(t.on_layout_complete(&mut s).scroll_to, Some(4 + PADDING));
    assert_eq!(t.tick(&s, u64::MAX), None);
}

#[test]
fn settle_snaps_to_first_item_and_notifies_after_delay() {
    let mut s = PaddedItemStore::build(items(10), None);
    let mut t = five_row_tracker();
    t.on_layout_complete(&mut s);
    t.on_scroll(&mut s, 3, -12);

    let out = t.on_scroll_settled(&mut s, 1_000);
    assert_eq!(out.scroll_to, Some(3 + PADDING));
    assert_eq!(s.center(), 3 + PADDING);

    assert_eq!(t.tick(&s, 1_000), None);
    assert_eq!(t.tick(&s, 1_000 + SELECTION_DELAY_MS - 1), None);
    let sel = t.tick(&s, 1_000 + SELECTION_DELAY_MS).unwrap();
    assert_eq!(
        sel,
        Selection {
            request_id: 7,
            raw_position: 3,
            value: String::from("item 3"),
        }
    );
    assert_eq!(t.tick(&s, u64::MAX), None);
}

#[test]
fn settle_past_a_row_height_selects_next_row() {
    let mut s = PaddedItemStore::build(items(10), None);
    let mut t = five_row_tracker();
    t.on_layout_complete(&mut s);
    t.on_scroll(&mut s, 3, -(DEFAULT_ROW_HEIGHT as i32) - 1);

    let out = t.on_scroll_settled(&mut s, 0);
    assert_eq!(out.scroll_to, Some(4 + PADDING));
    assert_eq!(s.center(), 4 + PADDING);
    assert_eq!(t.tick(&s, SELECTION_DELAY_MS).unwrap().raw_position, 4);

    // Exactly one row height is not an overshoot.
    t.on_scroll(&mut s, 3, -(DEFAULT_ROW_HEIGHT as i32));
    t.on_scroll_settled(&mut s, 0);
    assert_eq!(t.tick(&s, SELECTION_DELAY_MS).unwrap().raw_position, 3);
}

#[test]
fn settle_snap_is_clamped_to_last_item() {
    let mut s = PaddedItemStore::build(items(3), None);
    let mut t = five_row_tracker();
    t.on_layout_complete(&mut s);
    t.on_scroll(&mut s, 2, -100);
    t.on_scroll_settled(&mut s, 0);
    assert_eq!(s.center(), 2 + PADDING);
    assert_eq!(t.tick(&s, SELECTION_DELAY_MS).unwrap().raw_position, 2);
}

#[test]
fn settle_on_empty_list_never_notifies() {
    let mut s = PaddedItemStore::build(Vec::<String>::new(), None);
    let mut t = five_row_tracker();
    t.on_layout_complete(&mut s);
    let out = t.on_scroll_settled(&mut s, 0);
    assert_eq!(out.scroll_to, None);
    assert!(!t.has_pending());
}

#[test]
fn tap_sets_center_and_notifies_once() {
    let mut s = PaddedItemStore::build(items(10), None);
    let mut t = five_row_tracker();
    t.on_layout_complete(&mut s);

    let k = 6;
    let out = t.on_item_tapped(&mut s, k, 500);
    assert_eq!(s.center(), k);
    assert_eq!(out.scroll_to, Some(k));
    assert!(out.restyle);

    assert_eq!(t.tick(&s, 500), None);
    let sel = t.tick(&s, 500 + SELECTION_DELAY_MS).unwrap();
    assert_eq!(sel.raw_position, k - 2);
    assert_eq!(sel.value, "item 4");
    assert_eq!(t.tick(&s, u64::MAX), None);
}

#[test]
fn taps_on_sentinels_or_disabled_rows_are_ignored() {
    let mut s = PaddedItemStore::build(items(4), None);
    let mut t = five_row_tracker();
    for p in [0, 1, 6, 7] {
        assert!(t.on_item_tapped(&mut s, p, 0).is_noop());
    }
    s.set_clickable(false);
    assert!(t.on_item_tapped(&mut s, 3, 0).is_noop());
    assert!(!t.has_pending());
    assert_eq!(s.center(), 2);
}

#[test]
fn stale_selection_is_dropped_when_items_shrink() {
    let mut s = PaddedItemStore::build(items(10), None);
    let mut t = five_row_tracker();
    t.on_item_tapped(&mut s, 9, 0);
    let smaller = PaddedItemStore::build(items(2), None);
    assert_eq!(t.tick(&smaller, SELECTION_DELAY_MS), None);
    assert!(!t.has_pending());
}

#[test]
fn center_stays_in_range_under_random_events() {
    let mut rng = Lcg::new(0x5eed);
    for n in [0usize, 1, 4, 17] {
        let mut s = PaddedItemStore::build(items(n), None);
        let mut t = five_row_tracker();
        t.on_layout_complete(&mut s);
        let mut now = 0u64;
        for _ in 0..500 {
            now += 16;
            match rng.gen_range_usize(0, 4) {
                0 => {
                    let first = rng.gen_range_usize(0, n + 8);
                    let top = rng.gen_range_i32(-3 * DEFAULT_ROW_HEIGHT as i32, 1);
                    t.on_scroll(&mut s, first, top);
                }
                1 => {
                    t.on_scroll_settled(&mut s, now);
                }
                2 => {
                    let p = rng.gen_range_usize(0, n + 8);
                    t.on_item_tapped(&mut s, p, now);
                }
                _ => {
                    while let Some(sel) = t.tick(&s, now) {
                        assert!(sel.raw_position < n);
                    }
                }
            }
            assert!(s.center() < s.len(), "n={n} center={}", s.center());
        }
    }
}

#[test]
fn blur_config_rejects_out_of_range_and_keeps_previous() {
    let mut cfg = BlurConfig::default();
    assert_eq!(cfg.radius(), DEFAULT_BLUR_RADIUS);
    assert_eq!(cfg.downscale(), DEFAULT_DOWNSCALE_FACTOR);

    assert_eq!(cfg.set_radius(0), Err(CarouselError::InvalidBlurRadius(0)));
    assert_eq!(cfg.set_radius(26), Err(CarouselError::InvalidBlurRadius(26)));
    assert_eq!(cfg.radius(), DEFAULT_BLUR_RADIUS);
    assert!(cfg.set_radius(MAX_BLUR_RADIUS).is_ok());
    assert_eq!(cfg.radius(), MAX_BLUR_RADIUS);

    assert!(cfg.set_downscale(0.5).unwrap_err().is_configuration());
    assert!(cfg.set_downscale(6.5).is_err());
    assert!(cfg.set_downscale(f32::NAN).is_err());
    assert_eq!(cfg.downscale(), DEFAULT_DOWNSCALE_FACTOR);
    assert!(cfg.set_downscale(MIN_DOWNSCALE).is_ok());
    assert_eq!(cfg.downscale(), 1.0);
}

#[test]
fn settings_builder_defaults_and_validation() {
    let s = PickerSettings::default();
    assert!(s.auto_dismiss());
    assert!(s.items_clickable());
    assert!(s.blur().use_blur);
    assert_eq!(s.blur().radius(), 15);
    assert_eq!(s.blur().downscale(), 5.0);
    assert_eq!(s.blur().algorithm, BlurAlgorithm::Software);
    assert_eq!(s.blur().overlay_color, None);
    assert_eq!(s.blur().alpha, DEFAULT_ALPHA);
    assert_eq!(s.popup_location(), PopupLocation::Unspecified);

    let err = PickerSettings::builder().with_blur_radius(40).unwrap_err();
    assert_eq!(err, CarouselError::InvalidBlurRadius(40));

    let s = PickerSettings::builder()
        .with_request_id(3)
        .with_items(["x", "y"])
        .with_auto_dismiss(false)
        .with_blur_radius(5)
        .unwrap()
        .build();
    assert_eq!(s.request_id(), 3);
    assert_eq!(s.items(), ["x", "y"]);
    let again = s.to_builder().build();
    assert_eq!(again, s);
}

#[test]
fn attributes_map_onto_settings() {
    let attrs = PickerAttributes::default();
    let s = attrs.to_settings().unwrap();
    assert_eq!(s, PickerSettings::default());

    let attrs = PickerAttributes {
        use_accelerated_blur: true,
        filter_color: Some(Color::from_rgb(255, 0, 0)),
        initial_entries: vec![String::from("one")],
        items_clickable: false,
        ..PickerAttributes::default()
    };
    let s = attrs.to_settings().unwrap();
    assert_eq!(s.blur().algorithm, BlurAlgorithm::Accelerated);
    assert_eq!(s.blur().overlay_color, Some(Color(0xFFFF_0000)));
    assert_eq!(s.items(), ["one"]);
    assert!(!s.items_clickable());

    let attrs = PickerAttributes {
        downscale_factor: 9.0,
        ..PickerAttributes::default()
    };
    assert_eq!(attrs.to_settings(), Err(CarouselError::InvalidDownscale(9.0)));
}

#[test]
fn state_rejects_newer_versions() {
    let mut state = PickerState::new(PickerSettings::default(), true, 1);
    assert!(state.validate().is_ok());
    state.version = STATE_VERSION + 1;
    assert!(matches!(
        state.validate(),
        Err(CarouselError::UnsupportedStateVersion { .. })
    ));
}

#[test]
fn color_channels() {
    let c = Color::from_argb(0x80, 0x10, 0x20, 0x30);
    assert_eq!(c.0, 0x8010_2030);
    assert_eq!(c.to_rgba(), [0x10, 0x20, 0x30, 0x80]);
}
