// Example: padded store, styling pass and a settled scroll producing a delayed selection.
use carousel::{CenterTracker, PaddedItemStore, SELECTION_DELAY_MS};

fn main() {
    let mut store = PaddedItemStore::build(["Mon", "Tue", "Wed", "Thu", "Fri"], None);
    let mut tracker = CenterTracker::new(42);
    tracker.set_viewport(200);

    let first = tracker.on_layout_complete(&mut store);
    println!("initial centering: {first:?}");

    store.for_each_row_style(|position, text, tier| {
        let style = tier.style();
        println!(
            "row {position:>2} {text:<4} {tier:?} rot={} opacity={}",
            style.rotation_x, style.opacity
        );
    });

    // The user dragged one row down and let go.
    tracker.on_scroll(&mut store, 3, 0);
    let settled = tracker.on_scroll_settled(&mut store, 1_000);
    println!("settled: {settled:?} center_raw={:?}", store.center_raw());

    let mut now_ms = 1_000;
    while now_ms <= 1_000 + SELECTION_DELAY_MS {
        if let Some(selection) = tracker.tick(&store, now_ms) {
            println!("t={now_ms} selected {selection:?}");
        }
        now_ms += 16;
    }
}
