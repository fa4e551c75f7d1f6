use std::time::Duration;

use carousel_adapter::carousel::PickerSettings;
use carousel_adapter::{CarouselController, Command, Transition};
use image::{Rgba, RgbaImage};

fn main() {
    // Example: drive a picker without any UI toolkit.
    //
    // A real adapter would:
    // - forward lifecycle, scroll and transition events into the controller
    // - call tick(now_ms) every frame
    // - apply drained commands to its widgets (or implement `Host` and call `dispatch`)
    let settings = PickerSettings::builder()
        .with_request_id(1)
        .with_items(["Small", "Medium", "Large", "Family"])
        .with_blur_downscale(4.0)
        .and_then(|b| b.with_blur_radius(6))
        .map(|b| b.build())
        .unwrap_or_default();

    let mut c = CarouselController::new(settings);
    c.set_on_item_selected(|s| println!("selected {s:?}"));
    c.set_viewport(200);

    let mut snapshot = || {
        Some(RgbaImage::from_fn(320, 240, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        }))
    };
    c.on_layout_complete(&mut snapshot);
    c.show(&mut snapshot);
    c.wait_for_backdrop(Duration::from_secs(5));

    if let Some(b) = c.backdrop() {
        println!("backdrop #{} {:?} alpha={}", b.id(), b.dimensions(), b.alpha());
    }

    c.on_transition_started(Transition::Show);
    c.on_transition_finished(Transition::Show);
    c.on_item_tapped(4, 0);

    let mut now_ms = 0u64;
    while now_ms <= 400 {
        c.tick(now_ms);
        now_ms += 16;
    }

    for command in c.drain_commands() {
        match command {
            Command::SetRowStyle { .. } => {}
            other => println!("{other:?}"),
        }
    }
    c.on_transition_finished(Transition::Hide);
    println!("shown={}", c.is_panel_shown());
}
