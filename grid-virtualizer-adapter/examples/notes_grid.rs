// Example: a notes board driven through the controller, with a simulated page and clock.
use grid_virtualizer::VirtualGridOptions;
use grid_virtualizer_adapter::{Controller, SimulatedGrid};

fn main() {
    let notes: Vec<String> = (1..=500).map(|i| format!("# Note {i}")).collect();

    // 4 cards of 230px per row on a 1000px board, 180px cards with a 20px gap.
    let mut page = SimulatedGrid::new(1000, 230, 180, 20)
        .with_container_top(64)
        .with_viewport_height(900);
    let mut controller = Controller::new(VirtualGridOptions::new("notes-container").with_tolerance(1));

    let mut frame = controller.on_items_changed(notes.len(), &page);
    while frame.needs_render {
        page.commit(&frame.slice);
        frame = controller
            .on_commit(&page, &page)
            .expect("notes board only renders note cards");
    }
    println!("geometry: {:?}", controller.grid().geometry());

    // A fling: many scroll events inside one throttle window.
    let mut now_ms = 0u64;
    for offset in (0..20).map(|step| step * 350u64) {
        page.scroll_to(offset);
        controller.on_scroll(now_ms);
        now_ms += 16;
        frame = controller.tick(now_ms, &page);
        if frame.needs_render {
            page.commit(&frame.slice);
            if let Some(offset) = frame.restore_scroll_offset {
                page.scroll_to(offset);
            }
            let rendered = controller.grid().render(&notes, |note, index| {
                format!("[{index}] {}", note.trim_start_matches("# "))
            });
            println!(
                "t={now_ms}ms offset={offset} top={} cards={} first={:?} bottom={}",
                rendered.top_spacer,
                rendered.items.len(),
                rendered.items.first(),
                rendered.bottom_spacer
            );
        }
    }
}
