use crate::*;

use grid_virtualizer::{ProbeState, RenderSlice, VirtualGridOptions};
use proptest::prelude::*;

/// Renders, commits and probes until the controller stops asking for new renders.
fn mount(c: &mut Controller, sim: &mut SimulatedGrid, item_count: usize) -> Frame {
    let mut frame = c.on_items_changed(item_count, &*sim);
    for _ in 0..8 {
        sim.commit(&frame.slice);
        frame = c.on_commit(&*sim, &*sim).unwrap();
        if !frame.needs_render {
            break;
        }
    }
    frame
}

fn full_height(sim: &SimulatedGrid, item_count: usize) -> u64 {
    let rows = item_count.div_ceil(sim.columns()) as u64;
    match rows {
        0 => 0,
        rows => rows * sim.row_pitch() as u64 - sim.gap as u64,
    }
}

/// 4 columns, rows every 50px, 500px viewport.
fn notes_page() -> SimulatedGrid {
    SimulatedGrid::new(1000, 230, 30, 20).with_viewport_height(500)
}

#[test]
fn mount_probes_with_minimal_subsets() {
    let mut sim = notes_page();
    let mut c = Controller::new(VirtualGridOptions::new("notes").with_tolerance(1));

    let frame = c.on_items_changed(100, &sim);
    assert_eq!(frame.slice, RenderSlice::unvirtualized(2));
    assert!(frame.needs_render);

    sim.commit(&frame.slice);
    let frame = c.on_commit(&sim, &sim).unwrap();
    assert_eq!(frame.slice, RenderSlice::unvirtualized(5));

    sim.commit(&frame.slice);
    let frame = c.on_commit(&sim, &sim).unwrap();
    assert_eq!(frame.slice.range, 0..48);
    assert_eq!(frame.slice.bottom_spacer, 650);
    assert_eq!(frame.restore_scroll_offset, Some(0));

    sim.commit(&frame.slice);
    assert_eq!(sim.content_height(), full_height(&sim, 100));

    let frame = c.on_commit(&sim, &sim).unwrap();
    assert!(!frame.needs_render);
}

#[test]
fn scroll_burst_recomputes_once_from_latest_offset() {
    let mut sim = notes_page();
    let mut c = Controller::new(VirtualGridOptions::new("notes").with_tolerance(1));
    let frame = mount(&mut c, &mut sim, 100);
    sim.commit(&frame.slice);

    assert!(c.on_scroll(1_000));
    sim.scroll_to(300);
    assert!(!c.on_scroll(1_040));
    assert_eq!(c.next_deadline_ms(), Some(1_200));

    let frame = c.tick(1_100, &sim);
    assert!(!frame.needs_render);
    assert_eq!(frame.restore_scroll_offset, None);

    sim.scroll_to(600);
    let frame = c.tick(1_200, &sim);
    assert!(frame.needs_render);
    assert_eq!(frame.restore_scroll_offset, Some(600));
    assert_eq!(frame.slice.range, 44..92);
    assert_eq!(frame.slice.top_spacer, 550);
    assert_eq!(frame.slice.bottom_spacer, 100);

    sim.commit(&frame.slice);
    assert_eq!(sim.content_height(), full_height(&sim, 100));
    assert_eq!(c.next_deadline_ms(), None);
}

#[test]
fn resize_reprobes_at_new_width() {
    let mut sim = notes_page();
    let mut c = Controller::new(VirtualGridOptions::new("notes"));
    let frame = mount(&mut c, &mut sim, 100);
    sim.commit(&frame.slice);
    assert_eq!(c.grid().geometry().map(|g| g.column_count), Some(4));

    // Same width and height: nothing to do.
    assert!(!c.on_resize(1000, &sim).needs_render);

    sim.resize(500);
    let frame = c.on_resize(500, &sim);
    assert!(frame.needs_render);
    assert_eq!(frame.slice, RenderSlice::unvirtualized(2));
    assert_eq!(c.grid().probe_state(), ProbeState::MeasuringColumns);

    let mut frame = frame;
    for _ in 0..4 {
        sim.commit(&frame.slice);
        frame = c.on_commit(&sim, &sim).unwrap();
    }
    let geometry = c.grid().geometry().unwrap();
    assert_eq!(geometry.column_count, 2);
    assert_eq!(geometry.row_height, 50);
    // 10 visible rows of 2 columns.
    assert_eq!(frame.slice.range, 0..20);
}

#[test]
fn taller_viewport_at_same_width_widens_window() {
    let mut sim = notes_page();
    let mut c = Controller::new(VirtualGridOptions::new("notes"));
    let frame = mount(&mut c, &mut sim, 100);
    sim.commit(&frame.slice);
    assert_eq!(frame.slice.range, 0..40);

    sim.viewport_height = 1000;
    let frame = c.on_resize(1000, &sim);
    assert!(frame.needs_render);
    assert_eq!(frame.restore_scroll_offset, Some(0));
    assert_eq!(frame.slice.range, 0..80);
    assert_eq!(c.grid().geometry().map(|g| g.column_count), Some(4));

    sim.commit(&frame.slice);
    assert_eq!(sim.content_height(), full_height(&sim, 100));
}

#[test]
fn capped_track_list_measures_actual_columns() {
    // Four 230px notes would fit in 1000px, but the track list stops at three.
    let mut sim = notes_page().with_max_columns(3);
    let mut c = Controller::new(VirtualGridOptions::new("notes").with_tolerance(1));
    let frame = mount(&mut c, &mut sim, 100);
    assert_eq!(c.grid().geometry().map(|g| g.column_count), Some(3));
    assert_eq!(frame.slice.range, 0..36);
    assert_eq!(frame.slice.bottom_spacer, 22 * 50);

    sim.commit(&frame.slice);
    assert_eq!(sim.content_height(), full_height(&sim, 100));
}

#[test]
fn single_note_renders_unvirtualized() {
    let mut sim = notes_page();
    let mut c = Controller::new(VirtualGridOptions::new("notes"));
    let frame = mount(&mut c, &mut sim, 1);
    assert_eq!(frame.slice, RenderSlice::unvirtualized(1));
    assert!(c.grid().geometry().is_none());
    assert!(c.grid().is_degraded());
}

#[test]
fn container_offset_delays_hidden_rows() {
    let mut sim = notes_page().with_container_top(400);
    let mut c = Controller::new(VirtualGridOptions::new("notes"));
    let frame = mount(&mut c, &mut sim, 100);
    sim.commit(&frame.slice);
    assert_eq!(c.grid().geometry().unwrap().container_top, 400);

    sim.scroll_to(390);
    c.on_scroll(0);
    let frame = c.tick(200, &sim);
    assert_eq!(frame.slice.top_spacer, 0);

    sim.scroll_to(650);
    c.on_scroll(300);
    let frame = c.tick(500, &sim);
    assert_eq!(frame.slice.range.start, 5 * 4);
}

#[test]
fn shrinking_collection_keeps_geometry() {
    let mut sim = notes_page();
    let mut c = Controller::new(VirtualGridOptions::new("notes"));
    let frame = mount(&mut c, &mut sim, 100);
    sim.commit(&frame.slice);

    let frame = c.on_items_changed(30, &sim);
    assert!(c.grid().geometry().is_some());
    assert_eq!(frame.slice.range, 0..30);
    assert_eq!(frame.slice.bottom_spacer, 0);
}

proptest! {
    #[test]
    fn scrolling_preserves_content_height(
        item_count in 0usize..600,
        inner_width in 200u32..1600,
        item_width in 40u32..400,
        item_height in 10u32..200,
        gap in 0u32..30,
        tolerance in 0usize..4,
        offsets in proptest::collection::vec(0u64..40_000, 1..12),
    ) {
        let mut sim = SimulatedGrid::new(inner_width, item_width, item_height, gap)
            .with_viewport_height(700);
        let mut c = Controller::new(VirtualGridOptions::new("notes").with_tolerance(tolerance));
        let frame = mount(&mut c, &mut sim, item_count);
        sim.commit(&frame.slice);
        prop_assert_eq!(sim.content_height(), full_height(&sim, item_count));

        let mut now_ms = 0u64;
        for offset in offsets {
            sim.scroll_to(offset);
            c.on_scroll(now_ms);
            now_ms += 200;
            let frame = c.tick(now_ms, &sim);
            sim.commit(&frame.slice);
            if frame.slice.is_empty() && item_count > 0 {
                // Scrolled past the end: every row is hidden above the rendered block.
                let rows = item_count.div_ceil(sim.columns()) as u64;
                prop_assert_eq!(frame.slice.bottom_spacer, 0);
                prop_assert_eq!(frame.slice.top_spacer, rows * sim.row_pitch() as u64);
                prop_assert_eq!(sim.content_height(), rows * sim.row_pitch() as u64);
            } else {
                prop_assert_eq!(sim.content_height(), full_height(&sim, item_count));
            }
        }
    }
}
