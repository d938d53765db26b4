// Example: probe a grid by hand, then compute windows for a few scroll offsets.
use grid_virtualizer::{
    ItemBox, LayoutProbe, MeasureError, Viewport, VirtualGrid, VirtualGridOptions,
};

/// 3 columns of 200px items with a 16px gap, rows every 120px.
struct Page {
    rendered: usize,
    scroll_offset: u64,
}

impl LayoutProbe for Page {
    fn item_box(&self, index: usize) -> Result<ItemBox, MeasureError> {
        if index >= self.rendered {
            return Err(MeasureError::NotRendered { index });
        }
        Ok(ItemBox {
            top: 80 + (index / 3) as u64 * 120,
            left: (index % 3) as u64 * 216,
            width: 200,
        })
    }

    fn container_inner_width(&self) -> u32 {
        632
    }
}

impl Viewport for Page {
    fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    fn viewport_height(&self) -> u32 {
        720
    }
}

fn main() {
    let mut grid = VirtualGrid::new(VirtualGridOptions::new("cards").with_tolerance(2));
    grid.set_item_count(10_000);

    let mut page = Page {
        rendered: 0,
        scroll_offset: 0,
    };
    while grid.geometry().is_none() {
        page.rendered = grid.slice().len();
        grid.probe(&page).expect("every child is an item");
        println!("probe state: {:?}", grid.probe_state());
    }

    for offset in [0u64, 5_000, 600_000] {
        page.scroll_offset = offset;
        grid.recompute(&page);
        let slice = grid.slice();
        println!(
            "offset={offset} window={:?} range={:?} spacers=({}, {})",
            grid.window(),
            slice.range,
            slice.top_spacer,
            slice.bottom_spacer
        );
    }
}
