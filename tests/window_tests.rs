// Integration tests for the virtualized row window

use cointoss::window::VirtualGrid;

#[test]
fn test_rows_partition_the_sequence() {
    let grid = VirtualGrid::new(25, 10);

    assert_eq!(grid.total_rows(), 3);
    assert_eq!(grid.row(0).range, 0..10);
    assert_eq!(grid.row(1).range, 10..20);
    assert_eq!(grid.row(2).range, 20..25);
}

#[test]
fn test_overscan_expansion_clamps_to_grid_edges() {
    // Viewport intersecting row 1 only; overscan 5 reaches past both ends
    // of a 3-row grid, so the window clamps to rows 0..=2
    let grid = VirtualGrid::new(25, 10).overscan(5);
    let window = grid.visible_window(1, 1);

    let indices: Vec<usize> = window.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_window_is_idempotent() {
    let grid = VirtualGrid::new(12_345, 10);

    for (offset, viewport) in [(0, 20), (57, 20), (1000, 3), (1234, 1)] {
        let first = grid.visible_window(offset, viewport);
        let second = grid.visible_window(offset, viewport);
        assert_eq!(first, second, "offset={} viewport={}", offset, viewport);
    }
}

#[test]
fn test_window_covers_viewport_at_every_offset() {
    let grid = VirtualGrid::new(1000, 10).overscan(5);
    let viewport = 20;

    for offset in 0..=grid.max_scroll(viewport) {
        let window = grid.visible_window(offset, viewport);

        // Every row whose vertical span intersects the viewport must appear
        for index in 0..grid.total_rows() {
            let row = grid.row(index);
            let intersects = row.top < offset + viewport && row.top + row.height > offset;
            if intersects {
                assert!(
                    window.iter().any(|r| r.index == index),
                    "row {} missing at offset {}",
                    index,
                    offset
                );
            }
        }
    }
}

#[test]
fn test_window_covers_viewport_with_taller_rows() {
    let grid = VirtualGrid::new(500, 10).row_height(3).overscan(2);
    let viewport = 17;

    for offset in 0..=grid.max_scroll(viewport) {
        let window = grid.visible_window(offset, viewport);

        for index in 0..grid.total_rows() {
            let row = grid.row(index);
            let intersects = row.top < offset + viewport && row.top + row.height > offset;
            if intersects {
                assert!(
                    window.iter().any(|r| r.index == index),
                    "row {} missing at offset {}",
                    index,
                    offset
                );
            }
        }
    }
}

#[test]
fn test_window_size_is_bounded_by_viewport_not_sequence() {
    // A thousand-fold longer sequence must not produce a larger window
    let short = VirtualGrid::new(1_000, 10).overscan(5);
    let long = VirtualGrid::new(1_000_000, 10).overscan(5);
    let viewport = 20;

    let bound = viewport + 2 * 5 + 2;
    assert!(short.visible_window(40, viewport).len() <= bound);
    assert!(long.visible_window(40_000, viewport).len() <= bound);
    assert_eq!(
        short.visible_window(40, viewport).len(),
        long.visible_window(40, viewport).len()
    );
}

#[test]
fn test_empty_sequence_yields_empty_window() {
    let grid = VirtualGrid::new(0, 10);

    assert_eq!(grid.total_rows(), 0);
    assert_eq!(grid.total_height(), 0);
    assert!(grid.visible_window(0, 20).is_empty());
    assert!(grid.visible_window(999, 20).is_empty());
}

#[test]
fn test_offset_beyond_extent_clamps_to_final_rows() {
    let grid = VirtualGrid::new(1000, 10).overscan(0);
    let viewport = 20;

    let at_end = grid.visible_window(grid.max_scroll(viewport), viewport);
    let beyond = grid.visible_window(usize::MAX, viewport);

    assert_eq!(at_end, beyond);
    assert_eq!(beyond.last().map(|r| r.index), Some(grid.total_rows() - 1));
}

#[test]
fn test_row_geometry() {
    let grid = VirtualGrid::new(95, 10).row_height(2);

    assert_eq!(grid.total_rows(), 10);
    assert_eq!(grid.total_height(), 20);

    let window = grid.visible_window(0, 20);
    for row in &window {
        assert_eq!(row.top, row.index * 2);
        assert_eq!(row.height, 2);
    }

    // Final row is partial
    assert_eq!(grid.row(9).range, 90..95);
}

#[test]
fn test_zero_viewport_yields_empty_window() {
    let grid = VirtualGrid::new(100, 10);
    assert!(grid.visible_window(0, 0).is_empty());
    assert!(grid.visible_window(50, 0).is_empty());
}

#[test]
fn test_single_partial_row() {
    let grid = VirtualGrid::new(3, 10);

    assert_eq!(grid.total_rows(), 1);
    let window = grid.visible_window(0, 20);
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].range, 0..3);
}
