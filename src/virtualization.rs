//! Row virtualization helpers.
//!
//! Rows have a fixed height, so the window of rendered rows follows
//! directly from the scroll offset and viewport height.

/// A row positioned inside the virtual container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualItem {
    pub index: usize,
    /// Offset from the container top, in px
    pub start: u64,
    /// Height in px
    pub size: u32,
}

impl VirtualItem {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(u64::from(self.size))
    }
}

/// Total scroll height for `item_count` rows. Zero for non-positive counts.
///
/// Saturates at `u64::MAX`.
pub fn estimate_total_height(item_count: i64, row_height: u32) -> u64 {
    if item_count <= 0 {
        return 0;
    }
    (item_count as u64).saturating_mul(u64::from(row_height))
}

/// Rows intersecting the viewport, plus `overscan` rows on each side.
///
/// Scroll offsets past the end clamp to the last row. Empty when there are
/// no rows or the row height is zero.
pub fn visible_window(
    item_count: usize,
    row_height: u32,
    scroll_offset: u64,
    viewport_height: u64,
    overscan: usize,
) -> Vec<VirtualItem> {
    if item_count == 0 || row_height == 0 {
        return Vec::new();
    }
    let height = u64::from(row_height);
    let last_index = item_count - 1;

    let first_visible = index_at(scroll_offset, height).min(last_index);
    let last_visible = if viewport_height == 0 {
        first_visible
    } else {
        index_at(scroll_offset.saturating_add(viewport_height - 1), height).min(last_index)
    };

    let first = first_visible.saturating_sub(overscan);
    let last = last_visible.saturating_add(overscan).min(last_index);

    (first..=last)
        .map(|index| VirtualItem {
            index,
            start: (index as u64).saturating_mul(height),
            size: row_height,
        })
        .collect()
}

fn index_at(offset: u64, row_height: u64) -> usize {
    usize::try_from(offset / row_height).unwrap_or(usize::MAX)
}

/// Spacer heights above and below the rendered window.
pub fn window_padding(items: &[VirtualItem], total_height: u64) -> (u64, u64) {
    match (items.first(), items.last()) {
        (Some(first), Some(last)) => (first.start, total_height.saturating_sub(last.end())),
        _ => (0, 0),
    }
}

/// CSS transform placing a row at its offset.
pub fn row_transform(item: &VirtualItem) -> String {
    format!("translateY({}px)", item.start)
}

/// CSS height of the container holding every row.
pub fn container_height(total_height: u64) -> String {
    format!("{total_height}px")
}
