use alloc::vec::Vec;

/// Cumulative row offsets along the scroll axis.
///
/// `tops[i]` is the sum of the heights of rows `0..i`. Offsets live in their own array (rather
/// than on the rows) so the scroll → row lookup is a plain binary search over `u64`s.
#[derive(Clone, Debug, Default)]
pub(crate) struct Layout {
    tops: Vec<u64>,
    total: u64,
}

impl Layout {
    /// Recomputes every offset in a single forward pass and returns the total height.
    pub(crate) fn set_heights<T>(&mut self, rows: &[T], height: impl Fn(&T) -> u32) -> u64 {
        self.tops.clear();
        self.tops.reserve(rows.len());
        let mut running = 0u64;
        for row in rows {
            self.tops.push(running);
            running = running.saturating_add(height(row) as u64);
        }
        self.total = running;
        running
    }

    pub(crate) fn tops(&self) -> &[u64] {
        &self.tops
    }

    pub(crate) fn top(&self, index: usize) -> Option<u64> {
        self.tops.get(index).copied()
    }

    pub(crate) fn total_height(&self) -> u64 {
        self.total
    }

    /// Returns the insertion point of the screen midpoint
    /// (`scroll_top + client_height / 2`) in `tops`.
    ///
    /// This is a lower bound: the first index whose top is `>=` the midpoint. Comparisons run
    /// in doubled space so odd client heights keep their half pixel.
    pub(crate) fn midpoint_index(&self, scroll_top: u64, client_height: u32) -> usize {
        let doubled_mid = scroll_top
            .saturating_mul(2)
            .saturating_add(client_height as u64);
        self.tops
            .partition_point(|&top| top.saturating_mul(2) < doubled_mid)
    }
}
