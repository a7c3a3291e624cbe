/// The contiguous range of row indexes expected to hold a bound node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FillWindow {
    pub start: usize,
    pub end: usize, // exclusive
}

impl FillWindow {
    /// Builds the window centered on `mid` for a pool of `available_nodes`, clamped to
    /// `[0, row_count)`.
    ///
    /// The window extends `ceil(available_nodes / 2)` rows before `mid` and the remainder of the
    /// pool after it, so it never holds more rows than there are nodes.
    pub fn around(mid: usize, available_nodes: usize, row_count: usize) -> Self {
        let before = available_nodes.div_ceil(2);
        let after = available_nodes - before;
        let start = mid.saturating_sub(before).min(row_count);
        let end = mid.saturating_add(after).min(row_count).max(start);
        Self { start, end }
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// What a mutating table operation ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateOutcome {
    /// Another update was in flight; the call was dropped, not queued.
    Dropped,
    /// The midpoint row did not move, nothing was rebound.
    Unchanged,
    /// `rebound` nodes received new row data.
    Updated { rebound: usize },
}
