use crate::FillWindow;

/// A lightweight, serializable snapshot of the container geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_top: u64,
    pub client_height: u32,
}

/// A combined snapshot of the table's recycling state.
///
/// Useful for debugging overlays and for asserting on the engine from adapter tests without
/// reaching into the node pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableState {
    pub viewport: Viewport,
    pub row_count: usize,
    pub total_height: u64,
    pub bound_nodes: usize,
    pub last_mid_index: Option<usize>,
    /// The window the last reconciliation filled, if any ran since the last reset.
    pub window: Option<FillWindow>,
}
