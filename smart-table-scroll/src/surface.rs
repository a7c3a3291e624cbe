use alloc::boxed::Box;

use crate::UpdateOutcome;

/// Marker class added to the container on construction.
pub const CONTAINER_CLASS: &str = "sts-container";
/// Marker class added to every pooled row node.
pub const ROW_CLASS: &str = "sts-row";
/// Marker class added to the bottom anchor.
pub const ANCHOR_CLASS: &str = "sts-bottom-anchor";

/// Callback a [`Surface`] invokes whenever its scroll position changes.
pub type ScrollListener = Box<dyn FnMut() -> UpdateOutcome>;

/// The host container a table renders into.
///
/// This is the only seam between the recycling engine and the UI layer. A DOM adapter maps
/// it onto an absolutely positioned scroll container; tests use an in-memory mock.
///
/// Nodes are owned by the table's pool. The surface only sees them by reference, so a node
/// type is typically a cheap handle (a `web_sys::Element`, an id, ...).
pub trait Surface {
    type Node;

    /// Tags the container itself with a marker class.
    fn add_class(&mut self, class: &str);

    /// Removes every child of the container.
    fn clear(&mut self);

    fn append(&mut self, node: &Self::Node);

    fn remove(&mut self, node: &Self::Node);

    /// Positions `node` at an absolute offset along the scroll axis.
    fn set_top(&mut self, node: &mut Self::Node, top: u64);

    fn add_node_class(&mut self, node: &mut Self::Node, class: &str);

    /// Creates the zero-content element that pins the scrollable extent.
    fn create_anchor(&mut self) -> Self::Node;

    /// Current scroll offset of the container.
    fn scroll_top(&self) -> u64;

    /// Visible height of the container.
    fn client_height(&self) -> u32;

    /// Stores a listener to be invoked on every scroll event.
    ///
    /// The default implementation drops the listener; hosts that poll and call
    /// [`crate::ScrollableTable::update_visible_rows`] themselves don't need it.
    fn listen_scroll(&mut self, listener: ScrollListener) {
        let _ = listener;
    }
}
