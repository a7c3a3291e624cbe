use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::Surface;

/// Returns the pixel height of a row. Called once per row per layout pass.
pub type HeightFn<T> = Arc<dyn Fn(&T) -> u32 + Send + Sync>;

/// Constructs a fresh visual node for a row. Called only when the pool grows.
pub type BuildRow<T, N> = Arc<dyn Fn(&T) -> N + Send + Sync>;

/// Mutates an existing node in place so it reflects a row. Called on every rebind.
pub type UpdateRow<T, N> = Arc<dyn Fn(&T, &mut N) + Send + Sync>;

/// Default row height used when no `height_fn` is configured.
pub const DEFAULT_ROW_HEIGHT: u32 = 10;

/// Default pool size.
pub const DEFAULT_AVAILABLE_NODES: usize = 100;

/// Configuration for [`crate::ScrollableTable`].
///
/// `container`, `data`, `build_row` and `update_row` are required; construction fails with
/// [`crate::TableError::MissingRequiredOption`] if any is left unset. Everything else has a
/// default.
pub struct TableOptions<T, S: Surface> {
    pub container: Option<S>,
    pub data: Option<Vec<T>>,
    pub build_row: Option<BuildRow<T, S::Node>>,
    pub update_row: Option<UpdateRow<T, S::Node>>,
    pub height_fn: HeightFn<T>,

    /// Number of nodes kept alive. Pick it comfortably larger than the number of rows that fit
    /// on screen: recycling assumes a scroll tick never moves more rows into the window than
    /// there are nodes outside it.
    pub available_nodes: usize,
}

impl<T, S: Surface> TableOptions<T, S> {
    pub fn new() -> Self {
        Self {
            container: None,
            data: None,
            build_row: None,
            update_row: None,
            height_fn: Arc::new(|_: &T| DEFAULT_ROW_HEIGHT),
            available_nodes: DEFAULT_AVAILABLE_NODES,
        }
    }

    pub fn with_container(mut self, container: S) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_data(mut self, data: Vec<T>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_build_row(
        mut self,
        build_row: impl Fn(&T) -> S::Node + Send + Sync + 'static,
    ) -> Self {
        self.build_row = Some(Arc::new(build_row));
        self
    }

    pub fn with_update_row(
        mut self,
        update_row: impl Fn(&T, &mut S::Node) + Send + Sync + 'static,
    ) -> Self {
        self.update_row = Some(Arc::new(update_row));
        self
    }

    pub fn with_height_fn(
        mut self,
        height_fn: impl Fn(&T) -> u32 + Send + Sync + 'static,
    ) -> Self {
        self.height_fn = Arc::new(height_fn);
        self
    }

    /// Uses the same height for every row.
    pub fn with_fixed_height(self, height: u32) -> Self {
        self.with_height_fn(move |_| height)
    }

    pub fn with_available_nodes(mut self, available_nodes: usize) -> Self {
        self.available_nodes = available_nodes;
        self
    }
}

impl<T, S: Surface> Default for TableOptions<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, S: Surface + Clone> Clone for TableOptions<T, S> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            data: self.data.clone(),
            build_row: self.build_row.clone(),
            update_row: self.update_row.clone(),
            height_fn: Arc::clone(&self.height_fn),
            available_nodes: self.available_nodes,
        }
    }
}

impl<T, S: Surface> core::fmt::Debug for TableOptions<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableOptions")
            .field("container", &self.container.is_some())
            .field("rows", &self.data.as_ref().map(Vec::len))
            .field("build_row", &self.build_row.is_some())
            .field("update_row", &self.update_row.is_some())
            .field("available_nodes", &self.available_nodes)
            .finish_non_exhaustive()
    }
}
