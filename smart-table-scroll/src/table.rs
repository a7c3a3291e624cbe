use alloc::vec::Vec;
use core::mem;

use crate::binding::BindingMap;
use crate::layout::Layout;
use crate::surface::{ANCHOR_CLASS, CONTAINER_CLASS, ROW_CLASS};
use crate::{
    BuildRow, FillWindow, HeightFn, Result, Surface, TableError, TableOptions, TableState,
    UpdateOutcome, UpdateRow, Viewport,
};

/// A scrollable table that keeps a bounded pool of row nodes and recycles them as the user
/// scrolls.
///
/// The table lays all rows out in a virtual vertical space (`tops`), mounts nodes for the
/// first block of rows, and on every scroll event rebinds nodes that fell out of the window
/// around the screen midpoint onto rows that entered it. Nodes are never destroyed on scroll.
///
/// The engine does not listen for events on its own. Either call
/// [`ScrollableTable::update_visible_rows`] from your scroll handler, or wrap the table in a
/// [`crate::SharedTable`], which registers a listener with the [`Surface`].
pub struct ScrollableTable<T, S: Surface> {
    surface: S,
    data: Vec<T>,
    height_fn: HeightFn<T>,
    build_row: BuildRow<T, S::Node>,
    update_row: UpdateRow<T, S::Node>,
    available_nodes: usize,

    layout: Layout,
    nodes: Vec<S::Node>,
    rows_with_nodes: Vec<usize>, // ascending
    bindings: BindingMap,
    anchor: Option<S::Node>,

    last_mid_index: Option<usize>,
    last_window: Option<FillWindow>,
    is_updating: bool,
}

impl<T, S: Surface> ScrollableTable<T, S> {
    /// Validates `options`, tags the container and mounts the first block of rows.
    ///
    /// Required options are checked in the order container, data, build_row, update_row.
    pub fn new(options: TableOptions<T, S>) -> Result<Self> {
        let TableOptions {
            container,
            data,
            build_row,
            update_row,
            height_fn,
            available_nodes,
        } = options;
        let mut surface = container.ok_or(TableError::MissingRequiredOption("container"))?;
        let data = data.ok_or(TableError::MissingRequiredOption("data"))?;
        let build_row = build_row.ok_or(TableError::MissingRequiredOption("build_row"))?;
        let update_row = update_row.ok_or(TableError::MissingRequiredOption("update_row"))?;

        tdebug!(rows = data.len(), available_nodes, "ScrollableTable::new");
        surface.add_class(CONTAINER_CLASS);

        let mut table = Self {
            surface,
            data,
            height_fn,
            build_row,
            update_row,
            available_nodes,
            layout: Layout::default(),
            nodes: Vec::new(),
            rows_with_nodes: Vec::new(),
            bindings: BindingMap::default(),
            anchor: None,
            last_mid_index: None,
            last_window: None,
            is_updating: false,
        };
        table.reset();
        Ok(table)
    }

    /// Rebuilds the layout and the node pool from scratch.
    ///
    /// Every child of the container is removed, `min(available_nodes, rows)` nodes are built
    /// for rows `0..` and a bottom anchor is appended at the total height.
    pub fn reset(&mut self) {
        let total = self.set_heights();
        self.surface.clear();
        self.bindings.clear();
        self.rows_with_nodes.clear();
        self.nodes.clear();
        self.anchor = None;
        self.last_mid_index = None;
        self.last_window = None;

        let count = self.available_nodes.min(self.data.len());
        tdebug!(rows = self.data.len(), nodes = count, total, "ScrollableTable::reset");
        self.nodes.reserve(count);
        for index in 0..count {
            let mut node = (self.build_row)(&self.data[index]);
            self.surface.set_top(&mut node, self.layout.tops()[index]);
            self.surface.add_node_class(&mut node, ROW_CLASS);
            self.surface.append(&node);
            self.nodes.push(node);
            self.rows_with_nodes.push(index);
            self.bindings.insert(index, index);
        }

        let mut anchor = self.surface.create_anchor();
        self.surface.add_node_class(&mut anchor, ANCHOR_CLASS);
        self.surface.set_top(&mut anchor, total);
        self.surface.append(&anchor);
        self.anchor = Some(anchor);
    }

    /// Recomputes the offset of every row and returns the total height.
    ///
    /// Runs in `O(rows)`; call it whenever row data or heights change, never per scroll.
    pub fn set_heights(&mut self) -> u64 {
        self.layout.set_heights(&self.data, &*self.height_fn)
    }

    /// Reconciles the node pool with the current scroll position.
    ///
    /// Returns [`UpdateOutcome::Dropped`] if another update is in flight and
    /// [`UpdateOutcome::Unchanged`] if the row under the screen midpoint did not move since the
    /// last call.
    pub fn update_visible_rows(&mut self) -> UpdateOutcome {
        if self.is_updating {
            ttrace!("update_visible_rows dropped: update in flight");
            return UpdateOutcome::Dropped;
        }
        self.is_updating = true;
        let outcome = self.recycle();
        self.is_updating = false;
        outcome
    }

    fn recycle(&mut self) -> UpdateOutcome {
        let scroll_top = self.surface.scroll_top();
        let client_height = self.surface.client_height();
        let mid = self.layout.midpoint_index(scroll_top, client_height);
        if self.last_mid_index == Some(mid) {
            return UpdateOutcome::Unchanged;
        }
        self.last_mid_index = Some(mid);

        let window = FillWindow::around(mid, self.available_nodes, self.data.len());
        self.last_window = Some(window);

        // Off-window entries are consumed front to back; the cursor only moves forward.
        let mut cursor = 0usize;
        let mut rebound = 0usize;
        for row in window.start..window.end {
            if self.bindings.contains_key(&row) {
                continue;
            }
            while self
                .rows_with_nodes
                .get(cursor)
                .is_some_and(|&bound| window.contains(bound))
            {
                cursor += 1;
            }
            let Some(&old_row) = self.rows_with_nodes.get(cursor) else {
                twarn!(
                    row,
                    start = window.start,
                    end = window.end,
                    pool = self.rows_with_nodes.len(),
                    "update_visible_rows: no off-window node left to recycle"
                );
                break;
            };
            let Some(slot) = self.bindings.remove(&old_row) else {
                twarn!(old_row, "update_visible_rows: bound row has no node");
                break;
            };
            self.bind(row, slot);
            self.rows_with_nodes[cursor] = row;
            cursor += 1;
            rebound += 1;
        }

        if rebound > 0 {
            self.rows_with_nodes.sort_unstable();
        }
        ttrace!(
            scroll_top,
            mid,
            start = window.start,
            end = window.end,
            rebound,
            "update_visible_rows"
        );
        UpdateOutcome::Updated { rebound }
    }

    /// Replaces the dataset, reusing the existing nodes.
    ///
    /// Excess nodes are detached when the new dataset is smaller than the pool; new nodes are
    /// built when it is larger (up to `available_nodes`). The pool is rebound to rows `0..K` of
    /// the new data. Visibility is not reconciled here: the next scroll event does that.
    pub fn update_data(&mut self, new_data: Vec<T>) -> UpdateOutcome {
        if self.is_updating {
            ttrace!("update_data dropped: update in flight");
            return UpdateOutcome::Dropped;
        }
        self.is_updating = true;
        let rebound = self.replace_data(new_data);
        self.is_updating = false;
        UpdateOutcome::Updated { rebound }
    }

    fn replace_data(&mut self, new_data: Vec<T>) -> usize {
        let new_len = new_data.len();
        tdebug!(
            old_rows = self.data.len(),
            new_rows = new_len,
            bound = self.rows_with_nodes.len(),
            "ScrollableTable::update_data"
        );

        // Pool in ascending row order.
        let mut slots: Vec<Option<S::Node>> =
            mem::take(&mut self.nodes).into_iter().map(Some).collect();
        let mut pool = Vec::with_capacity(self.available_nodes.min(new_len));
        for row in &self.rows_with_nodes {
            let node = self
                .bindings
                .get(row)
                .and_then(|&slot| slots.get_mut(slot))
                .and_then(Option::take);
            if let Some(node) = node {
                pool.push(node);
            }
        }
        self.bindings.clear();
        self.rows_with_nodes.clear();

        if new_len < pool.len() {
            for node in pool.drain(new_len..).rev() {
                self.surface.remove(&node);
            }
        }

        let target = self.available_nodes.min(new_len);
        for index in pool.len()..target {
            let mut node = (self.build_row)(&new_data[index]);
            self.surface.add_node_class(&mut node, ROW_CLASS);
            self.surface.append(&node);
            pool.push(node);
        }

        self.data = new_data;
        let total = self.set_heights();
        self.nodes = pool;
        for index in 0..self.nodes.len() {
            self.bind(index, index);
            self.rows_with_nodes.push(index);
        }
        if let Some(anchor) = self.anchor.as_mut() {
            self.surface.set_top(anchor, total);
        }

        // Force the next scroll event to reconcile even if the midpoint row is the same.
        self.last_mid_index = None;
        self.last_window = None;
        self.nodes.len()
    }

    fn bind(&mut self, row: usize, slot: usize) {
        let node = &mut self.nodes[slot];
        (self.update_row)(&self.data[row], node);
        self.surface.set_top(node, self.layout.tops()[row]);
        self.bindings.insert(row, slot);
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Cumulative offsets, one per row.
    pub fn tops(&self) -> &[u64] {
        self.layout.tops()
    }

    pub fn row_top(&self, index: usize) -> Option<u64> {
        self.layout.top(index)
    }

    pub fn total_height(&self) -> u64 {
        self.layout.total_height()
    }

    pub fn available_nodes(&self) -> usize {
        self.available_nodes
    }

    /// Row indexes that currently own a node, ascending.
    pub fn rows_with_nodes(&self) -> &[usize] {
        &self.rows_with_nodes
    }

    pub fn bound_count(&self) -> usize {
        self.rows_with_nodes.len()
    }

    pub fn node_for_row(&self, row: usize) -> Option<&S::Node> {
        self.bindings.get(&row).map(|&slot| &self.nodes[slot])
    }

    /// Iterates `(row, node)` pairs in ascending row order.
    pub fn bound_nodes(&self) -> impl Iterator<Item = (usize, &S::Node)> + '_ {
        self.rows_with_nodes
            .iter()
            .filter_map(|&row| self.node_for_row(row).map(|node| (row, node)))
    }

    pub fn last_mid_index(&self) -> Option<usize> {
        self.last_mid_index
    }

    /// The window filled by the last reconciliation, if any ran since the last reset or data
    /// replacement.
    pub fn fill_window(&self) -> Option<FillWindow> {
        self.last_window
    }

    pub fn is_updating(&self) -> bool {
        self.is_updating
    }

    pub fn anchor(&self) -> Option<&S::Node> {
        self.anchor.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn state(&self) -> TableState {
        TableState {
            viewport: Viewport {
                scroll_top: self.surface.scroll_top(),
                client_height: self.surface.client_height(),
            },
            row_count: self.data.len(),
            total_height: self.layout.total_height(),
            bound_nodes: self.rows_with_nodes.len(),
            last_mid_index: self.last_mid_index,
            window: self.last_window,
        }
    }
}

impl<T, S: Surface> core::fmt::Debug for ScrollableTable<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollableTable")
            .field("rows", &self.data.len())
            .field("available_nodes", &self.available_nodes)
            .field("bound_nodes", &self.rows_with_nodes.len())
            .field("total_height", &self.layout.total_height())
            .field("last_mid_index", &self.last_mid_index)
            .field("is_updating", &self.is_updating)
            .finish_non_exhaustive()
    }
}
