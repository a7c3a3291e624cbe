//! A headless row-recycling engine for scrolling very large tables.
//!
//! A [`ScrollableTable`] lays out every row of a dataset in a virtual vertical space but keeps
//! only a bounded pool of visual nodes alive. As the container scrolls, nodes that left the
//! window around the screen midpoint are rebound to rows that entered it; nothing is created or
//! destroyed on the scroll path.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - a [`Surface`]: the container, its scroll position and visible height
//! - `build_row` / `update_row` callbacks that create and refresh nodes
//! - a row height function
//!
//! ```
//! use smart_table_scroll::{ScrollableTable, Surface, TableOptions};
//!
//! #[derive(Default)]
//! struct Strip {
//!     scroll_top: u64,
//! }
//!
//! impl Surface for Strip {
//!     type Node = (usize, u64);
//!     fn add_class(&mut self, _: &str) {}
//!     fn clear(&mut self) {}
//!     fn append(&mut self, _: &Self::Node) {}
//!     fn remove(&mut self, _: &Self::Node) {}
//!     fn set_top(&mut self, node: &mut Self::Node, top: u64) {
//!         node.1 = top;
//!     }
//!     fn add_node_class(&mut self, _: &mut Self::Node, _: &str) {}
//!     fn create_anchor(&mut self) -> Self::Node {
//!         (usize::MAX, 0)
//!     }
//!     fn scroll_top(&self) -> u64 {
//!         self.scroll_top
//!     }
//!     fn client_height(&self) -> u32 {
//!         400
//!     }
//! }
//!
//! let mut table = ScrollableTable::new(
//!     TableOptions::new()
//!         .with_container(Strip::default())
//!         .with_data((0..1_000_000usize).collect::<Vec<_>>())
//!         .with_fixed_height(17)
//!         .with_available_nodes(200)
//!         .with_build_row(|row: &usize| (*row, 0))
//!         .with_update_row(|row, node| node.0 = *row),
//! )
//! .unwrap();
//! assert_eq!(table.total_height(), 17_000_000);
//!
//! table.surface_mut().scroll_top = 8_499_800;
//! table.update_visible_rows();
//! assert_eq!(table.rows_with_nodes().first(), Some(&499_900));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod binding;
mod error;
mod layout;
mod options;
mod shared;
mod state;
mod surface;
mod table;
mod types;


pub use error::{Result, TableError};
pub use options::{
    BuildRow, DEFAULT_AVAILABLE_NODES, DEFAULT_ROW_HEIGHT, HeightFn, TableOptions, UpdateRow,
};
pub use shared::SharedTable;
pub use state::{TableState, Viewport};
pub use surface::{ANCHOR_CLASS, CONTAINER_CLASS, ROW_CLASS, ScrollListener, Surface};
pub use table::ScrollableTable;
pub use types::{FillWindow, UpdateOutcome};
