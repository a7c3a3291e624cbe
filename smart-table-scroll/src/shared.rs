use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::{ScrollListener, ScrollableTable, Surface, UpdateOutcome};

/// A shared handle that wires a [`ScrollableTable`] to its surface's scroll events.
///
/// On construction exactly one [`ScrollListener`] is handed to [`Surface::listen_scroll`].
/// Events that arrive while the table is already borrowed (for example a scroll dispatched
/// synchronously from inside a row callback) are dropped, not queued; a later event
/// reconciles the table.
pub struct SharedTable<T, S: Surface> {
    inner: Rc<RefCell<ScrollableTable<T, S>>>,
}

impl<T: 'static, S: Surface + 'static> SharedTable<T, S> {
    pub fn new(table: ScrollableTable<T, S>) -> Self {
        let inner = Rc::new(RefCell::new(table));
        let weak = Rc::downgrade(&inner);
        let listener: ScrollListener = Box::new(move || dispatch_scroll(&weak));
        inner.borrow_mut().surface_mut().listen_scroll(listener);
        Self { inner }
    }
}

impl<T, S: Surface> SharedTable<T, S> {
    /// Runs a scroll reconciliation, dropping it if the table is busy.
    pub fn on_scroll(&self) -> UpdateOutcome {
        match self.inner.try_borrow_mut() {
            Ok(mut table) => table.update_visible_rows(),
            Err(_) => UpdateOutcome::Dropped,
        }
    }

    /// Replaces the dataset, dropping the call if the table is busy.
    pub fn update_data(&self, new_data: Vec<T>) -> UpdateOutcome {
        match self.inner.try_borrow_mut() {
            Ok(mut table) => table.update_data(new_data),
            Err(_) => {
                ttrace!("update_data dropped: table borrowed");
                UpdateOutcome::Dropped
            }
        }
    }

    /// Borrows the table immutably.
    ///
    /// # Panics
    ///
    /// Panics if the table is currently borrowed mutably.
    pub fn with<R>(&self, f: impl FnOnce(&ScrollableTable<T, S>) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Borrows the table mutably.
    ///
    /// # Panics
    ///
    /// Panics if the table is currently borrowed.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut ScrollableTable<T, S>) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}

impl<T, S: Surface> Clone for SharedTable<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, S: Surface> core::fmt::Debug for SharedTable<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner.try_borrow() {
            Ok(table) => f.debug_tuple("SharedTable").field(&*table).finish(),
            Err(_) => f.write_str("SharedTable(<borrowed>)"),
        }
    }
}

fn dispatch_scroll<T, S: Surface>(table: &Weak<RefCell<ScrollableTable<T, S>>>) -> UpdateOutcome {
    let Some(rc) = table.upgrade() else {
        return UpdateOutcome::Dropped;
    };
    let Ok(mut table) = rc.try_borrow_mut() else {
        ttrace!("scroll event dropped: table borrowed");
        return UpdateOutcome::Dropped;
    };
    table.update_visible_rows()
}
