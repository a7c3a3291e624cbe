#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Row index -> pool slot.
#[cfg(feature = "std")]
pub(crate) type BindingMap = HashMap<usize, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type BindingMap = BTreeMap<usize, usize>;
