//! utility functions for internal library use

use ndarray::{Array1, ArrayView1};

/// Make a full, independently allocated copy of a one-dimensional array.
/// Every array that crosses the boundary of a `Parameter` goes through here so
/// that no storage is ever shared with the caller.
pub fn copy_of<T: Clone>(data: ArrayView1<T>) -> Array1<T> {
    data.to_owned()
}

/// Copy an optional stored array for handing back to a caller.
pub(crate) fn copy_opt<T: Clone>(data: &Option<Array1<T>>) -> Option<Array1<T>> {
    data.as_ref().map(|d| copy_of(d.view()))
}
