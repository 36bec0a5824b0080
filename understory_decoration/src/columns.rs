// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sources for the column count of fixed grids.

/// Supplies the current number of fixed grid columns.
///
/// This decouples grid decorations from any particular grid layout
/// implementation. A plain `u32` is a fixed column count; closures can read it
/// from the host's layout on every pass.
///
/// ```rust
/// use core::cell::Cell;
/// use understory_decoration::ColumnProvider;
///
/// let span_count = Cell::new(3_u32);
/// let provider = || span_count.get();
/// assert_eq!(provider.column_count(), 3);
/// span_count.set(4);
/// assert_eq!(provider.column_count(), 4);
/// ```
pub trait ColumnProvider {
    /// Returns the number of columns. Zero is a configuration error.
    fn column_count(&self) -> u32;
}

impl ColumnProvider for u32 {
    fn column_count(&self) -> u32 {
        *self
    }
}

impl<F> ColumnProvider for F
where
    F: Fn() -> u32,
{
    fn column_count(&self) -> u32 {
        self()
    }
}
