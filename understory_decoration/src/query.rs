// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A validated description of one item's place in its list.

use crate::error::DecorationError;
use crate::types::{GridSpan, Orientation};

/// Everything a calculator needs to know about one item in one layout pass.
///
/// A query is validated when it is built, so calculators never see a position
/// outside the list, a grid with zero columns, or a span that does not fit.
///
/// ```rust
/// use understory_decoration::{GridSpan, LayoutQuery, Orientation};
///
/// let query = LayoutQuery::new(5, 12, Orientation::Vertical)
///     .unwrap()
///     .with_columns(4)
///     .unwrap()
///     .with_span(GridSpan::new(1, 2))
///     .unwrap();
/// assert_eq!(query.columns(), Some(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutQuery {
    position: usize,
    item_count: usize,
    orientation: Orientation,
    inverted: bool,
    columns: Option<u32>,
    span: Option<GridSpan>,
}

impl LayoutQuery {
    /// Creates a query for `position` in a list of `item_count` items.
    ///
    /// # Errors
    ///
    /// - [`DecorationError::EmptyList`] if `item_count` is zero.
    /// - [`DecorationError::PositionOutOfRange`] if `position >= item_count`.
    pub fn new(
        position: usize,
        item_count: usize,
        orientation: Orientation,
    ) -> Result<Self, DecorationError> {
        if item_count == 0 {
            return Err(DecorationError::EmptyList);
        }
        if position >= item_count {
            return Err(DecorationError::PositionOutOfRange {
                position,
                item_count,
            });
        }
        Ok(Self {
            position,
            item_count,
            orientation,
            inverted: false,
            columns: None,
            span: None,
        })
    }

    /// Marks the layout as inverted (reverse layout).
    #[must_use]
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Sets the number of grid columns.
    ///
    /// # Errors
    ///
    /// - [`DecorationError::ZeroColumns`] if `columns` is zero.
    /// - [`DecorationError::SpanOutOfBounds`] if a span was already set that
    ///   does not fit in `columns`.
    pub fn with_columns(mut self, columns: u32) -> Result<Self, DecorationError> {
        if columns == 0 {
            return Err(DecorationError::ZeroColumns);
        }
        self.columns = Some(columns);
        if let Some(span) = self.span {
            self.check_span(span, columns)?;
        }
        Ok(self)
    }

    /// Sets the item's column span. Requires a column count.
    ///
    /// # Errors
    ///
    /// - [`DecorationError::SpanWithoutColumns`] if no column count is set.
    /// - [`DecorationError::ZeroSpan`] if `span.size` is zero.
    /// - [`DecorationError::SpanOutOfBounds`] if `span.index + span.size` exceeds
    ///   the column count.
    pub fn with_span(mut self, span: GridSpan) -> Result<Self, DecorationError> {
        let columns = self.columns.ok_or(DecorationError::SpanWithoutColumns)?;
        self.check_span(span, columns)?;
        self.span = Some(span);
        Ok(self)
    }

    fn check_span(&self, span: GridSpan, columns: u32) -> Result<(), DecorationError> {
        if span.size == 0 {
            return Err(DecorationError::ZeroSpan {
                position: self.position,
            });
        }
        if u64::from(span.index) + u64::from(span.size) > u64::from(columns) {
            return Err(DecorationError::SpanOutOfBounds {
                position: self.position,
                index: span.index,
                size: span.size,
                columns,
            });
        }
        Ok(())
    }

    /// Position of the item.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of items in the list.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Scroll orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the layout is inverted.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Number of grid columns, if this is a grid query.
    #[must_use]
    pub fn columns(&self) -> Option<u32> {
        self.columns
    }

    /// Column span of the item, if this is a span-grid query.
    #[must_use]
    pub fn span(&self) -> Option<GridSpan> {
        self.span
    }

    /// Number of grid columns, treating non-grid queries as one column.
    pub(crate) fn columns_or_one(&self) -> u32 {
        self.columns.unwrap_or(1)
    }
}
