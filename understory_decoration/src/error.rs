// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported for inconsistent layout queries and configuration.

use core::fmt;

/// Error returned when a layout query or a decoration's configuration is
/// inconsistent.
///
/// Apart from [`DecorationError::PositionOutOfRange`], these are integration
/// errors on the host side: they are reported eagerly instead of producing a
/// misleading partial layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorationError {
    /// The query described a list with no items.
    EmptyList,
    /// The position is not inside `0..item_count`.
    ///
    /// [`Decoration`](crate::Decoration) treats this as "not currently laid out"
    /// and never returns it.
    PositionOutOfRange {
        /// Offending position.
        position: usize,
        /// Item count at the time of the query.
        item_count: usize,
    },
    /// A grid was configured with zero columns.
    ZeroColumns,
    /// An item reported a span covering zero columns.
    ZeroSpan {
        /// Position of the item.
        position: usize,
    },
    /// An item's span does not fit inside the grid.
    SpanOutOfBounds {
        /// Position of the item.
        position: usize,
        /// First column of the span.
        index: u32,
        /// Number of columns covered by the span.
        size: u32,
        /// Number of columns in the grid.
        columns: u32,
    },
    /// A span was supplied for a query that has no column count.
    SpanWithoutColumns,
    /// A grid decoration could not determine its column count.
    MissingColumns,
}

impl fmt::Display for DecorationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyList => f.write_str("layout query for an empty list"),
            Self::PositionOutOfRange {
                position,
                item_count,
            } => write!(
                f,
                "position {position} is outside a list of {item_count} items"
            ),
            Self::ZeroColumns => f.write_str("grid has zero columns"),
            Self::ZeroSpan { position } => {
                write!(f, "item at position {position} spans zero columns")
            }
            Self::SpanOutOfBounds {
                position,
                index,
                size,
                columns,
            } => write!(
                f,
                "item at position {position} spans columns {index}..{} of a {columns}-column grid",
                u64::from(*index) + u64::from(*size)
            ),
            Self::SpanWithoutColumns => f.write_str("span supplied without a column count"),
            Self::MissingColumns => f.write_str("grid decoration has no column count"),
        }
    }
}

impl core::error::Error for DecorationError {}
