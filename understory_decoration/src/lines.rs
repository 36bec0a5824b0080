// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row/column classification and margin distribution shared by all calculators.
//!
//! A linear list is treated as a grid with a single column, so the same
//! classification drives linear, grid and span-grid calculators.

use crate::config::{MarginConfig, Margins};
use crate::query::LayoutQuery;
use crate::types::{Insets, Orientation, Side};

bitflags::bitflags! {
    /// Where an item sits relative to the edges of its list or grid.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EdgeFlags: u8 {
        /// The item is in the first line (row for vertical grids).
        const FIRST_LINE   = 0b0000_0001;
        /// The item is in the last line.
        const LAST_LINE    = 0b0000_0010;
        /// The item touches the first column.
        const FIRST_COLUMN = 0b0000_0100;
        /// The item touches the last column.
        const LAST_COLUMN  = 0b0000_1000;
    }
}

/// Placement of an item inside its grid, as seen by the calculators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// First column occupied by the item.
    pub column: u32,
    /// Number of columns occupied by the item.
    pub span: u32,
    /// Number of columns in the grid.
    pub columns: u32,
    /// Edge classification.
    pub flags: EdgeFlags,
}

impl GridCell {
    /// Classifies an item of a linear list, which behaves as a single column.
    #[must_use]
    pub fn linear(query: &LayoutQuery) -> Self {
        Self::fixed_columns(query.position(), query.item_count(), 1)
    }

    /// Classifies an item of a grid with a fixed column count.
    ///
    /// The column is `position % columns`, the line is `position / columns`
    /// and there are `ceil(item_count / columns)` lines. A query without columns
    /// is treated as a single column.
    #[must_use]
    pub fn grid(query: &LayoutQuery) -> Self {
        Self::fixed_columns(query.position(), query.item_count(), query.columns_or_one())
    }

    /// Classifies an item of a grid whose cells may span several columns.
    ///
    /// Line membership is inferred from the span placement, since a fixed
    /// column arithmetic no longer applies. A query without a span falls back
    /// to [`GridCell::grid`].
    #[must_use]
    pub fn spanned(query: &LayoutQuery) -> Self {
        let Some(span) = query.span() else {
            return Self::grid(query);
        };
        let columns = query.columns_or_one();
        let position = query.position() as u64;
        let last = query.item_count() as u64 - 1;
        let index = u64::from(span.index);
        let trailing_columns = u64::from(columns) - index - u64::from(span.size);

        let mut flags = EdgeFlags::empty();
        // No earlier row can have pushed the item past row zero.
        if position <= index {
            flags |= EdgeFlags::FIRST_LINE;
        }
        // Not enough items remain to start another row after this one.
        if position + trailing_columns >= last {
            flags |= EdgeFlags::LAST_LINE;
        }
        Self::with_line_flags(span.index, span.size, columns, flags)
    }

    fn fixed_columns(position: usize, item_count: usize, columns: u32) -> Self {
        let per_line = columns as usize;
        let line = position / per_line;
        let lines = item_count.div_ceil(per_line);

        let mut flags = EdgeFlags::empty();
        if line == 0 {
            flags |= EdgeFlags::FIRST_LINE;
        }
        if line + 1 == lines {
            flags |= EdgeFlags::LAST_LINE;
        }
        // `position % columns < columns`, so it always fits.
        let column = u32::try_from(position % per_line).unwrap_or(columns - 1);
        Self::with_line_flags(column, 1, columns, flags)
    }

    fn with_line_flags(column: u32, span: u32, columns: u32, mut flags: EdgeFlags) -> Self {
        if column == 0 {
            flags |= EdgeFlags::FIRST_COLUMN;
        }
        if column + span >= columns {
            flags |= EdgeFlags::LAST_COLUMN;
        }
        Self {
            column,
            span,
            columns,
            flags,
        }
    }

    /// Returns `true` if the item is in the first line.
    #[must_use]
    pub fn is_first_line(&self) -> bool {
        self.flags.contains(EdgeFlags::FIRST_LINE)
    }

    /// Returns `true` if the item is in the last line.
    #[must_use]
    pub fn is_last_line(&self) -> bool {
        self.flags.contains(EdgeFlags::LAST_LINE)
    }
}

/// `margin * numerator / denominator`, truncated.
pub(crate) fn scale(margin: u32, numerator: u32, denominator: u32) -> u32 {
    debug_assert!(
        denominator > 0 && numerator <= denominator,
        "scale fraction must be within 0..=1"
    );
    let scaled = u64::from(margin) * u64::from(numerator) / u64::from(denominator.max(1));
    u32::try_from(scaled).unwrap_or(margin)
}

/// How edge and interior sides along the scroll axis are filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineRule {
    /// Interior sides get half the margin; edges follow the edge flags.
    Spread {
        add_before_first: bool,
        add_after_last: bool,
    },
    /// Only the outermost sides get a margin.
    Bounds,
}

/// Resolves which physical sides an item's spacing lands on.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SideMap {
    pub(crate) leading: Side,
    pub(crate) trailing: Side,
    pub(crate) cross_start: Side,
    pub(crate) cross_end: Side,
}

impl SideMap {
    pub(crate) fn new(orientation: Orientation, inverted: bool) -> Self {
        let (leading, trailing) = orientation.flow_sides(inverted);
        let (cross_start, cross_end) = orientation.cross_sides();
        Self {
            leading,
            trailing,
            cross_start,
            cross_end,
        }
    }

    pub(crate) fn for_query(query: &LayoutQuery) -> Self {
        Self::new(query.orientation(), query.is_inverted())
    }
}

/// Fills the scroll-axis sides of `insets` for a margin-style decoration.
fn apply_line_margins(
    insets: &mut Insets,
    cell: &GridCell,
    sides: SideMap,
    margins: &Margins,
    rule: LineRule,
) {
    let leading_margin = margins.side(sides.leading);
    let trailing_margin = margins.side(sides.trailing);
    let (leading, trailing) = match rule {
        LineRule::Spread {
            add_before_first,
            add_after_last,
        } => (
            if cell.is_first_line() {
                edge(add_before_first, leading_margin)
            } else {
                leading_margin / 2
            },
            if cell.is_last_line() {
                edge(add_after_last, trailing_margin)
            } else {
                trailing_margin / 2
            },
        ),
        LineRule::Bounds => (
            edge(cell.is_first_line(), leading_margin),
            edge(cell.is_last_line(), trailing_margin),
        ),
    };
    insets.set_side(sides.leading, leading);
    insets.set_side(sides.trailing, trailing);
}

/// Fills the cross-axis sides of `insets` for a margin-style decoration.
///
/// The start side gets `(columns - column) / columns` of its margin and the
/// end side `(column + span) / columns`, so the end of one column and the start
/// of the next add up to one margin and the outer columns get the full margin.
fn apply_column_margins(
    insets: &mut Insets,
    cell: &GridCell,
    sides: SideMap,
    margins: &Margins,
) {
    let start = scale(
        margins.side(sides.cross_start),
        cell.columns - cell.column,
        cell.columns,
    );
    let end = scale(
        margins.side(sides.cross_end),
        cell.column + cell.span,
        cell.columns,
    );
    insets.set_side(sides.cross_start, start);
    insets.set_side(sides.cross_end, end);
}

/// Fills the cross-axis sides of `insets` for a bounds decoration.
fn apply_column_bounds(
    insets: &mut Insets,
    cell: &GridCell,
    sides: SideMap,
    margins: &Margins,
) {
    let start = edge(
        cell.flags.contains(EdgeFlags::FIRST_COLUMN),
        margins.side(sides.cross_start),
    );
    let end = edge(
        cell.flags.contains(EdgeFlags::LAST_COLUMN),
        margins.side(sides.cross_end),
    );
    insets.set_side(sides.cross_start, start);
    insets.set_side(sides.cross_end, end);
}

/// Even spacing: column distribution across, half margins between lines.
pub(crate) fn spread_insets(
    cell: &GridCell,
    query: &LayoutQuery,
    config: &MarginConfig,
) -> Insets {
    let sides = SideMap::for_query(query);
    let mut insets = Insets::ZERO;
    apply_column_margins(&mut insets, cell, sides, &config.margins);
    apply_line_margins(
        &mut insets,
        cell,
        sides,
        &config.margins,
        LineRule::Spread {
            add_before_first: config.add_before_first,
            add_after_last: config.add_after_last,
        },
    );
    insets
}

/// Bounds spacing: only the outermost columns and lines get a margin.
pub(crate) fn bounds_insets(
    cell: &GridCell,
    query: &LayoutQuery,
    config: &MarginConfig,
) -> Insets {
    let sides = SideMap::for_query(query);
    let mut insets = Insets::ZERO;
    apply_column_bounds(&mut insets, cell, sides, &config.margins);
    apply_line_margins(&mut insets, cell, sides, &config.margins, LineRule::Bounds);
    insets
}

pub(crate) fn edge(apply: bool, margin: u32) -> u32 {
    if apply { margin } else { 0 }
}
