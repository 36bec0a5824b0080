// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing for grids with a fixed column count.

use crate::calculator::InsetCalculator;
use crate::config::MarginConfig;
use crate::lines::{self, GridCell};
use crate::query::LayoutQuery;
use crate::types::Insets;

/// Even spacing between the cells of a fixed-column grid.
///
/// Across the columns, the start side of column `k` gets
/// `(columns - k) / columns` of its margin and the end side `(k + 1) / columns`,
/// so two neighbouring columns add up to one margin and the outer columns get
/// the full margin on their outer side. Along the scroll axis, lines follow the
/// same first/interior/last rule as [`LinearMargin`](crate::LinearMargin).
///
/// Inversion swaps the line order only; column order never changes.
///
/// Queries without a column count are treated as a single column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridMargin;

impl InsetCalculator for GridMargin {
    fn item_insets(&self, query: &LayoutQuery, config: &MarginConfig) -> Insets {
        lines::spread_insets(&GridCell::grid(query), query, config)
    }
}

/// Spacing only around the outside of a fixed-column grid.
///
/// Cells in the first or last column get the cross-axis margin on their outer
/// side; cells in the first or last line get the scroll-axis margin on their
/// outer side. Everything else is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridBounds;

impl InsetCalculator for GridBounds {
    fn item_insets(&self, query: &LayoutQuery, config: &MarginConfig) -> Insets {
        lines::bounds_insets(&GridCell::grid(query), query, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;

    fn insets(
        calc: impl InsetCalculator,
        position: usize,
        count: usize,
        columns: u32,
        orientation: Orientation,
        inverted: bool,
        config: &MarginConfig,
    ) -> Insets {
        let query = LayoutQuery::new(position, count, orientation)
            .unwrap()
            .inverted(inverted)
            .with_columns(columns)
            .unwrap();
        calc.item_insets(&query, config)
    }

    #[test]
    fn last_line_item_in_first_column() {
        let config = MarginConfig::uniform(12);
        let got = insets(GridMargin, 6, 7, 3, Orientation::Vertical, false, &config);
        assert_eq!(got, Insets::new(12, 6, 4, 12));
    }

    #[test]
    fn neighbouring_columns_add_up_to_one_margin() {
        let config = MarginConfig::uniform(12);
        for k in 0..2 {
            let this = insets(GridMargin, k, 6, 3, Orientation::Vertical, false, &config);
            let next = insets(GridMargin, k + 1, 6, 3, Orientation::Vertical, false, &config);
            assert_eq!(this.right + next.left, 12, "columns {k} and {}", k + 1);
        }
    }

    #[test]
    fn outer_columns_get_full_margin() {
        let config = MarginConfig::uniform(12);
        let first = insets(GridMargin, 3, 9, 3, Orientation::Vertical, false, &config);
        let last = insets(GridMargin, 5, 9, 3, Orientation::Vertical, false, &config);
        assert_eq!(first.left, 12);
        assert_eq!(last.right, 12);
    }

    #[test]
    fn single_line_grid_gets_both_edges() {
        let config = MarginConfig::vertical(10);
        let got = insets(GridMargin, 1, 2, 3, Orientation::Vertical, false, &config);
        assert_eq!((got.top, got.bottom), (10, 10));
    }

    #[test]
    fn inversion_swaps_lines_but_not_columns() {
        let config = MarginConfig::uniform(12);
        let normal = insets(GridMargin, 0, 6, 3, Orientation::Vertical, false, &config);
        let inverted = insets(GridMargin, 0, 6, 3, Orientation::Vertical, true, &config);
        assert_eq!((normal.left, normal.right), (inverted.left, inverted.right));
        assert_eq!((normal.top, normal.bottom), (12, 6));
        assert_eq!((inverted.top, inverted.bottom), (6, 12));
    }

    #[test]
    fn horizontal_grid_distributes_columns_vertically() {
        let config = MarginConfig::uniform(8);
        // Column 1 of 2, line 1 of 2.
        let got = insets(GridMargin, 3, 4, 2, Orientation::Horizontal, false, &config);
        assert_eq!(got, Insets::new(4, 4, 8, 8));
    }

    #[test]
    fn bounds_only_touch_the_outside() {
        let config = MarginConfig::uniform(5);
        let v = Orientation::Vertical;
        // 3x3 grid.
        assert_eq!(
            insets(GridBounds, 0, 9, 3, v, false, &config),
            Insets::new(5, 5, 0, 0)
        );
        assert_eq!(
            insets(GridBounds, 4, 9, 3, v, false, &config),
            Insets::ZERO
        );
        assert_eq!(
            insets(GridBounds, 8, 9, 3, v, false, &config),
            Insets::new(0, 0, 5, 5)
        );
        assert_eq!(
            insets(GridBounds, 8, 9, 3, v, true, &config),
            Insets::new(0, 5, 5, 0)
        );
    }
}
