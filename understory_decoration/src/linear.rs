// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing for single-column and single-row lists.

use crate::calculator::InsetCalculator;
use crate::config::MarginConfig;
use crate::lines::{self, GridCell};
use crate::query::LayoutQuery;
use crate::types::Insets;

/// Even spacing between items of a linear list.
///
/// Along the scroll axis, interior items get half of the configured margin on
/// each side so two neighbours add up to one margin. The first item's leading
/// side and the last item's trailing side get the full margin when
/// [`MarginConfig::add_before_first`] / [`MarginConfig::add_after_last`] are
/// set, and nothing otherwise. Cross-axis sides always get their full margin.
///
/// Margins are read per physical side: in an inverted vertical list the first
/// item's leading side is its bottom, so it uses the bottom margin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinearMargin;

impl InsetCalculator for LinearMargin {
    fn item_insets(&self, query: &LayoutQuery, config: &MarginConfig) -> Insets {
        lines::spread_insets(&GridCell::linear(query), query, config)
    }
}

/// Spacing only at the two ends of a linear list.
///
/// The first item's leading side and the last item's trailing side get their
/// margin; interior items get nothing along the scroll axis. The edge flags of
/// [`MarginConfig`] are ignored. Cross-axis sides always get their full margin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinearBounds;

impl InsetCalculator for LinearBounds {
    fn item_insets(&self, query: &LayoutQuery, config: &MarginConfig) -> Insets {
        lines::bounds_insets(&GridCell::linear(query), query, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Margins;
    use crate::types::Orientation;

    fn insets(
        calc: impl InsetCalculator,
        position: usize,
        count: usize,
        orientation: Orientation,
        inverted: bool,
        config: &MarginConfig,
    ) -> Insets {
        let query = LayoutQuery::new(position, count, orientation)
            .unwrap()
            .inverted(inverted);
        calc.item_insets(&query, config)
    }

    #[test]
    fn vertical_list_with_leading_edge_only() {
        let config = MarginConfig::vertical(16).with_after_last(false);
        let v = Orientation::Vertical;
        assert_eq!(
            insets(LinearMargin, 0, 3, v, false, &config),
            Insets::new(0, 16, 0, 8)
        );
        assert_eq!(
            insets(LinearMargin, 1, 3, v, false, &config),
            Insets::new(0, 8, 0, 8)
        );
        assert_eq!(
            insets(LinearMargin, 2, 3, v, false, &config),
            Insets::new(0, 8, 0, 0)
        );
    }

    #[test]
    fn cross_axis_gets_full_margin() {
        let config = MarginConfig::uniform(10);
        let got = insets(LinearMargin, 1, 3, Orientation::Horizontal, false, &config);
        assert_eq!(got, Insets::new(5, 10, 5, 10));
    }

    #[test]
    fn single_item_gets_both_edges() {
        let config = MarginConfig::vertical(9);
        let got = insets(LinearMargin, 0, 1, Orientation::Vertical, false, &config);
        assert_eq!(got, Insets::new(0, 9, 0, 9));
    }

    #[test]
    fn odd_margin_halves_truncate_for_interior_sides() {
        let config = MarginConfig::vertical(7);
        let first = insets(LinearMargin, 0, 3, Orientation::Vertical, false, &config);
        let middle = insets(LinearMargin, 1, 3, Orientation::Vertical, false, &config);
        assert_eq!(first, Insets::new(0, 7, 0, 3));
        assert_eq!(middle, Insets::new(0, 3, 0, 3));
    }

    #[test]
    fn inverted_horizontal_uses_physical_side_margins() {
        let config = MarginConfig::sides(Margins::new(2, 0, 6, 0));
        let first = insets(LinearMargin, 0, 3, Orientation::Horizontal, true, &config);
        // Leading side is the right side when inverted.
        assert_eq!(first, Insets::new(1, 0, 6, 0));
        let last = insets(LinearMargin, 2, 3, Orientation::Horizontal, true, &config);
        assert_eq!(last, Insets::new(2, 0, 3, 0));
    }

    #[test]
    fn bounds_only_reserve_list_ends() {
        let config = MarginConfig::uniform(4).with_before_first(false);
        let v = Orientation::Vertical;
        assert_eq!(
            insets(LinearBounds, 0, 3, v, false, &config),
            Insets::new(4, 4, 4, 0)
        );
        assert_eq!(
            insets(LinearBounds, 1, 3, v, false, &config),
            Insets::new(4, 0, 4, 0)
        );
        assert_eq!(
            insets(LinearBounds, 2, 3, v, true, &config),
            Insets::new(4, 4, 4, 0)
        );
    }
}
