// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing for grids whose cells may span several columns.
//!
//! Line membership cannot be derived from `position / columns` once cells
//! span, so these calculators classify items from their reported
//! [`GridSpan`](crate::GridSpan) instead:
//!
//! - an item is in the first line when `position <= span.index`, since no
//!   earlier row can have pushed it past row zero;
//! - an item is in the last line when
//!   `position + (columns - span.index - span.size) >= item_count - 1`, since
//!   too few items remain to start another row.
//!
//! Both are estimates. They are exact for the common layouts (full-width
//! headers, uniform cells) and err towards treating an item as interior.

use crate::calculator::InsetCalculator;
use crate::config::MarginConfig;
use crate::lines::{self, GridCell};
use crate::query::LayoutQuery;
use crate::types::Insets;

/// Even spacing between the cells of a span grid.
///
/// The cross axis uses the same fractional column distribution as
/// [`GridMargin`](crate::GridMargin), applied to the span's first column and
/// width. A query without a span is classified like a fixed grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSpanMargin;

impl InsetCalculator for GridSpanMargin {
    fn item_insets(&self, query: &LayoutQuery, config: &MarginConfig) -> Insets {
        lines::spread_insets(&GridCell::spanned(query), query, config)
    }
}

/// Spacing only around the outside of a span grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSpanBounds;

impl InsetCalculator for GridSpanBounds {
    fn item_insets(&self, query: &LayoutQuery, config: &MarginConfig) -> Insets {
        lines::bounds_insets(&GridCell::spanned(query), query, config)
    }
}
