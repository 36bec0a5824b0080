// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The traits shared by every inset and divider calculator.

use kurbo::Rect;
use smallvec::SmallVec;

use crate::config::MarginConfig;
use crate::query::LayoutQuery;
use crate::types::Insets;

/// Divider strokes to fill for one item, in canvas coordinates.
///
/// An item paints at most one stroke per side, so this never allocates.
pub type DrawRects = SmallVec<[Rect; 4]>;

/// Computes the space reserved around an item.
///
/// Implementations are pure: the result depends only on the query and the
/// configuration.
pub trait InsetCalculator {
    /// Returns the insets for the item described by `query`.
    fn item_insets(&self, query: &LayoutQuery, config: &MarginConfig) -> Insets;
}

/// An [`InsetCalculator`] that also paints divider strokes inside the space it
/// reserves.
pub trait DividerCalculator: InsetCalculator {
    /// Returns the strokes the item described by `query` paints.
    ///
    /// `decorated` is the item's bounding box including the insets this
    /// calculator reserved for the same query. `accept` is asked about the item
    /// on the far side of each stroke between two items; the stroke is drawn
    /// only when it returns `true`.
    fn draw_rects(
        &self,
        query: &LayoutQuery,
        config: &MarginConfig,
        decorated: Rect,
        accept: impl Fn(usize) -> bool,
    ) -> DrawRects;
}
