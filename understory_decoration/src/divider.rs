// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Divider strokes for lists and fixed-column grids.
//!
//! A divider reserves `size + 2 * width_margin` between two neighbouring items
//! and paints a `size`-thick stroke centred in that gap. The leading side of an
//! item gets the floor of half the gap and the trailing side the ceiling, so
//! the two halves always add up to the full gap.
//!
//! The outer edges of the list reserve `size + width_margin` only when the
//! matching edge flag of [`MarginConfig`] is set; the stroke is then drawn
//! flush with the decorated bounds. Otherwise the edge reserves nothing.
//!
//! Strokes between items are drawn by the item on the physical start side of
//! the pair: the upper item for vertical layouts and the left item for
//! horizontal ones, whether or not the layout is inverted.

use kurbo::Rect;

use crate::calculator::{DividerCalculator, DrawRects, InsetCalculator};
use crate::config::{DividerStyle, MarginConfig};
use crate::lines::{self, GridCell, SideMap};
use crate::query::LayoutQuery;
use crate::types::{Insets, Side};

/// Dividers between the items of a linear list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinearDivider;

impl InsetCalculator for LinearDivider {
    fn item_insets(&self, query: &LayoutQuery, config: &MarginConfig) -> Insets {
        divider_insets(&GridCell::linear(query), query, config, false)
    }
}

impl DividerCalculator for LinearDivider {
    fn draw_rects(
        &self,
        query: &LayoutQuery,
        config: &MarginConfig,
        decorated: Rect,
        accept: impl Fn(usize) -> bool,
    ) -> DrawRects {
        divider_rects(&GridCell::linear(query), query, config, false, decorated, accept)
    }
}

/// Dividers between the lines and columns of a fixed-column grid.
///
/// Column gaps are distributed the same way [`GridMargin`](crate::GridMargin)
/// distributes its margin: column `k` gets `gap * (columns - k) / columns` on its
/// start side and `gap * (k + 1) / columns` on its end side, so the outer
/// columns reserve the full gap on their outer side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridDivider;

impl InsetCalculator for GridDivider {
    fn item_insets(&self, query: &LayoutQuery, config: &MarginConfig) -> Insets {
        divider_insets(&GridCell::grid(query), query, config, true)
    }
}

impl DividerCalculator for GridDivider {
    fn draw_rects(
        &self,
        query: &LayoutQuery,
        config: &MarginConfig,
        decorated: Rect,
        accept: impl Fn(usize) -> bool,
    ) -> DrawRects {
        divider_rects(&GridCell::grid(query), query, config, true, decorated, accept)
    }
}

/// Returns the item on the physical end side of `position` along the scroll
/// axis, if any.
///
/// That is `position + columns`, or `position - columns` when the layout is
/// inverted, provided it is inside the list.
///
/// ```rust
/// use understory_decoration::next_line_neighbor;
///
/// assert_eq!(next_line_neighbor(3, 3, 7, false), Some(6));
/// assert_eq!(next_line_neighbor(4, 3, 7, false), None);
/// assert_eq!(next_line_neighbor(4, 3, 7, true), Some(1));
/// ```
#[must_use]
pub fn next_line_neighbor(
    position: usize,
    columns: u32,
    item_count: usize,
    inverted: bool,
) -> Option<usize> {
    let columns = columns.max(1) as usize;
    let neighbor = if inverted {
        position.checked_sub(columns)?
    } else {
        position.checked_add(columns)?
    };
    (neighbor < item_count).then_some(neighbor)
}

/// Returns the item in the next column of the same line, if any.
///
/// Items in the last column have no such neighbour, nor does the last item of
/// an incomplete line.
#[must_use]
pub fn next_column_neighbor(position: usize, columns: u32, item_count: usize) -> Option<usize> {
    let columns = columns.max(1) as usize;
    if position % columns == columns - 1 {
        return None;
    }
    let neighbor = position + 1;
    (neighbor < item_count).then_some(neighbor)
}

fn divider_insets(
    cell: &GridCell,
    query: &LayoutQuery,
    config: &MarginConfig,
    split_columns: bool,
) -> Insets {
    let style = &config.divider;
    let sides = SideMap::for_query(query);
    let gap = style.gap();

    let leading = if cell.is_first_line() {
        lines::edge(config.add_before_first, style.edge())
    } else {
        gap / 2
    };
    let trailing = if cell.is_last_line() {
        lines::edge(config.add_after_last, style.edge())
    } else {
        gap - gap / 2
    };
    // Lists have no column gaps.
    let (cross_start, cross_end) = if split_columns {
        (
            lines::scale(gap, cell.columns - cell.column, cell.columns),
            lines::scale(gap, cell.column + cell.span, cell.columns),
        )
    } else {
        (0, 0)
    };

    let mut insets = Insets::ZERO;
    insets.set_side(sides.leading, leading);
    insets.set_side(sides.trailing, trailing);
    insets.set_side(sides.cross_start, cross_start);
    insets.set_side(sides.cross_end, cross_end);
    insets
}

fn divider_rects(
    cell: &GridCell,
    query: &LayoutQuery,
    config: &MarginConfig,
    split_columns: bool,
    decorated: Rect,
    accept: impl Fn(usize) -> bool,
) -> DrawRects {
    let style = &config.divider;
    let mut rects = DrawRects::new();
    if style.size == 0 {
        return rects;
    }

    let item = divider_insets(cell, query, config, split_columns).shrink(decorated);
    let sides = SideMap::for_query(query);
    let mut push = |side| {
        let rect = stroke(item, side, style);
        if rect.width() > 0.0 && rect.height() > 0.0 {
            rects.push(rect);
        }
    };

    if cell.is_first_line() && config.add_before_first {
        push(sides.leading);
    }
    if cell.is_last_line() && config.add_after_last {
        push(sides.trailing);
    }

    let (_, line_end) = query.orientation().main_sides();
    let line_neighbor = next_line_neighbor(
        query.position(),
        cell.columns,
        query.item_count(),
        query.is_inverted(),
    );
    if line_neighbor.is_some_and(&accept) {
        push(line_end);
    }

    let (_, column_end) = query.orientation().cross_sides();
    let column_neighbor = next_column_neighbor(query.position(), cell.columns, query.item_count());
    if column_neighbor.is_some_and(&accept) {
        push(column_end);
    }

    rects
}

/// A stroke `width_margin` away from `item` on `side`, shortened by
/// `height_margin` at both ends.
fn stroke(item: Rect, side: Side, style: &DividerStyle) -> Rect {
    let size = f64::from(style.size);
    let offset = f64::from(style.width_margin);
    let trim = f64::from(style.height_margin);
    match side {
        Side::Top => Rect::new(
            item.x0 + trim,
            item.y0 - offset - size,
            item.x1 - trim,
            item.y0 - offset,
        ),
        Side::Bottom => Rect::new(
            item.x0 + trim,
            item.y1 + offset,
            item.x1 - trim,
            item.y1 + offset + size,
        ),
        Side::Left => Rect::new(
            item.x0 - offset - size,
            item.y0 + trim,
            item.x0 - offset,
            item.y1 - trim,
        ),
        Side::Right => Rect::new(
            item.x1 + offset,
            item.y0 + trim,
            item.x1 + offset + size,
            item.y1 - trim,
        ),
    }
}
