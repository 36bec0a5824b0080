// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_decoration --heading-base-level=0

//! Understory Decoration: spacing and divider geometry for item lists.
//!
//! This crate computes, for one item of a scrolling list or grid, how much
//! space to reserve on each of its four sides ([`Insets`]) and, for divider
//! decorations, which rectangles to fill between items ([`DrawRects`]). It does
//! not measure, lay out or paint anything itself: the host list widget asks for
//! insets while it lays out each item and for draw rectangles while it paints.
//!
//! There are two layers:
//!
//! - **Calculators** are stateless, pure functions of a validated
//!   [`LayoutQuery`] and a [`MarginConfig`]. Each implements
//!   [`InsetCalculator`], and divider calculators also implement
//!   [`DividerCalculator`]:
//!   - [`LinearMargin`] / [`LinearBounds`] for single-column or single-row lists.
//!   - [`GridMargin`] / [`GridBounds`] for grids with a fixed column count.
//!   - [`GridSpanMargin`] / [`GridSpanBounds`] for grids whose cells span columns.
//!   - [`LinearDivider`] / [`GridDivider`] for divider strokes.
//! - [`Decoration`] is what a host keeps around: a calculator kind, its
//!   configuration, an optional [`ColumnProvider`] and [`DecorationFilter`],
//!   and a revision counter. It reads the host's layout through
//!   [`LayoutMetadata`] and treats missing or filtered items as undecorated.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_decoration::{Insets, LayoutQuery, LinearMargin, InsetCalculator, MarginConfig, Orientation};
//!
//! // 16 units between items and above the first one, nothing below the last.
//! let config = MarginConfig::vertical(16).with_after_last(false);
//!
//! let first = LayoutQuery::new(0, 3, Orientation::Vertical).unwrap();
//! let last = LayoutQuery::new(2, 3, Orientation::Vertical).unwrap();
//! assert_eq!(LinearMargin.item_insets(&first, &config), Insets::new(0, 16, 0, 8));
//! assert_eq!(LinearMargin.item_insets(&last, &config), Insets::new(0, 8, 0, 0));
//! ```
//!
//! ## Driving a decoration from a host
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_decoration::{
//!     Decoration, DividerStyle, LayoutMetadata, MarginConfig, Orientation, SkipSingleItem,
//! };
//!
//! struct Grid {
//!     items: usize,
//! }
//!
//! impl LayoutMetadata for Grid {
//!     fn item_count(&self) -> usize {
//!         self.items
//!     }
//!     fn orientation(&self) -> Orientation {
//!         Orientation::Vertical
//!     }
//!     fn reverse_layout(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let mut decoration =
//!     Decoration::grid_divider(MarginConfig::divider(DividerStyle::new(2)), 3_u32)
//!         .with_filter(SkipSingleItem);
//! let grid = Grid { items: 6 };
//!
//! // Layout pass: the first cell takes its share of the column gaps the same
//! // way a grid margin does, and half of the gap below it.
//! let insets = decoration.item_insets(&grid, Some(0)).unwrap();
//! assert_eq!((insets.left, insets.right, insets.bottom), (2, 0, 1));
//!
//! // Paint pass: one stroke below and one to the right.
//! let rects = decoration
//!     .draw_rects(&grid, Some(0), Rect::new(0.0, 0.0, 52.0, 51.0))
//!     .unwrap();
//! assert_eq!(rects.len(), 2);
//!
//! // Configuration changes bump the revision so the host knows to relayout.
//! decoration.update_config(|config| config.divider.width_margin = 4);
//! assert_eq!(decoration.revision(), 1);
//! ```
//!
//! All arithmetic is integer and truncating. Margins are configured per
//! physical side, so in an inverted vertical list the first item's leading
//! side is its bottom and uses the bottom margin.
//!
//! This crate is `no_std` and uses `alloc`. Diagnostic events are emitted
//! through `tracing`; no subscriber is installed.

#![no_std]

extern crate alloc;

mod calculator;
mod columns;
mod config;
mod decoration;
mod divider;
mod error;
mod filter;
mod grid;
mod grid_span;
mod linear;
mod lines;
mod query;
mod types;

pub use calculator::{DividerCalculator, DrawRects, InsetCalculator};
pub use columns::ColumnProvider;
pub use config::{DividerStyle, MarginConfig, Margins};
pub use decoration::{Decoration, DecorationKind, LayoutMetadata};
pub use divider::{GridDivider, LinearDivider, next_column_neighbor, next_line_neighbor};
pub use error::DecorationError;
pub use filter::{AlwaysApply, DecorationFilter, MergeFilter, SkipSingleItem};
pub use grid::{GridBounds, GridMargin};
pub use grid_span::{GridSpanBounds, GridSpanMargin};
pub use linear::{LinearBounds, LinearMargin};
pub use lines::{EdgeFlags, GridCell};
pub use query::LayoutQuery;
pub use types::{GridSpan, Insets, Item, ItemKind, Orientation, Side};
