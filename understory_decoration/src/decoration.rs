// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing decoration: configuration, gating and dispatch to calculators.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::calculator::{DividerCalculator, DrawRects, InsetCalculator};
use crate::columns::ColumnProvider;
use crate::config::MarginConfig;
use crate::divider::{GridDivider, LinearDivider};
use crate::error::DecorationError;
use crate::filter::DecorationFilter;
use crate::grid::{GridBounds, GridMargin};
use crate::grid_span::{GridSpanBounds, GridSpanMargin};
use crate::linear::{LinearBounds, LinearMargin};
use crate::query::LayoutQuery;
use crate::types::{GridSpan, Insets, Item, ItemKind, Orientation};

/// What a decoration needs to know about the host's list layout.
///
/// The host implements this once for its list widget. Only the first three
/// methods are required; grid decorations additionally need a column count,
/// either from here or from a [`ColumnProvider`], and span-grid decorations
/// need per-item [`GridSpan`]s.
pub trait LayoutMetadata {
    /// Number of items in the list.
    fn item_count(&self) -> usize;

    /// Scroll orientation of the layout.
    fn orientation(&self) -> Orientation;

    /// Whether the layout places later positions before earlier ones.
    fn reverse_layout(&self) -> bool;

    /// Number of grid columns, if the layout is a grid.
    fn column_count(&self) -> Option<u32> {
        None
    }

    /// Column placement of the item at `position`, for span grids.
    fn span(&self, position: usize) -> Option<GridSpan> {
        let _ = position;
        None
    }

    /// Host-defined kind of the item at `position`.
    fn item_kind(&self, position: usize) -> ItemKind {
        let _ = position;
        ItemKind::default()
    }

    /// Whether the item at `position` currently has bounds in the layout.
    ///
    /// Divider strokes are only drawn towards neighbours that are laid out.
    fn is_laid_out(&self, position: usize) -> bool {
        position < self.item_count()
    }
}

/// Which calculator a [`Decoration`] dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// [`LinearMargin`].
    LinearMargin,
    /// [`LinearBounds`].
    LinearBounds,
    /// [`LinearDivider`].
    LinearDivider,
    /// [`GridMargin`].
    GridMargin,
    /// [`GridBounds`].
    GridBounds,
    /// [`GridDivider`].
    GridDivider,
    /// [`GridSpanMargin`].
    GridSpanMargin,
    /// [`GridSpanBounds`].
    GridSpanBounds,
}

impl DecorationKind {
    /// Returns `true` if the calculator needs a column count.
    #[must_use]
    pub const fn needs_columns(self) -> bool {
        !matches!(
            self,
            Self::LinearMargin | Self::LinearBounds | Self::LinearDivider
        )
    }

    /// Returns `true` if the calculator reads per-item spans.
    #[must_use]
    pub const fn uses_spans(self) -> bool {
        matches!(self, Self::GridSpanMargin | Self::GridSpanBounds)
    }

    /// Returns `true` if the calculator paints divider strokes.
    #[must_use]
    pub const fn is_divider(self) -> bool {
        matches!(self, Self::LinearDivider | Self::GridDivider)
    }

    fn item_insets(self, query: &LayoutQuery, config: &MarginConfig) -> Insets {
        match self {
            Self::LinearMargin => LinearMargin.item_insets(query, config),
            Self::LinearBounds => LinearBounds.item_insets(query, config),
            Self::LinearDivider => LinearDivider.item_insets(query, config),
            Self::GridMargin => GridMargin.item_insets(query, config),
            Self::GridBounds => GridBounds.item_insets(query, config),
            Self::GridDivider => GridDivider.item_insets(query, config),
            Self::GridSpanMargin => GridSpanMargin.item_insets(query, config),
            Self::GridSpanBounds => GridSpanBounds.item_insets(query, config),
        }
    }

    fn draw_rects(
        self,
        query: &LayoutQuery,
        config: &MarginConfig,
        decorated: Rect,
        accept: impl Fn(usize) -> bool,
    ) -> DrawRects {
        match self {
            Self::LinearDivider => LinearDivider.draw_rects(query, config, decorated, accept),
            Self::GridDivider => GridDivider.draw_rects(query, config, decorated, accept),
            _ => DrawRects::new(),
        }
    }
}

/// A configured item decoration attached to one host list.
///
/// The host calls [`Decoration::item_insets`] for every item it lays out and,
/// for divider kinds, [`Decoration::draw_rects`] or [`Decoration::draw_pass`]
/// when it paints. Items without a valid position, items rejected by the
/// filter, and span-grid items without span data are left undecorated.
///
/// Configuration changes go through the `set_*`/`update_*` methods, which bump
/// [`Decoration::revision`] when something actually changed. Hosts compare
/// revisions to decide whether a new layout pass is needed.
///
/// Linear and fixed-grid kinds use the decoration's own orientation and
/// inversion. Span-grid kinds read both from the [`LayoutMetadata`].
pub struct Decoration {
    kind: DecorationKind,
    config: MarginConfig,
    orientation: Orientation,
    inverted: bool,
    columns: Option<Box<dyn ColumnProvider>>,
    filter: Option<Box<dyn DecorationFilter>>,
    revision: u64,
}

impl fmt::Debug for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoration")
            .field("kind", &self.kind)
            .field("config", &self.config)
            .field("orientation", &self.orientation)
            .field("inverted", &self.inverted)
            .field("columns", &self.columns.as_ref().map(|c| c.column_count()))
            .field("filter", &self.filter.is_some())
            .field("revision", &self.revision)
            .finish()
    }
}

impl Decoration {
    /// Creates a vertical, non-inverted decoration of `kind`.
    #[must_use]
    pub fn new(kind: DecorationKind, config: MarginConfig) -> Self {
        Self {
            kind,
            config,
            orientation: Orientation::Vertical,
            inverted: false,
            columns: None,
            filter: None,
            revision: 0,
        }
    }

    /// Even spacing between the items of a list.
    #[must_use]
    pub fn linear_margin(config: MarginConfig) -> Self {
        Self::new(DecorationKind::LinearMargin, config)
    }

    /// Spacing only at the two ends of a list.
    #[must_use]
    pub fn linear_bounds(config: MarginConfig) -> Self {
        Self::new(DecorationKind::LinearBounds, config)
    }

    /// Dividers between the items of a list.
    #[must_use]
    pub fn linear_divider(config: MarginConfig) -> Self {
        Self::new(DecorationKind::LinearDivider, config)
    }

    /// Even spacing between the cells of a fixed-column grid.
    ///
    /// `columns` is read again on every query, so a count of zero is not
    /// rejected here. Each query made while it reports zero fails with
    /// [`DecorationError::ZeroColumns`].
    #[must_use]
    pub fn grid_margin(config: MarginConfig, columns: impl ColumnProvider + 'static) -> Self {
        Self::new(DecorationKind::GridMargin, config).with_columns(columns)
    }

    /// Spacing only around the outside of a fixed-column grid.
    ///
    /// A zero column count surfaces per query, as for [`Self::grid_margin`].
    #[must_use]
    pub fn grid_bounds(config: MarginConfig, columns: impl ColumnProvider + 'static) -> Self {
        Self::new(DecorationKind::GridBounds, config).with_columns(columns)
    }

    /// Dividers between the lines and columns of a fixed-column grid.
    ///
    /// A zero column count surfaces per query, as for [`Self::grid_margin`].
    #[must_use]
    pub fn grid_divider(config: MarginConfig, columns: impl ColumnProvider + 'static) -> Self {
        Self::new(DecorationKind::GridDivider, config).with_columns(columns)
    }

    /// Even spacing between the cells of a span grid.
    ///
    /// The column count is read from [`LayoutMetadata::column_count`] unless a
    /// provider is set.
    #[must_use]
    pub fn grid_span_margin(config: MarginConfig) -> Self {
        Self::new(DecorationKind::GridSpanMargin, config)
    }

    /// Spacing only around the outside of a span grid.
    #[must_use]
    pub fn grid_span_bounds(config: MarginConfig) -> Self {
        Self::new(DecorationKind::GridSpanBounds, config)
    }

    /// Sets the orientation while building.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the inversion while building.
    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Sets the column provider while building.
    #[must_use]
    pub fn with_columns(mut self, columns: impl ColumnProvider + 'static) -> Self {
        self.columns = Some(Box::new(columns));
        self
    }

    /// Sets the filter while building.
    #[must_use]
    pub fn with_filter(mut self, filter: impl DecorationFilter + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// The calculator this decoration dispatches to.
    #[must_use]
    pub fn kind(&self) -> DecorationKind {
        self.kind
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &MarginConfig {
        &self.config
    }

    /// The decoration's own orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The decoration's own inversion flag.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Returns the current revision counter.
    ///
    /// The counter starts at zero and is bumped by every mutation that changes
    /// the decoration's output. No-op updates leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Edits the configuration in place.
    pub fn update_config(&mut self, update: impl FnOnce(&mut MarginConfig)) {
        let before = self.config;
        update(&mut self.config);
        if self.config != before {
            self.bump_revision();
        }
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: MarginConfig) {
        self.update_config(|current| *current = config);
    }

    /// Sets the orientation used by linear and fixed-grid kinds.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.bump_revision();
        }
    }

    /// Sets the inversion used by linear and fixed-grid kinds.
    pub fn set_inverted(&mut self, inverted: bool) {
        if self.inverted != inverted {
            self.inverted = inverted;
            self.bump_revision();
        }
    }

    /// Replaces the column provider.
    pub fn set_columns(&mut self, columns: impl ColumnProvider + 'static) {
        self.columns = Some(Box::new(columns));
        self.bump_revision();
    }

    /// Removes the column provider, falling back to the layout's column count.
    pub fn clear_columns(&mut self) {
        if self.columns.take().is_some() {
            self.bump_revision();
        }
    }

    /// Replaces the filter.
    pub fn set_filter(&mut self, filter: impl DecorationFilter + 'static) {
        self.filter = Some(Box::new(filter));
        self.bump_revision();
    }

    /// Removes the filter so every item is decorated.
    pub fn clear_filter(&mut self) {
        if self.filter.take().is_some() {
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(revision = self.revision, kind = ?self.kind, "decoration changed");
    }

    /// Returns the space to reserve around the item at `position`.
    ///
    /// `None`, positions outside the list, filtered items and span-grid items
    /// without a span all get [`Insets::ZERO`].
    ///
    /// # Errors
    ///
    /// Returns an error when the decoration and the layout disagree: a grid
    /// kind without any column count, zero columns, or a span that does not fit
    /// in the grid.
    pub fn item_insets<L>(
        &self,
        layout: &L,
        position: Option<usize>,
    ) -> Result<Insets, DecorationError>
    where
        L: LayoutMetadata + ?Sized,
    {
        let Some(query) = self.query(layout, position)? else {
            return Ok(Insets::ZERO);
        };
        Ok(self.kind.item_insets(&query, &self.config))
    }

    /// Returns the divider strokes the item at `position` paints.
    ///
    /// `decorated` is the item's bounds including the insets returned by
    /// [`Decoration::item_insets`]. Strokes towards a neighbour are drawn only
    /// when that neighbour is laid out and accepted by the filter. Non-divider
    /// kinds never paint.
    ///
    /// # Errors
    ///
    /// Same as [`Decoration::item_insets`].
    pub fn draw_rects<L>(
        &self,
        layout: &L,
        position: Option<usize>,
        decorated: Rect,
    ) -> Result<DrawRects, DecorationError>
    where
        L: LayoutMetadata + ?Sized,
    {
        if !self.kind.is_divider() {
            return Ok(DrawRects::new());
        }
        let Some(query) = self.query(layout, position)? else {
            return Ok(DrawRects::new());
        };
        let accept = |neighbor: usize| {
            layout.is_laid_out(neighbor) && self.accepts(layout, neighbor, query.item_count())
        };
        Ok(self
            .kind
            .draw_rects(&query, &self.config, decorated, accept))
    }

    /// Collects the divider strokes of every visible item.
    ///
    /// `items` yields each visible item's position and decorated bounds, in any
    /// order.
    ///
    /// # Errors
    ///
    /// Stops at the first item for which [`Decoration::draw_rects`] fails.
    pub fn draw_pass<L>(
        &self,
        layout: &L,
        items: impl IntoIterator<Item = (usize, Rect)>,
    ) -> Result<Vec<Rect>, DecorationError>
    where
        L: LayoutMetadata + ?Sized,
    {
        let mut rects = Vec::new();
        if !self.kind.is_divider() {
            return Ok(rects);
        }
        for (position, decorated) in items {
            rects.extend(self.draw_rects(layout, Some(position), decorated)?);
        }
        Ok(rects)
    }

    fn accepts<L>(&self, layout: &L, position: usize, item_count: usize) -> bool
    where
        L: LayoutMetadata + ?Sized,
    {
        self.filter.as_ref().is_none_or(|filter| {
            filter.should_apply(
                &Item::with_kind(position, layout.item_kind(position)),
                item_count,
            )
        })
    }

    /// Builds the query for `position`, or `None` if the item is undecorated.
    fn query<L>(
        &self,
        layout: &L,
        position: Option<usize>,
    ) -> Result<Option<LayoutQuery>, DecorationError>
    where
        L: LayoutMetadata + ?Sized,
    {
        let Some(position) = position else {
            tracing::trace!("skipping item without a position");
            return Ok(None);
        };
        let item_count = layout.item_count();
        if position >= item_count {
            tracing::trace!(position, item_count, "skipping item outside the list");
            return Ok(None);
        }
        if !self.accepts(layout, position, item_count) {
            tracing::trace!(position, "skipping filtered item");
            return Ok(None);
        }

        let (orientation, inverted) = if self.kind.uses_spans() {
            (layout.orientation(), layout.reverse_layout())
        } else {
            (self.orientation, self.inverted)
        };
        let query = self
            .validated_query(layout, position, item_count, orientation, inverted)
            .inspect_err(|err| tracing::debug!(position, %err, "decoration misconfigured"))?;
        if query.is_none() {
            tracing::trace!(position, "skipping span item without span data");
        }
        Ok(query)
    }

    fn validated_query<L>(
        &self,
        layout: &L,
        position: usize,
        item_count: usize,
        orientation: Orientation,
        inverted: bool,
    ) -> Result<Option<LayoutQuery>, DecorationError>
    where
        L: LayoutMetadata + ?Sized,
    {
        let mut query = LayoutQuery::new(position, item_count, orientation)?.inverted(inverted);
        if self.kind.needs_columns() {
            query = query.with_columns(self.column_count(layout)?)?;
        }
        if self.kind.uses_spans() {
            let Some(span) = layout.span(position) else {
                return Ok(None);
            };
            query = query.with_span(span)?;
        }
        Ok(Some(query))
    }

    fn column_count<L>(&self, layout: &L) -> Result<u32, DecorationError>
    where
        L: LayoutMetadata + ?Sized,
    {
        self.columns
            .as_ref()
            .map(|provider| provider.column_count())
            .or_else(|| layout.column_count())
            .ok_or(DecorationError::MissingColumns)
    }
}
