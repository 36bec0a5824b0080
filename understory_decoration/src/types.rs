// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public value types: orientation, sides, insets, spans and item identity.

use kurbo::Rect;

/// Scroll direction of a list or grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Items are stacked top to bottom; grid columns run left to right.
    #[default]
    Vertical,
    /// Items are stacked left to right; grid columns run top to bottom.
    Horizontal,
}

impl Orientation {
    /// Returns the physical `(start, end)` sides of the scroll axis.
    ///
    /// This ignores inversion: for a vertical list the start side is always
    /// [`Side::Top`].
    #[must_use]
    pub const fn main_sides(self) -> (Side, Side) {
        match self {
            Self::Vertical => (Side::Top, Side::Bottom),
            Self::Horizontal => (Side::Left, Side::Right),
        }
    }

    /// Returns the physical `(start, end)` sides of the cross axis.
    #[must_use]
    pub const fn cross_sides(self) -> (Side, Side) {
        match self {
            Self::Vertical => (Side::Left, Side::Right),
            Self::Horizontal => (Side::Top, Side::Bottom),
        }
    }

    /// Returns the physical `(leading, trailing)` sides of the scroll axis.
    ///
    /// The leading side faces the previous position. Inversion swaps the two.
    #[must_use]
    pub const fn flow_sides(self, inverted: bool) -> (Side, Side) {
        let (start, end) = self.main_sides();
        if inverted { (end, start) } else { (start, end) }
    }
}

/// One side of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left side.
    Left,
    /// The top side.
    Top,
    /// The right side.
    Right,
    /// The bottom side.
    Bottom,
}

/// Space reserved around an item, in integer device-independent pixels.
///
/// Insets are produced by the calculators in this crate and are consumed by the
/// host's measurement step, which adds them to the item's natural size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Insets {
    /// Space reserved on the left side.
    pub left: u32,
    /// Space reserved on the top side.
    pub top: u32,
    /// Space reserved on the right side.
    pub right: u32,
    /// Space reserved on the bottom side.
    pub bottom: u32,
}

impl Insets {
    /// No space on any side.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates insets from explicit sides.
    #[must_use]
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates insets with the same value on every side.
    #[must_use]
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the value on `side`.
    #[must_use]
    pub const fn side(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    /// Sets the value on `side`.
    pub fn set_side(&mut self, side: Side, value: u32) {
        match side {
            Side::Left => self.left = value,
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
        }
    }

    /// Returns `true` if every side is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }

    /// Shrinks a decorated rectangle back to the item's own bounds.
    ///
    /// This is the inverse of what the host does when it adds insets around an
    /// item during layout.
    #[must_use]
    pub fn shrink(&self, decorated: Rect) -> Rect {
        Rect::new(
            decorated.x0 + f64::from(self.left),
            decorated.y0 + f64::from(self.top),
            decorated.x1 - f64::from(self.right),
            decorated.y1 - f64::from(self.bottom),
        )
    }
}

impl From<Insets> for kurbo::Insets {
    fn from(value: Insets) -> Self {
        Self::new(
            f64::from(value.left),
            f64::from(value.top),
            f64::from(value.right),
            f64::from(value.bottom),
        )
    }
}

/// Column placement of an item in a grid whose cells may span several columns.
///
/// `index` is the first column the item occupies and `size` is how many columns
/// it covers. Both are reported by the host's grid layout per item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSpan {
    /// First column occupied by the item.
    pub index: u32,
    /// Number of columns occupied by the item.
    pub size: u32,
}

impl GridSpan {
    /// Creates a span starting at `index` and covering `size` columns.
    #[must_use]
    pub const fn new(index: u32, size: u32) -> Self {
        Self { index, size }
    }

    /// A single column at `index`.
    #[must_use]
    pub const fn single(index: u32) -> Self {
        Self::new(index, 1)
    }
}

/// Opaque host-defined category of an item (for example a view type).
///
/// Filters can use it to decorate only some kinds of items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ItemKind(pub u32);

/// Identity of an item handed to a [`DecorationFilter`](crate::DecorationFilter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Position of the item in the list.
    pub position: usize,
    /// Host-defined kind of the item.
    pub kind: ItemKind,
}

impl Item {
    /// Creates an item of the default kind.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self {
            position,
            kind: ItemKind(0),
        }
    }

    /// Creates an item with an explicit kind.
    #[must_use]
    pub const fn with_kind(position: usize, kind: ItemKind) -> Self {
        Self { position, kind }
    }
}
