// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Margin and divider configuration shared by all calculators.

use crate::types::Side;

/// Per-side margin values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Margins {
    /// Margin on the left side of an item.
    pub left: u32,
    /// Margin on the top side of an item.
    pub top: u32,
    /// Margin on the right side of an item.
    pub right: u32,
    /// Margin on the bottom side of an item.
    pub bottom: u32,
}

impl Margins {
    /// Creates margins from explicit sides.
    #[must_use]
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same margin on every side.
    #[must_use]
    pub const fn uniform(margin: u32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// `horizontal` on the left and right sides, `vertical` on top and bottom.
    #[must_use]
    pub const fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Returns the margin configured for `side`.
    #[must_use]
    pub const fn side(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }
}

/// Geometry of a divider stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DividerStyle {
    /// Thickness of the stroke.
    pub size: u32,
    /// Space between the stroke and each of the items it separates.
    pub width_margin: u32,
    /// Amount the stroke is shortened at both of its ends.
    pub height_margin: u32,
}

impl DividerStyle {
    /// A stroke of thickness `size` with no surrounding space.
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self {
            size,
            width_margin: 0,
            height_margin: 0,
        }
    }

    /// Total space between two items separated by this divider.
    #[must_use]
    pub const fn gap(&self) -> u32 {
        self.size.saturating_add(self.width_margin.saturating_mul(2))
    }

    /// Space reserved outside the first or last item when an edge stroke is drawn.
    #[must_use]
    pub const fn edge(&self) -> u32 {
        self.size.saturating_add(self.width_margin)
    }
}

/// Configuration of one decoration.
///
/// This is a plain value: calculators read it by reference on every call and
/// keep no state of their own. [`Decoration`](crate::Decoration) owns one and
/// exposes an explicit update method that tracks revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarginConfig {
    /// Margins used by margin and bounds calculators.
    pub margins: Margins,
    /// Stroke geometry used by divider calculators.
    pub divider: DividerStyle,
    /// Reserve the edge margin (or edge stroke) before the first item.
    pub add_before_first: bool,
    /// Reserve the edge margin (or edge stroke) after the last item.
    pub add_after_last: bool,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self::sides(Margins::default())
    }
}

impl MarginConfig {
    /// Per-side margins with both edge margins enabled.
    #[must_use]
    pub const fn sides(margins: Margins) -> Self {
        Self {
            margins,
            divider: DividerStyle::new(0),
            add_before_first: true,
            add_after_last: true,
        }
    }

    /// The same margin on every side.
    #[must_use]
    pub const fn uniform(margin: u32) -> Self {
        Self::sides(Margins::uniform(margin))
    }

    /// A margin on the top and bottom sides only.
    #[must_use]
    pub const fn vertical(margin: u32) -> Self {
        Self::sides(Margins::symmetric(0, margin))
    }

    /// A margin on the left and right sides only.
    #[must_use]
    pub const fn horizontal(margin: u32) -> Self {
        Self::sides(Margins::symmetric(margin, 0))
    }

    /// A divider configuration. Edge strokes are disabled.
    #[must_use]
    pub const fn divider(divider: DividerStyle) -> Self {
        Self {
            margins: Margins::new(0, 0, 0, 0),
            divider,
            add_before_first: false,
            add_after_last: false,
        }
    }

    /// Sets whether the edge margin before the first item is reserved.
    #[must_use]
    pub const fn with_before_first(mut self, add: bool) -> Self {
        self.add_before_first = add;
        self
    }

    /// Sets whether the edge margin after the last item is reserved.
    #[must_use]
    pub const fn with_after_last(mut self, add: bool) -> Self {
        self.add_after_last = add;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fill_expected_sides() {
        assert_eq!(MarginConfig::vertical(8).margins, Margins::new(0, 8, 0, 8));
        assert_eq!(
            MarginConfig::horizontal(8).margins,
            Margins::new(8, 0, 8, 0)
        );
        let config = MarginConfig::uniform(4);
        assert!(config.add_before_first && config.add_after_last);
    }

    #[test]
    fn divider_gap_counts_both_width_margins() {
        let style = DividerStyle {
            size: 2,
            width_margin: 3,
            height_margin: 5,
        };
        assert_eq!(style.gap(), 8);
        assert_eq!(style.edge(), 5);
        let config = MarginConfig::divider(style);
        assert!(!config.add_before_first && !config.add_after_last);
    }
}
