// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predicates deciding which items receive decoration.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::types::Item;

/// Decides whether decoration applies to an item.
///
/// Items rejected by the filter get zero insets and no divider strokes, and
/// divider strokes towards a rejected neighbour are suppressed.
///
/// Closures of the form `Fn(&Item, usize) -> bool` implement this trait.
pub trait DecorationFilter {
    /// Returns `true` if `item` in a list of `item_count` items is decorated.
    fn should_apply(&self, item: &Item, item_count: usize) -> bool;
}

impl<F> DecorationFilter for F
where
    F: Fn(&Item, usize) -> bool,
{
    fn should_apply(&self, item: &Item, item_count: usize) -> bool {
        self(item, item_count)
    }
}

/// Decorates every item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysApply;

impl DecorationFilter for AlwaysApply {
    fn should_apply(&self, _item: &Item, _item_count: usize) -> bool {
        true
    }
}

/// Skips decoration when the list holds a single item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkipSingleItem;

impl DecorationFilter for SkipSingleItem {
    fn should_apply(&self, item: &Item, item_count: usize) -> bool {
        !(item.position == 0 && item_count == 1)
    }
}

/// Logical AND over an ordered list of filters.
///
/// Filters are evaluated in order and evaluation stops at the first one that
/// rejects the item. An empty merge accepts everything.
///
/// ```rust
/// use understory_decoration::{AlwaysApply, DecorationFilter, Item, MergeFilter, SkipSingleItem};
///
/// let filter = MergeFilter::of([
///     Box::new(AlwaysApply) as Box<dyn DecorationFilter>,
///     Box::new(SkipSingleItem),
/// ]);
/// assert!(!filter.should_apply(&Item::new(0), 1));
/// assert!(filter.should_apply(&Item::new(1), 2));
/// ```
#[derive(Default)]
pub struct MergeFilter {
    filters: Vec<Box<dyn DecorationFilter>>,
}

impl MergeFilter {
    /// Creates an empty merge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a merge from filters in evaluation order.
    #[must_use]
    pub fn of(filters: impl IntoIterator<Item = Box<dyn DecorationFilter>>) -> Self {
        Self {
            filters: filters.into_iter().collect(),
        }
    }

    /// Appends a filter, evaluated after the existing ones.
    #[must_use]
    pub fn and(mut self, filter: impl DecorationFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of merged filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if no filters are merged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl fmt::Debug for MergeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeFilter")
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl DecorationFilter for MergeFilter {
    fn should_apply(&self, item: &Item, item_count: usize) -> bool {
        self.filters
            .iter()
            .all(|filter| filter.should_apply(item, item_count))
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::types::ItemKind;

    #[test]
    fn skip_single_item_only_rejects_lone_item() {
        assert!(!SkipSingleItem.should_apply(&Item::new(0), 1));
        assert!(SkipSingleItem.should_apply(&Item::new(0), 2));
        assert!(SkipSingleItem.should_apply(&Item::new(1), 2));
    }

    #[test]
    fn merge_short_circuits_on_first_rejection() {
        let calls = alloc::rc::Rc::new(Cell::new(0_u32));
        let counted = {
            let calls = calls.clone();
            move |_: &Item, _: usize| {
                calls.set(calls.get() + 1);
                true
            }
        };
        let filter = MergeFilter::new().and(SkipSingleItem).and(counted);

        assert!(!filter.should_apply(&Item::new(0), 1));
        assert_eq!(calls.get(), 0);
        assert!(filter.should_apply(&Item::new(0), 2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn closures_can_filter_by_kind() {
        let headers_only = |item: &Item, _: usize| item.kind == ItemKind(7);
        assert!(headers_only.should_apply(&Item::with_kind(3, ItemKind(7)), 10));
        assert!(!headers_only.should_apply(&Item::new(3), 10));
    }

    #[test]
    fn empty_merge_accepts_everything() {
        let filter = MergeFilter::new();
        assert!(filter.is_empty());
        assert!(filter.should_apply(&Item::new(0), 1));
    }
}
