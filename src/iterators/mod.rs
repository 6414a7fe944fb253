//! Cursor-style iteration over menu items

mod slice;
mod snapshot;

use std::marker::PhantomData;

use error::Result;
use menu_item::MenuItem;

pub use self::slice::SliceIterator;
pub use self::snapshot::SnapshotIterator;

/// Single-pass traversal over the items of one menu.
///
/// `next` only succeeds while `has_next` is true. Once the cursor has passed the last item every
/// further call fails with `Error::OutOfRange` and the cursor stays where it is.
pub trait MenuIterator<'a> {
    /// whether any unread item remains
    fn has_next(&self) -> bool;

    /// return the next item and advance the cursor
    fn next(&mut self) -> Result<&'a MenuItem>;

    /// turn this cursor into a standard iterator
    fn into_items(self) -> Items<'a, Self>
    where
        Self: Sized,
    {
        Items::new(self)
    }
}

impl<'a, I> MenuIterator<'a> for Box<I>
where
    I: MenuIterator<'a> + ?Sized,
{
    #[inline(always)]
    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    #[inline(always)]
    fn next(&mut self) -> Result<&'a MenuItem> {
        (**self).next()
    }
}

/// Adapter that drives a `MenuIterator` through `std::iter::Iterator`
#[derive(Debug)]
pub struct Items<'a, I> {
    inner: I,
    _item: PhantomData<&'a MenuItem>,
}

impl<'a, I> Items<'a, I>
where
    I: MenuIterator<'a>,
{
    pub fn new(inner: I) -> Self {
        Items {
            inner,
            _item: PhantomData,
        }
    }
}

impl<'a, I> Iterator for Items<'a, I>
where
    I: MenuIterator<'a>,
{
    type Item = &'a MenuItem;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.inner.has_next() {
            return None;
        }
        self.inner.next().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("Burrito", "A large burrito", true, 4.29),
            MenuItem::new("Hotdog", "A hot dog", false, 3.05),
        ]
    }

    #[test]
    fn boxed_iterator_delegates() {
        let items = items();
        let mut it: Box<dyn MenuIterator<'_> + '_> = Box::new(SliceIterator::new(&items));

        assert!(it.has_next());
        assert_eq!(it.next().unwrap().name(), "Burrito");
        assert_eq!(it.next().unwrap().name(), "Hotdog");
        assert!(!it.has_next());
    }

    #[test]
    fn items_adapter_stops_at_end() {
        let items = items();
        let names: Vec<_> = SliceIterator::new(&items)
            .into_items()
            .map(|item| item.name())
            .collect();

        assert_eq!(names, ["Burrito", "Hotdog"]);
    }

    #[test]
    fn items_adapter_over_boxed_cursor() {
        let items = items();
        let boxed: Box<dyn MenuIterator<'_> + '_> =
            Box::new(SnapshotIterator::new(items.iter().collect()));

        assert_eq!(boxed.into_items().count(), 2);
    }
}
