use error::{Error, Result};
use menu_item::MenuItem;

use super::MenuIterator;

/// Cursor over items stored in a contiguous list
#[derive(Debug, Clone)]
pub struct SliceIterator<'a> {
    items: &'a [MenuItem],
    position: usize,
}

impl<'a> SliceIterator<'a> {
    pub fn new(items: &'a [MenuItem]) -> Self {
        SliceIterator { items, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// number of items not yet returned
    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }
}

impl<'a> MenuIterator<'a> for SliceIterator<'a> {
    fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    fn next(&mut self) -> Result<&'a MenuItem> {
        match self.items.get(self.position) {
            Some(item) => {
                self.position += 1;
                trace!("yielding {:?}", item.name());
                Ok(item)
            }
            None => {
                warn!("next() called on exhausted iterator at {}", self.position);
                Err(Error::OutOfRange {
                    position: self.position,
                    len: self.items.len(),
                })
            }
        }
    }
}

#[test]
fn slice_iterator_visits_in_order() {
    let items = vec![
        MenuItem::new("Vegetarian BLT", "(Fakin') Bacon", true, 2.99),
        MenuItem::new("BLT", "Bacon", false, 2.99),
        MenuItem::new("Hotdog", "A hot dog", false, 3.05),
    ];

    let mut it = SliceIterator::new(&items);
    let mut names = vec![];
    while it.has_next() {
        names.push(it.next().unwrap().name());
    }

    assert_eq!(names, ["Vegetarian BLT", "BLT", "Hotdog"]);
    assert_eq!(it.remaining(), 0);
}

#[test]
fn slice_iterator_fails_past_end() {
    let items = vec![MenuItem::new("Waffles", "Waffles", true, 3.59)];

    let mut it = SliceIterator::new(&items);
    assert!(it.next().is_ok());

    match it.next() {
        Err(Error::OutOfRange { position, len }) => {
            assert_eq!(position, 1);
            assert_eq!(len, 1);
        }
        other => panic!("expected OutOfRange, got {:?}", other),
    }

    // the cursor does not move on failure
    assert_eq!(it.position(), 1);
    assert!(it.next().is_err());
}

#[test]
fn empty_slice_has_nothing() {
    let items: Vec<MenuItem> = vec![];
    let mut it = SliceIterator::new(&items);

    assert!(!it.has_next());
    assert!(it.next().is_err());
}
