use error::{Error, Result};
use menu_item::MenuItem;

use super::MenuIterator;

/// Cursor over a flattened snapshot of items taken from some other container, such as a map
#[derive(Debug, Clone)]
pub struct SnapshotIterator<'a> {
    items: Vec<&'a MenuItem>,
    position: usize,
}

impl<'a> SnapshotIterator<'a> {
    pub fn new(items: Vec<&'a MenuItem>) -> Self {
        SnapshotIterator { items, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }
}

impl<'a> MenuIterator<'a> for SnapshotIterator<'a> {
    fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    fn next(&mut self) -> Result<&'a MenuItem> {
        if !self.has_next() {
            warn!("next() called on exhausted iterator at {}", self.position);
            return Err(Error::OutOfRange {
                position: self.position,
                len: self.items.len(),
            });
        }

        let item = self.items[self.position];
        self.position += 1;
        trace!("yielding {:?}", item.name());
        Ok(item)
    }
}

#[test]
fn snapshot_keeps_given_order() {
    let soup = MenuItem::new("Soup of the day", "A cup of soup", true, 3.69);
    let burrito = MenuItem::new("Burrito", "A large burrito", true, 4.29);

    let mut it = SnapshotIterator::new(vec![&soup, &burrito]);
    assert_eq!(it.remaining(), 2);

    assert_eq!(it.next().unwrap(), &soup);
    assert_eq!(it.next().unwrap(), &burrito);
    assert!(!it.has_next());

    match it.next() {
        Err(Error::OutOfRange { position: 2, len: 2 }) => {}
        other => panic!("expected OutOfRange, got {:?}", other),
    }
    assert_eq!(it.position(), 2);
}
