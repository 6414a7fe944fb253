//! Restaurant menus backed by different containers

mod cafe;
mod diner;
mod pancake_house;

pub use self::cafe::CafeMenu;
pub use self::diner::DinerMenu;
pub use self::pancake_house::PancakeHouseMenu;

use iterators::{Items, MenuIterator};
use menu_item::MenuItem;

/// A collection of menu items that can hand out iterators over its contents
pub trait Menu {
    fn name(&self) -> &str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// create a fresh cursor over the current items
    fn create_iterator<'a>(&'a self) -> Box<dyn MenuIterator<'a> + 'a>;

    /// iterate over the current items with a standard iterator
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a MenuItem> + 'a> {
        Box::new(Items::new(self.create_iterator()))
    }
}

/// All menus the restaurant serves, in the order the waitress reads them
pub fn all_menus() -> Vec<Box<dyn Menu>> {
    vec![
        Box::new(PancakeHouseMenu::new()),
        Box::new(DinerMenu::new()),
        Box::new(CafeMenu::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<'a>(mut it: Box<dyn MenuIterator<'a> + 'a>) -> usize {
        let mut n = 0;
        while it.has_next() {
            it.next().unwrap();
            n += 1;
        }
        assert!(it.next().is_err());
        n
    }

    #[test]
    fn every_menu_yields_each_item_once() {
        for menu in all_menus() {
            assert_eq!(drain(menu.create_iterator()), menu.len(), "{}", menu.name());
        }
    }

    #[test]
    fn iter_matches_create_iterator() {
        for menu in all_menus() {
            let mut cursor = menu.create_iterator();
            for item in menu.iter() {
                assert!(cursor.has_next());
                assert_eq!(cursor.next().unwrap(), item);
            }
            assert!(!cursor.has_next());
        }
    }

    #[test]
    fn iterators_are_independent() {
        let menu = DinerMenu::new();
        let mut first = menu.create_iterator();
        first.next().unwrap();
        first.next().unwrap();

        let mut second = menu.create_iterator();
        assert_eq!(second.next().unwrap().name(), "Vegetarian BLT");
        assert_eq!(first.next().unwrap().name(), "Soup of the day");
    }
}
