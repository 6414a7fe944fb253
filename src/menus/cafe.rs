use indexmap::IndexMap;

use iterators::{MenuIterator, SnapshotIterator};
use menu_item::MenuItem;

use super::Menu;

/// The dinner menu, keyed by item name
///
/// The map enumerates in insertion order. Adding an item under a name that is already present
/// replaces the old item but keeps its place.
#[derive(Debug)]
pub struct CafeMenu {
    menu_items: IndexMap<String, MenuItem>,
}

impl CafeMenu {
    pub fn new() -> Self {
        let mut menu = CafeMenu {
            menu_items: IndexMap::new(),
        };

        menu.add_item(
            "Soup of the day",
            "A cup of the soup of the day, with a side salad",
            true,
            3.69,
        );

        menu.add_item(
            "Burrito",
            "A large burrito, with whole pinto beans, salsa, guacamole",
            true,
            4.29,
        );

        menu
    }

    pub fn add_item(&mut self, name: &str, description: &str, vegetarian: bool, price: f64) {
        let item = MenuItem::new(name, description, vegetarian, price);
        if let Some(old) = self.menu_items.insert(name.to_owned(), item) {
            debug!("replacing {:?} on the cafe menu", old.name());
        } else {
            trace!("adding {:?} to the cafe menu", name);
        }
    }
}

impl Menu for CafeMenu {
    fn name(&self) -> &str {
        "Cafe"
    }

    fn len(&self) -> usize {
        self.menu_items.len()
    }

    fn create_iterator<'a>(&'a self) -> Box<dyn MenuIterator<'a> + 'a> {
        debug!("cafe iterator over {} items", self.menu_items.len());
        Box::new(SnapshotIterator::new(self.menu_items.values().collect()))
    }
}

#[test]
fn cafe_iterates_in_map_order() {
    let menu = CafeMenu::new();
    let names: Vec<_> = menu.iter().map(|item| item.name()).collect();

    assert_eq!(names, ["Soup of the day", "Burrito"]);
    assert_eq!(
        menu.menu_items.keys().collect::<Vec<_>>(),
        ["Soup of the day", "Burrito"]
    );
}

#[test]
fn cafe_replaces_items_in_place() {
    let mut menu = CafeMenu::new();
    menu.add_item("Soup of the day", "Tomato soup", false, 2.49);

    assert_eq!(menu.len(), 2);

    let mut it = menu.create_iterator();
    let soup = it.next().unwrap();
    assert_eq!(soup.description(), "Tomato soup");
    assert!(!soup.is_vegetarian());
    assert_eq!(it.next().unwrap().name(), "Burrito");
    assert!(!it.has_next());
}

#[test]
fn separate_cafes_do_not_share_items() {
    let mut first = CafeMenu::new();
    first.add_item("Tacos", "Three soft tacos", false, 3.99);

    assert_eq!(first.len(), 3);
    assert_eq!(CafeMenu::new().len(), 2);
}
