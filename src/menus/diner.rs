use iterators::{MenuIterator, SliceIterator};
use menu_item::MenuItem;

use super::Menu;

/// The lunch menu, kept as a list
#[derive(Debug)]
pub struct DinerMenu {
    menu_items: Vec<MenuItem>,
}

impl DinerMenu {
    pub fn new() -> Self {
        let mut menu = DinerMenu {
            menu_items: Vec::new(),
        };

        menu.add_item(
            "Vegetarian BLT",
            "(Fakin') Bacon with lettuce & tomato on whole wheat",
            true,
            2.99,
        );

        menu.add_item("BLT", "Bacon with lettuce & tomato on whole wheat", false, 2.99);

        menu.add_item(
            "Soup of the day",
            "Soup of the day, with a side of potato salad",
            false,
            3.29,
        );

        menu.add_item(
            "Hotdog",
            "A hot dog, with saurkraut, relish, onions, topped with cheese",
            false,
            3.05,
        );

        menu
    }

    pub fn add_item(&mut self, name: &str, description: &str, vegetarian: bool, price: f64) {
        trace!("adding {:?} to the diner menu", name);
        self.menu_items
            .push(MenuItem::new(name, description, vegetarian, price));
    }
}

impl Menu for DinerMenu {
    fn name(&self) -> &str {
        "Diner"
    }

    fn len(&self) -> usize {
        self.menu_items.len()
    }

    fn create_iterator<'a>(&'a self) -> Box<dyn MenuIterator<'a> + 'a> {
        debug!("diner iterator over {} items", self.menu_items.len());
        Box::new(SliceIterator::new(&self.menu_items))
    }
}

#[test]
fn diner_keeps_insertion_order() {
    let menu = DinerMenu::new();
    let mut it = menu.create_iterator();

    let mut seen = vec![];
    while it.has_next() {
        let item = it.next().unwrap();
        seen.push((item.name(), item.is_vegetarian(), item.price()));
    }

    assert_eq!(
        seen,
        [
            ("Vegetarian BLT", true, 2.99),
            ("BLT", false, 2.99),
            ("Soup of the day", false, 3.29),
            ("Hotdog", false, 3.05),
        ]
    );
}
