use iterators::{MenuIterator, SliceIterator};
use menu_item::MenuItem;

use super::Menu;

/// The breakfast menu, kept as a list
#[derive(Debug)]
pub struct PancakeHouseMenu {
    menu_items: Vec<MenuItem>,
}

impl PancakeHouseMenu {
    pub fn new() -> Self {
        let mut menu = PancakeHouseMenu {
            menu_items: Vec::new(),
        };

        menu.add_item(
            "K&B's Pancake Breakfast",
            "Pancakes with scrambled eggs, and toast",
            true,
            2.99,
        );

        menu.add_item(
            "Regular Pancake Breakfast",
            "Pancakes with fried eggs, sausage",
            false,
            2.99,
        );

        menu.add_item(
            "Blueberry Pancakes",
            "Pancakes made with fresh blueberries",
            true,
            3.49,
        );

        menu.add_item(
            "Waffles",
            "Waffles, with your choice of blueberries or strawberries",
            true,
            3.59,
        );

        menu
    }

    pub fn add_item(&mut self, name: &str, description: &str, vegetarian: bool, price: f64) {
        trace!("adding {:?} to the pancake house menu", name);
        self.menu_items
            .push(MenuItem::new(name, description, vegetarian, price));
    }
}

impl Menu for PancakeHouseMenu {
    fn name(&self) -> &str {
        "Pancake House"
    }

    fn len(&self) -> usize {
        self.menu_items.len()
    }

    fn create_iterator<'a>(&'a self) -> Box<dyn MenuIterator<'a> + 'a> {
        debug!("pancake house iterator over {} items", self.menu_items.len());
        Box::new(SliceIterator::new(&self.menu_items))
    }
}

#[test]
fn pancake_house_prints_seeded_items() {
    let menu = PancakeHouseMenu::new();
    let lines: Vec<_> = menu.iter().map(|item| item.to_string()).collect();

    assert_eq!(
        lines,
        [
            "K&B's Pancake Breakfast, 2.99 -- Pancakes with scrambled eggs, and toast",
            "Regular Pancake Breakfast, 2.99 -- Pancakes with fried eggs, sausage",
            "Blueberry Pancakes, 3.49 -- Pancakes made with fresh blueberries",
            "Waffles, 3.59 -- Waffles, with your choice of blueberries or strawberries",
        ]
    );
}

#[test]
fn add_item_appends() {
    let mut menu = PancakeHouseMenu::new();
    menu.add_item("Crepes", "Thin pancakes with jam", true, 3.99);

    assert_eq!(menu.len(), 5);
    assert_eq!(menu.iter().last().unwrap().name(), "Crepes");
}
