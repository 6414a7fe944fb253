extern crate menu_iteration;

use menu_iteration::prelude::*;
use menu_iteration::all_menus;

fn main() {
    let menus = all_menus();

    // Menu::iter composes with the usual adapters
    let vegetarian: Vec<_> = menus
        .iter()
        .flat_map(|menu| menu.iter())
        .filter(|item| item.is_vegetarian())
        .collect();

    println!("Vegetarian dishes:");
    for item in &vegetarian {
        println!("  {}", item);
    }

    let cheapest = vegetarian
        .iter()
        .min_by(|a, b| a.price().partial_cmp(&b.price()).unwrap())
        .unwrap();
    println!("Cheapest: {}", cheapest.name());
}
