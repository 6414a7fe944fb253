extern crate menu_iteration;

use menu_iteration::prelude::*;
use menu_iteration::{all_menus, Waitress};

fn main() {
    // walk each menu with the cursor interface
    for menu in all_menus() {
        println!("{} ({} items)", menu.name(), menu.len());

        let mut iterator = menu.create_iterator();
        while iterator.has_next() {
            let item = iterator.next().unwrap();
            println!("  {}", item);
        }
    }

    // the same traversal through std::iter::Iterator
    let waitress = Waitress::new(all_menus());
    println!("\n{} lines total", waitress.menu_lines().len());
}
