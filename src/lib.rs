//! Restaurant menus stored in different containers, all read out through one iterator interface.
//!
//! Each menu hands out a `MenuIterator` with `has_next` and `next`. The `Waitress` only talks to
//! that interface, so it prints a list-backed menu the same way as a map-backed one. `Menu::iter`
//! offers the same traversal as a standard `Iterator`.

extern crate indexmap;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate simple_logger;

#[cfg(test)]
#[macro_use]
extern crate serde_json;

pub mod config;
pub mod error;
pub mod iterators;
pub mod menus;
pub mod waitress;

mod menu_item;

pub use error::{Error, Result};
pub use iterators::{Items, MenuIterator, SliceIterator, SnapshotIterator};
pub use menu_item::MenuItem;
pub use menus::{all_menus, CafeMenu, DinerMenu, Menu, PancakeHouseMenu};
pub use waitress::Waitress;

pub mod prelude {
    pub use iterators::MenuIterator;
    pub use menus::Menu;
}

/// Install the stdout logger at the configured level
pub fn init_logging(config: &config::Config) -> Result<()> {
    simple_logger::init_with_level(config.log_level)?;
    Ok(())
}
