//! The waitress reads every menu out loud without knowing how it is stored.

use std::io::{self, Write};

use error::Result;
use iterators::MenuIterator;
use menus::Menu;

pub struct Waitress {
    menus: Vec<Box<dyn Menu>>,
}

impl Waitress {
    pub fn new(menus: Vec<Box<dyn Menu>>) -> Self {
        Waitress { menus }
    }

    /// Print all menus to standard output
    pub fn print_menu(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_menu(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write all menus, one line per item, in the order the menus were given
    pub fn write_menu<W: Write>(&self, out: &mut W) -> Result<()> {
        info!("printing {} menus", self.menus.len());
        for menu in &self.menus {
            debug!("printing the {} menu", menu.name());
            Waitress::write_menu_items(out, menu.create_iterator())?;
        }
        info!("done printing menus");
        Ok(())
    }

    /// Drain one iterator, writing `name, price -- description` for every item
    pub fn write_menu_items<'a, W, I>(out: &mut W, mut iterator: I) -> Result<()>
    where
        W: Write,
        I: MenuIterator<'a>,
    {
        while iterator.has_next() {
            let menu_item = iterator.next()?;
            writeln!(
                out,
                "{}, {} -- {}",
                menu_item.name(),
                menu_item.price(),
                menu_item.description()
            )?;
        }
        Ok(())
    }

    /// The same lines `write_menu` produces, collected through `Menu::iter`
    pub fn menu_lines(&self) -> Vec<String> {
        self.menus
            .iter()
            .flat_map(|menu| menu.iter())
            .map(|item| item.to_string())
            .collect()
    }
}
