extern crate menu_iteration;

use std::process;

use menu_iteration::config::Config;
use menu_iteration::{all_menus, init_logging, Result, Waitress};

fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;

    let waitress = Waitress::new(all_menus());
    waitress.print_menu()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}
