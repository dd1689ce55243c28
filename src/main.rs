mod base;
mod config;
mod error;
mod ui;

use clap::Parser;

fn main() -> crate::error::Result<()> {
    env_logger::init();

    let args = config::Args::parse();
    let prototype = config::load(&args)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    ui::Menu::new(prototype).run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
