//! This crate contains the source code for the binary for the game mazetui.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazetui::Args;

fn main() -> Result<()> {
    install()?;

    let args = Args::parse();
    mazetui::run(&args)
}
