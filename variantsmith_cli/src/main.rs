#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Variantsmith **
//! Interactive generator for Cobblemon aspect-variant asset packs.

use std::path::Path;

use anyhow::{Context, Result};

use log::info;

use variantsmith_cli::prompt::InputManager;
use variantsmith_cli::run_generator;
use variantsmith_cli::style::ToolStyle;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: variantsmith generation run");

    println!("{:^64}", "VARIANTSMITH: COBBLEMON ASPECT VARIANT GENERATOR".banner_style());
    println!();

    let mut input = InputManager::new();
    run_generator(&mut input, Path::new(".")).context("while generating variant asset pack")?;

    info!("generation run finished");
    Ok(())
}
