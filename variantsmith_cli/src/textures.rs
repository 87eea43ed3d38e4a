//! Texture discovery and copying.
//!
//! Source textures follow the convention `textures/<aspect name>/<creature
//! name>.png` under the working root. A missing source file or directory is
//! a warning, never a failure; the run continues without the copy.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::aspect::Aspect;
use crate::creature::CreatureEntry;
use crate::layout::OutputLayout;
use crate::style::ToolStyle;

/// Warn once, up front, if the aspect's texture source directory is absent.
pub fn check_source_dir(layout: &OutputLayout, aspect: &Aspect) {
    let source_dir = layout.texture_source_dir(&aspect.name);
    if !source_dir.exists() {
        warn!("texture source directory {} not found", source_dir.display());
        println!(
            "{}",
            format!("Warning: Textures directory '{}' not found.", source_dir.display()).warning_style()
        );
    }
}

/// Copy the creature's variant texture into its per-creature directory.
///
/// Returns the destination path when a copy happened, or `None` when the
/// source texture does not exist (warned, not fatal).
///
/// # Errors
/// Returns an error if the destination directory cannot be created or the
/// copy itself fails.
pub fn copy_texture(
    layout: &OutputLayout,
    aspect: &Aspect,
    creature: &CreatureEntry,
) -> Result<Option<PathBuf>> {
    let source = layout.texture_source_dir(&aspect.name).join(format!("{}.png", creature.name));
    if !source.exists() {
        warn!("no source texture for {} at {}", creature.name, source.display());
        println!(
            "{}",
            format!(
                "Warning: Texture file not found for {}: {}",
                creature.name,
                source.display()
            )
            .warning_style()
        );
        return Ok(None);
    }

    let dest_dir = layout.texture_dir(creature);
    fs::create_dir_all(&dest_dir).with_context(|| format!("creating {}", dest_dir.display()))?;

    let dest = layout.texture_file(creature, &aspect.slug);
    fs::copy(&source, &dest)
        .with_context(|| format!("copying {} -> {}", source.display(), dest.display()))?;
    info!("copied texture {} -> {}", source.display(), dest.display());
    println!(
        "\nCopied texture: {} -> {}",
        source.display().to_string().path_style(),
        dest.display().to_string().path_style()
    );
    Ok(Some(dest))
}
