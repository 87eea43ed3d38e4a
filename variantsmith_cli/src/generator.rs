//! The generation pass.
//!
//! One linear run: collect the aspect and roster, prepare the output tree,
//! write the shared documents, then handle each creature in turn (resolver,
//! texture, spawn settings, spawn pool entry) and print a summary. File
//! writes are independent; a failure mid-roster leaves earlier creatures'
//! files in place.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::aspect::Aspect;
use crate::creature::{CreatureEntry, parse_roster};
use crate::documents;
use crate::idgen::{RESOLVER_ORDER_LEN, SPAWN_ID_LEN, random_numeric_id};
use crate::layout::OutputLayout;
use crate::prompt::InputManager;
use crate::style::ToolStyle;
use crate::textures;

pub const VALID_BUCKETS: &[&str] = &["common", "uncommon", "rare", "ultra-rare"];
pub const VALID_CONTEXTS: &[&str] = &["grounded", "submerged", "surface", "fishing"];

const DEFAULT_WEIGHT: &str = "5";
const DEFAULT_BIOME: &str = "#cobblemon:is_sandy";
const DEFAULT_BUCKET: &str = "common";
const DEFAULT_CONTEXT: &str = "grounded";
const DEFAULT_LEVEL: &str = "5-31";
const DEFAULT_MIN_SKY_LIGHT: &str = "8";
const DEFAULT_MAX_SKY_LIGHT: &str = "15";

/// Spawn configuration collected per creature.
///
/// Values stay as the raw prompt strings; the game engine consumes them
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnSettings {
    pub weight: String,
    pub biome: String,
    pub bucket: String,
    pub context: String,
    pub level: String,
    pub min_sky_light: String,
    pub max_sky_light: String,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT.to_string(),
            biome: DEFAULT_BIOME.to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
            context: DEFAULT_CONTEXT.to_string(),
            level: DEFAULT_LEVEL.to_string(),
            min_sky_light: DEFAULT_MIN_SKY_LIGHT.to_string(),
            max_sky_light: DEFAULT_MAX_SKY_LIGHT.to_string(),
        }
    }
}

/// Run one full interactive generation pass rooted at `root`.
///
/// # Errors
/// Propagates prompt-stream termination and filesystem failures. Malformed
/// roster tokens and missing textures are warnings, not errors.
pub fn run_generator(input: &mut InputManager, root: &Path) -> Result<()> {
    // The aspect name is taken exactly as typed; it flows verbatim into the
    // documents and the texture source directory name.
    let aspect = Aspect::new(&input.ask_raw("Enter the aspect name: ")?);
    let roster_line = input.ask("Enter pokemon IDs and names (format: id1_name1, id2_name2, ...): ")?;
    let creatures = parse_roster(&roster_line);
    info!("aspect '{}' (slug '{}'), {} creature(s)", aspect.name, aspect.slug, creatures.len());

    let layout = OutputLayout::new(root);
    layout.ensure_directories().context("preparing output directories")?;

    write_shared_documents(&layout, &aspect, &creatures)?;
    textures::check_source_dir(&layout, &aspect);

    for creature in &creatures {
        let order = random_numeric_id(RESOLVER_ORDER_LEN);
        write_resolver(&layout, &aspect, creature, &order)?;
        textures::copy_texture(&layout, &aspect, creature)?;

        println!(
            "Enter spawn settings for {} (press Enter for default values):",
            creature.name.as_str().prompt_style()
        );
        let settings = collect_spawn_settings(input, creature)?;
        write_spawn_pool_entry(&layout, &aspect, creature, &settings)?;
    }

    print_summary(&layout, &aspect, &creatures);
    Ok(())
}

/// Write the species feature definition and the feature assignment.
///
/// Both are written even for an empty roster; the assignment then carries
/// an empty `pokemon` array.
pub fn write_shared_documents(layout: &OutputLayout, aspect: &Aspect, creatures: &[CreatureEntry]) -> Result<()> {
    let feature_path = layout.feature_file(&aspect.slug);
    documents::write_document(&feature_path, &documents::feature_definition(aspect))?;
    info!("wrote species feature {}", feature_path.display());

    let assignment_path = layout.assignment_file(&aspect.slug);
    documents::write_document(&assignment_path, &documents::feature_assignment(aspect, creatures))?;
    info!("wrote feature assignment {}", assignment_path.display());
    Ok(())
}

/// Create the creature's resolver directory and write its resolver document.
pub fn write_resolver(
    layout: &OutputLayout,
    aspect: &Aspect,
    creature: &CreatureEntry,
    order: &str,
) -> Result<PathBuf> {
    let resolver_dir = layout.resolver_dir(creature);
    fs::create_dir_all(&resolver_dir).with_context(|| format!("creating {}", resolver_dir.display()))?;

    let path = layout.resolver_file(creature, order, &aspect.slug);
    documents::write_document(&path, &documents::resolver(layout, aspect, creature, order))?;
    info!("wrote resolver {}", path.display());
    Ok(path)
}

/// Write the creature's spawn pool entry with a fresh random spawn id.
pub fn write_spawn_pool_entry(
    layout: &OutputLayout,
    aspect: &Aspect,
    creature: &CreatureEntry,
    settings: &SpawnSettings,
) -> Result<PathBuf> {
    let spawn_id = random_numeric_id(SPAWN_ID_LEN);
    let path = layout.spawn_pool_file(creature);
    documents::write_document(&path, &documents::spawn_pool_entry(aspect, creature, settings, &spawn_id))?;
    info!("wrote spawn pool entry {}", path.display());
    Ok(path)
}

/// Prompt for the seven spawn fields, with defaults on empty Enter.
///
/// Bucket, context, and level re-prompt until valid; maxSkyLight re-prompts
/// until it is >= minSkyLight.
fn collect_spawn_settings(input: &mut InputManager, creature: &CreatureEntry) -> Result<SpawnSettings> {
    let weight = input.ask_with_default("Enter spawn weight", DEFAULT_WEIGHT)?;
    let biome = input.ask_with_default("Enter biome name", DEFAULT_BIOME)?;
    let bucket = input.ask_choice(
        &format!("Choose a bucket for {} (common/uncommon/rare/ultra-rare)", creature.name),
        VALID_BUCKETS,
        DEFAULT_BUCKET,
    )?;
    let context = input.ask_choice(
        &format!(
            "Choose a context for {} (grounded/submerged/surface/fishing)",
            creature.name
        ),
        VALID_CONTEXTS,
        DEFAULT_CONTEXT,
    )?;
    let level = input.ask_level_range(
        &format!("Enter level range for {} (format: XX-YY, e.g. 30-50)", creature.name),
        DEFAULT_LEVEL,
    )?;
    let min_sky_light = input.ask_with_default(
        &format!("Enter minSkyLight for {}", creature.name),
        DEFAULT_MIN_SKY_LIGHT,
    )?;
    let max_sky_light = input.ask_max_sky_light(
        &format!("Enter maxSkyLight for {}", creature.name),
        DEFAULT_MAX_SKY_LIGHT,
        &min_sky_light,
    )?;

    Ok(SpawnSettings {
        weight,
        biome,
        bucket,
        context,
        level,
        min_sky_light,
        max_sky_light,
    })
}

fn print_summary(layout: &OutputLayout, aspect: &Aspect, creatures: &[CreatureEntry]) {
    println!(
        "\n{}",
        "Files generated successfully in the following directories:".heading_style()
    );
    println!(
        "- Species features: {}",
        layout.feature_file(&aspect.slug).display().to_string().path_style()
    );
    println!(
        "- Feature assignments: {}",
        layout.assignment_file(&aspect.slug).display().to_string().path_style()
    );
    println!("- Resolvers:");
    for creature in creatures {
        let pattern = layout
            .resolver_dir(creature)
            .join(format!("<RANDOM>_{}_{}.json", creature.slug, aspect.slug));
        println!("  - {}", pattern.display().to_string().path_style());
    }
    println!("- Textures copied to respective pokemon directories");
    println!("- Spawn pool files:");
    for creature in creatures {
        println!(
            "  - {}",
            layout.spawn_pool_file(creature).display().to_string().path_style()
        );
    }
}
