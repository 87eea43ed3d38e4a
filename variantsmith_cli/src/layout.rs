//! Output path layout for the generated asset pack.
//!
//! Every generated path hangs off a single root directory (the working
//! directory in normal use, a temp dir in tests). The namespace is fixed:
//! the documents are consumed by the Cobblemon loader under `cobblemon`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creature::CreatureEntry;

/// Namespace all data and asset paths are generated under.
pub const NAMESPACE: &str = "cobblemon";

/// Resolved directory layout for one generation run.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn species_features_dir(&self) -> PathBuf {
        self.root.join(format!("output/data/{NAMESPACE}/species_features"))
    }

    pub fn assignments_dir(&self) -> PathBuf {
        self.root
            .join(format!("output/data/{NAMESPACE}/species_feature_assignments"))
    }

    pub fn resolvers_base_dir(&self) -> PathBuf {
        self.root
            .join(format!("output/assets/{NAMESPACE}/bedrock/pokemon/resolvers"))
    }

    pub fn textures_base_dir(&self) -> PathBuf {
        self.root.join(format!("output/assets/{NAMESPACE}/textures/pokemon"))
    }

    pub fn spawn_pool_dir(&self) -> PathBuf {
        self.root.join(format!("output/data/{NAMESPACE}/spawn_pool_world"))
    }

    /// Source directory textures are copied from, by convention
    /// `textures/<aspect display name>` under the root.
    pub fn texture_source_dir(&self, aspect_name: &str) -> PathBuf {
        self.root.join("textures").join(aspect_name)
    }

    pub fn feature_file(&self, aspect_slug: &str) -> PathBuf {
        self.species_features_dir().join(format!("{aspect_slug}.json"))
    }

    pub fn assignment_file(&self, aspect_slug: &str) -> PathBuf {
        self.assignments_dir().join(format!("{aspect_slug}_assignment.json"))
    }

    pub fn resolver_dir(&self, creature: &CreatureEntry) -> PathBuf {
        self.resolvers_base_dir().join(creature.dir_fragment())
    }

    pub fn resolver_file(&self, creature: &CreatureEntry, order: &str, aspect_slug: &str) -> PathBuf {
        self.resolver_dir(creature)
            .join(format!("{order}_{}_{aspect_slug}.json", creature.slug))
    }

    pub fn texture_dir(&self, creature: &CreatureEntry) -> PathBuf {
        self.textures_base_dir().join(creature.dir_fragment())
    }

    pub fn texture_file(&self, creature: &CreatureEntry, aspect_slug: &str) -> PathBuf {
        self.texture_dir(creature)
            .join(format!("{}_{aspect_slug}.png", creature.slug))
    }

    pub fn spawn_pool_file(&self, creature: &CreatureEntry) -> PathBuf {
        self.spawn_pool_dir().join(format!("{}.json", creature.dir_fragment()))
    }

    /// In-document texture reference for a resolver variation.
    pub fn texture_reference(&self, creature: &CreatureEntry, aspect_slug: &str) -> String {
        format!(
            "{NAMESPACE}:textures/pokemon/{}/{}_{aspect_slug}.png",
            creature.dir_fragment(),
            creature.slug
        )
    }

    /// Create the five shared output directories.
    ///
    /// Per-creature resolver and texture directories are created later, as
    /// each creature is processed.
    ///
    /// # Errors
    /// Returns an error if any directory cannot be created.
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [
            self.species_features_dir(),
            self.assignments_dir(),
            self.resolvers_base_dir(),
            self.textures_base_dir(),
            self.spawn_pool_dir(),
        ] {
            fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        Ok(())
    }
}
