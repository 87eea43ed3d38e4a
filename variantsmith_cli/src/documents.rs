//! Builders and serialization for the generated JSON documents.
//!
//! Builders are pure mappings from collected input to the schemas in
//! `variantsmith_data`; [`write_document`] handles serialization. Writes are
//! not transactional: a failure partway through a run leaves earlier files
//! on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use variantsmith_data::{
    FeatureAssignmentDef, ResolverDef, SpawnConditionDef, SpawnPoolEntryDef, SpeciesFeatureDef, VariationDef,
};

use crate::aspect::Aspect;
use crate::creature::CreatureEntry;
use crate::generator::SpawnSettings;
use crate::layout::{NAMESPACE, OutputLayout};

/// Species feature flag document for the aspect.
pub fn feature_definition(aspect: &Aspect) -> SpeciesFeatureDef {
    SpeciesFeatureDef::flag(&aspect.name)
}

/// Assignment of the aspect feature to every creature in the roster.
///
/// An empty roster still produces a valid document with an empty `pokemon`
/// array.
pub fn feature_assignment(aspect: &Aspect, creatures: &[CreatureEntry]) -> FeatureAssignmentDef {
    FeatureAssignmentDef {
        pokemon: creatures.iter().map(|c| c.name.clone()).collect(),
        features: vec![aspect.name.clone()],
    }
}

/// Resolver document routing the aspect to the creature's variant texture.
pub fn resolver(layout: &OutputLayout, aspect: &Aspect, creature: &CreatureEntry, order: &str) -> ResolverDef {
    ResolverDef {
        species: format!("{NAMESPACE}:{}", creature.name),
        order: order.to_string(),
        variations: vec![VariationDef {
            aspects: vec![aspect.name.clone()],
            texture: layout.texture_reference(creature, &aspect.slug),
        }],
    }
}

/// Spawn pool entry for one creature, from the interactively collected
/// settings and a fresh random spawn id.
pub fn spawn_pool_entry(
    aspect: &Aspect,
    creature: &CreatureEntry,
    settings: &SpawnSettings,
    spawn_id: &str,
) -> SpawnPoolEntryDef {
    SpawnPoolEntryDef {
        id: format!("{}-{}-{spawn_id}", creature.name, aspect.slug),
        pokemon: format!("{} {}=true", creature.name, aspect.name),
        presets: vec!["natural".to_string()],
        kind: "pokemon".to_string(),
        context: settings.context.clone(),
        bucket: settings.bucket.clone(),
        level: settings.level.clone(),
        weight: settings.weight.clone(),
        condition: SpawnConditionDef {
            min_sky_light: settings.min_sky_light.clone(),
            max_sky_light: settings.max_sky_light.clone(),
            biomes: vec![settings.biome.clone()],
        },
    }
}

/// Serialize a document with 2-space indentation and write it to `path`.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(document).with_context(|| format!("serializing {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
