use serde::{Deserialize, Serialize};

/// Species feature definition enabling an aspect flag on a species.
///
/// Serialized field names and ordering are consumed byte-for-byte by the
/// game engine and must not change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeciesFeatureDef {
    pub keys: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "isAspect")]
    pub is_aspect: bool,
    pub default: bool,
}

impl SpeciesFeatureDef {
    /// Build the standard boolean flag feature for an aspect name.
    pub fn flag(aspect_name: &str) -> Self {
        Self {
            keys: vec![aspect_name.to_string()],
            kind: "flag".to_string(),
            is_aspect: true,
            default: false,
        }
    }
}

/// Assignment of one or more features to a list of species names.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FeatureAssignmentDef {
    pub pokemon: Vec<String>,
    pub features: Vec<String>,
}

/// Resolver document mapping a species + aspect combination to a texture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverDef {
    pub species: String,
    pub order: String,
    pub variations: Vec<VariationDef>,
}

/// Single variation entry within a resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariationDef {
    pub aspects: Vec<String>,
    pub texture: String,
}

/// Spawn pool entry controlling where and how a variant appears in-world.
///
/// All numeric-looking values are carried as strings, exactly as collected
/// from the prompts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpawnPoolEntryDef {
    pub id: String,
    pub pokemon: String,
    pub presets: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub context: String,
    pub bucket: String,
    pub level: String,
    pub weight: String,
    pub condition: SpawnConditionDef,
}

/// Environmental conditions attached to a spawn pool entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpawnConditionDef {
    #[serde(rename = "minSkyLight")]
    pub min_sky_light: String,
    #[serde(rename = "maxSkyLight")]
    pub max_sky_light: String,
    pub biomes: Vec<String>,
}
