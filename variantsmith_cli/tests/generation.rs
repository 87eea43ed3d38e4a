//! Filesystem-level tests for the non-interactive half of the generation
//! pass, run against tempdir roots.

use std::fs;

use serde_json::Value;
use variantsmith_cli::creature::CreatureEntry;
use variantsmith_cli::generator::{SpawnSettings, write_resolver, write_shared_documents, write_spawn_pool_entry};
use variantsmith_cli::{Aspect, OutputLayout};

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn shared_documents_land_in_the_expected_tree() {
    let root = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(root.path());
    layout.ensure_directories().unwrap();

    let aspect = Aspect::new("Shiny");
    let creatures = vec![CreatureEntry::new("25", "Pikachu"), CreatureEntry::new("26", "Raichu")];
    write_shared_documents(&layout, &aspect, &creatures).unwrap();

    let feature = read_json(&layout.feature_file("shiny"));
    assert_eq!(feature["keys"][0], "Shiny");
    assert_eq!(feature["type"], "flag");
    assert_eq!(feature["isAspect"], true);
    assert_eq!(feature["default"], false);

    let assignment = read_json(&layout.assignment_file("shiny"));
    assert_eq!(assignment["pokemon"][0], "Pikachu");
    assert_eq!(assignment["pokemon"][1], "Raichu");
    assert_eq!(assignment["features"][0], "Shiny");
}

#[test]
fn empty_roster_still_writes_shared_documents() {
    let root = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(root.path());
    layout.ensure_directories().unwrap();

    let aspect = Aspect::new("Shiny");
    write_shared_documents(&layout, &aspect, &[]).unwrap();

    let assignment = read_json(&layout.assignment_file("shiny"));
    assert_eq!(assignment["pokemon"].as_array().unwrap().len(), 0);
    assert_eq!(assignment["features"].as_array().unwrap().len(), 1);
}

#[test]
fn resolver_file_lands_in_per_creature_directory() {
    let root = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(root.path());
    layout.ensure_directories().unwrap();

    let aspect = Aspect::new("Shiny");
    let pikachu = CreatureEntry::new("25", "Pikachu");
    let path = write_resolver(&layout, &aspect, &pikachu, "90817261").unwrap();

    assert!(path.ends_with("25_pikachu/90817261_pikachu_shiny.json"));
    let doc = read_json(&path);
    assert_eq!(doc["species"], "cobblemon:Pikachu");
    assert_eq!(doc["order"], "90817261");
    assert_eq!(
        doc["variations"][0]["texture"],
        "cobblemon:textures/pokemon/25_pikachu/pikachu_shiny.png"
    );
}

#[test]
fn spawn_pool_entry_carries_collected_settings() {
    let root = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(root.path());
    layout.ensure_directories().unwrap();

    let aspect = Aspect::new("Shiny");
    let pikachu = CreatureEntry::new("25", "Pikachu");
    let settings = SpawnSettings {
        bucket: "rare".into(),
        level: "30-50".into(),
        ..SpawnSettings::default()
    };
    let path = write_spawn_pool_entry(&layout, &aspect, &pikachu, &settings).unwrap();

    assert!(path.ends_with("spawn_pool_world/25_pikachu.json"));
    let doc = read_json(&path);
    assert_eq!(doc["pokemon"], "Pikachu Shiny=true");
    assert_eq!(doc["bucket"], "rare");
    assert_eq!(doc["level"], "30-50");
    assert_eq!(doc["weight"], "5");
    assert_eq!(doc["condition"]["minSkyLight"], "8");
    assert_eq!(doc["condition"]["maxSkyLight"], "15");
    let id = doc["id"].as_str().unwrap();
    assert!(id.starts_with("Pikachu-shiny-"));
    let suffix = id.rsplit('-').next().unwrap();
    assert_eq!(suffix.len(), 6);
    assert!(suffix.chars().all(|ch| ch.is_ascii_digit()));
}

#[test]
fn rerun_overwrites_shared_documents_deterministically() {
    let root = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(root.path());
    layout.ensure_directories().unwrap();

    let aspect = Aspect::new("Shiny");
    let creatures = vec![CreatureEntry::new("25", "Pikachu")];

    write_shared_documents(&layout, &aspect, &creatures).unwrap();
    let first = fs::read_to_string(layout.assignment_file("shiny")).unwrap();
    write_shared_documents(&layout, &aspect, &creatures).unwrap();
    let second = fs::read_to_string(layout.assignment_file("shiny")).unwrap();
    assert_eq!(first, second);

    // Only the random order key differs between resolver runs.
    let path_a = write_resolver(&layout, &aspect, &creatures[0], "11111111").unwrap();
    let path_b = write_resolver(&layout, &aspect, &creatures[0], "22222222").unwrap();
    let doc_a = read_json(&path_a);
    let doc_b = read_json(&path_b);
    assert_ne!(doc_a["order"], doc_b["order"]);
    assert_eq!(doc_a["species"], doc_b["species"]);
    assert_eq!(doc_a["variations"], doc_b["variations"]);
}

#[test]
fn documents_use_two_space_indentation() {
    let root = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(root.path());
    layout.ensure_directories().unwrap();

    let aspect = Aspect::new("Shiny");
    write_shared_documents(&layout, &aspect, &[]).unwrap();

    let raw = fs::read_to_string(layout.feature_file("shiny")).unwrap();
    assert!(raw.starts_with("{\n  \"keys\""));
    assert!(!raw.ends_with('\n'));
}
