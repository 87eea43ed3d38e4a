use variantsmith_cli as vs;
use vs::creature::{CreatureEntry, parse_roster};
use vs::prompt::{is_valid_level_range, sky_light_bounds_ok};
use vs::slug::sanitize_name;

#[test]
fn test_sanitize_idempotent() {
    for raw in ["Shiny", "Mr. Mime", "Porygon-Z", "NIDORAN♀", "already_clean_42"] {
        let once = sanitize_name(raw);
        assert_eq!(sanitize_name(&once), once);
        assert!(once.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_'));
    }
}

#[test]
fn test_roster_preserves_input_order() {
    let entries = parse_roster("1_Pikachu, 2_Raichu");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].slug, "pikachu");
    assert_eq!(entries[1].slug, "raichu");
}

#[test]
fn test_roster_drops_invalid_tokens() {
    let entries = parse_roster("bad");
    assert!(entries.is_empty());
}

#[test]
fn test_level_range_validator() {
    assert!(!is_valid_level_range("30"));
    assert!(is_valid_level_range("30-50"));
}

#[test]
fn test_sky_light_validator() {
    assert!(!sky_light_bounds_ok("8", "7").unwrap());
    assert!(sky_light_bounds_ok("8", "8").unwrap());
}

#[test]
fn test_resolver_document_fields() {
    let layout = vs::OutputLayout::new(".");
    let aspect = vs::Aspect::new("Shiny");
    let pikachu = CreatureEntry::new("25", "Pikachu");
    let doc = vs::documents::resolver(&layout, &aspect, &pikachu, "55512345");
    assert_eq!(doc.species, "cobblemon:Pikachu");
    assert_eq!(doc.variations[0].aspects, vec!["Shiny"]);
    assert!(doc.variations[0].texture.contains("25_pikachu"));
    assert!(doc.variations[0].texture.contains("pikachu_shiny"));
}

#[test]
fn test_lib_version() {
    assert!(!vs::VARIANTSMITH_VERSION.is_empty());
}

#[test]
fn test_default_spawn_settings_match_prompt_defaults() {
    let settings = vs::SpawnSettings::default();
    assert_eq!(settings.weight, "5");
    assert_eq!(settings.biome, "#cobblemon:is_sandy");
    assert_eq!(settings.bucket, "common");
    assert_eq!(settings.context, "grounded");
    assert_eq!(settings.level, "5-31");
    assert_eq!(settings.min_sky_light, "8");
    assert_eq!(settings.max_sky_light, "15");
}
