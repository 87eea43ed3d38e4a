/// Normalize a display name into the lowercase identifier used in filenames.
///
/// Lowercases the input and keeps only ASCII letters, digits, and underscore;
/// everything else is dropped. Distinct names can sanitize to the same slug,
/// in which case later files silently overwrite earlier ones.
pub fn sanitize_name(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_lowercase_alphanumerics_and_underscore() {
        assert_eq!(sanitize_name("Mr. Mime"), "mrmime");
        assert_eq!(sanitize_name("Porygon-Z"), "porygonz");
        assert_eq!(sanitize_name("tapu_koko"), "tapu_koko");
    }

    #[test]
    fn output_alphabet_is_constrained() {
        let slug = sanitize_name("Flabébé #123!");
        assert!(slug.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_'));
    }

    #[test]
    fn sanitizing_is_idempotent() {
        for raw in ["Pikachu", "Mr. Mime", "NIDORAN♀", "  spaced out  "] {
            let once = sanitize_name(raw);
            assert_eq!(sanitize_name(&once), once);
        }
    }

    #[test]
    fn empty_and_symbol_only_names_sanitize_to_empty() {
        assert_eq!(sanitize_name(""), "");
        assert_eq!(sanitize_name("!?."), "");
    }
}
