use crate::slug::sanitize_name;

/// A cosmetic variant flag, e.g. "Shiny".
///
/// The display name appears inside the generated documents; the slug is
/// used for filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aspect {
    pub name: String,
    pub slug: String,
}

impl Aspect {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: sanitize_name(name),
        }
    }
}
