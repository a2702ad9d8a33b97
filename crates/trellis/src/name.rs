use std::fmt;

use convert_case::{Case, Casing};

/// A widget label made of lowercase ASCII alphanumerics and underscores,
/// shown in display lists and tree dumps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetName(String);

impl WidgetName {
    /// Munge any string into a name: snake case it, then drop every
    /// character outside `[a-z0-9_]`. Falls back to `widget` if nothing is
    /// left.
    pub fn convert(name: &str) -> Self {
        let name: String = name
            .to_case(Case::Snake)
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
            .collect();
        if name.is_empty() {
            Self("widget".into())
        } else {
            Self(name)
        }
    }
}

impl fmt::Display for WidgetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for WidgetName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
