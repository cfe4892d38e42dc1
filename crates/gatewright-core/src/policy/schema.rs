use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Top-level policy file shape.
#[derive(Debug, Deserialize)]
pub struct PolicyFile {
    pub data_access_controls: CategoryMap,
}

/// The policy document: data categories in author order.
///
/// Emitted constraints must line up with the document's own mapping order,
/// so the mapping is kept as a vector of pairs instead of a keyed map.
#[derive(Debug, Default)]
pub struct CategoryMap(Vec<(String, CategoryConfig)>);

impl CategoryMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Categories in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryConfig)> {
        self.0.iter().map(|(name, config)| (name.as_str(), config))
    }
}

impl FromIterator<(String, CategoryConfig)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (String, CategoryConfig)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for CategoryMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoryMapVisitor;

        impl<'de> Visitor<'de> for CategoryMapVisitor {
            type Value = CategoryMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of category name to category config")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, CategoryConfig>()? {
                    entries.push(entry);
                }
                Ok(CategoryMap(entries))
            }
        }

        deserializer.deserialize_map(CategoryMapVisitor)
    }
}

/// Per-category access config. Only `allowed_access` is consumed; other
/// fields an author adds (descriptions, review owners, ...) pass through
/// unrecognized and ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryConfig {
    #[serde(default)]
    pub allowed_access: Vec<AccessRule>,
}

/// One allowed-access entry. `from` names the source namespace and is the
/// only required field; rule qualifiers (actions, conditions, ...) are
/// irrelevant to constraint generation.
#[derive(Debug, Deserialize)]
pub struct AccessRule {
    pub from: String,
}
