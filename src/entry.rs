//! The identity record: named entries with a strength and optional prose.
//!
//! An [`IdentityMap`] is the component's entire external input. It behaves
//! like a map with unique string keys but preserves insertion order, because
//! legend stacking and palette assignment follow the order entries arrive in.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One named item in the identity record.
///
/// `strength` is expected to lie in the plotted domain `[-10, 10]`; values
/// outside it are rendered unclamped and will land outside the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Primary numeric attribute; drives both position and marker size.
    #[serde(rename = "Strength")]
    pub strength: f64,
    /// Optional role or title text.
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional beliefs text.
    #[serde(rename = "Beliefs", default, skip_serializing_if = "Option::is_none")]
    pub beliefs: Option<String>,
    /// Optional style text.
    #[serde(rename = "Style", default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Entry {
    /// Create an entry with only a strength.
    pub fn new(strength: f64) -> Self {
        Self {
            strength,
            title: None,
            beliefs: None,
            style: None,
        }
    }

    /// Set the role/title text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the beliefs text.
    pub fn with_beliefs(mut self, beliefs: impl Into<String>) -> Self {
        self.beliefs = Some(beliefs.into());
        self
    }

    /// Set the style text.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Insertion-ordered mapping from entry name to [`Entry`].
///
/// Keys are unique; inserting an existing name replaces its entry in place
/// without changing its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityMap {
    entries: Vec<(String, Entry)>,
}

impl IdentityMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, replacing any existing entry with the same name.
    ///
    /// Returns the replaced entry, if any.
    pub fn insert(&mut self, name: impl Into<String>, entry: Entry) -> Option<Entry> {
        let name = name.into();
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == name)
        {
            return Some(std::mem::replace(&mut existing.1, entry));
        }
        self.entries.push((name, entry));
        None
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, entry)| entry)
    }

    /// Look up an entry by insertion position.
    pub fn get_index(&self, index: usize) -> Option<(&str, &Entry)> {
        self.entries
            .get(index)
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }
}

impl Serialize for IdentityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IdentityMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdentityMapVisitor;

        impl<'de> Visitor<'de> for IdentityMapVisitor {
            type Value = IdentityMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of entry names to entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = IdentityMap::new();
                while let Some((name, entry)) = access.next_entry::<String, Entry>()? {
                    map.insert(name, entry);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(IdentityMapVisitor)
    }
}

impl<N: Into<String>> FromIterator<(N, Entry)> for IdentityMap {
    fn from_iter<I: IntoIterator<Item = (N, Entry)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, entry) in iter {
            map.insert(name, entry);
        }
        map
    }
}
