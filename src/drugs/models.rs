use std::collections::HashMap;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


/// A label section: either one string or a list of strings.
///
/// Any other JSON shape is coerced to text when deserialized so that
/// inconsistent upstream data never fails a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "Value")]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    /// Lists are joined with single spaces.
    #[must_use]
    pub fn flatten(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(" "),
        }
    }
}

impl From<Value> for TextOrList {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::List(items.into_iter().map(value_to_text).collect()),
            other => Self::Text(value_to_text(other)),
        }
    }
}

impl From<&str> for TextOrList {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<&str>> for TextOrList {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}


/// One drug label, sections kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct DrugEntry {
    sections: Vec<(String, TextOrList)>,
}

impl DrugEntry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_section(mut self, name: &str, value: impl Into<TextOrList>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<TextOrList>) {
        let value = value.into();
        match self.sections.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.sections.push((name.to_string(), value)),
        }
    }

    pub fn section(&self, name: &str) -> Option<&TextOrList> {
        self.sections.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &TextOrList)> {
        self.sections.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Every section flattened and joined with single spaces, whitespace untouched.
    #[must_use]
    pub fn combined_text(&self) -> String {
        self.sections
            .iter()
            .map(|(_, value)| value.flatten())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Value> for DrugEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self {
                sections: map
                    .into_iter()
                    .map(|(name, v)| (name, TextOrList::from(v)))
                    .collect(),
            },
            Value::Null => Self::default(),
            other => Self::new().with_section("description", TextOrList::from(other)),
        }
    }
}

impl Serialize for DrugEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, value) in &self.sections {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}


/// Drug name to label, in knowledge base order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct DrugMap {
    drugs: Vec<(String, DrugEntry)>,
}

impl DrugMap {
    #[must_use]
    pub const fn new() -> Self {
        Self { drugs: Vec::new() }
    }

    #[must_use]
    pub fn with_drug(mut self, name: &str, entry: DrugEntry) -> Self {
        self.insert(name, entry);
        self
    }

    pub fn insert(&mut self, name: &str, entry: DrugEntry) {
        match self.drugs.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = entry,
            None => self.drugs.push((name.to_string(), entry)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&DrugEntry> {
        self.drugs.iter().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DrugEntry)> {
        self.drugs.iter().map(|(n, e)| (n.as_str(), e))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.drugs.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }
}

impl From<Map<String, Value>> for DrugMap {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            drugs: map
                .into_iter()
                .map(|(name, value)| (name, DrugEntry::from(value)))
                .collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, DrugEntry)> for DrugMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, DrugEntry)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, entry) in iter {
            map.insert(name, entry);
        }
        map
    }
}

impl Serialize for DrugMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.drugs.len()))?;
        for (name, entry) in &self.drugs {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}


/// Condition label to drugs. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    conditions: HashMap<String, DrugMap>,
}

impl KnowledgeBase {
    #[must_use]
    pub fn new(conditions: HashMap<String, DrugMap>) -> Self {
        Self { conditions }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn drugs_for(&self, condition: &str) -> Option<&DrugMap> {
        self.conditions.get(condition)
    }

    pub fn conditions(&self) -> impl Iterator<Item = &str> {
        self.conditions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn drug_count(&self) -> usize {
        self.conditions.values().map(DrugMap::len).sum()
    }
}

impl FromIterator<(String, DrugMap)> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = (String, DrugMap)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedDrug {
    pub name: String,
    pub score: usize,
}
