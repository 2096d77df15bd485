// File: crates/grid-core/src/style.rs
// Summary: Ordered attribute maps attached to rendered primitives, with override merging.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single attribute value. Numbers keep their numeric form so they print as `1` or `0.1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl AttrValue {
    /// Numeric value; text such as `"2"` or `"1.5px"` is parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(s) => s.trim().trim_end_matches("px").trim_end().parse().ok(),
            AttrValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self { AttrValue::Number(v) }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self { AttrValue::Number(v as f64) }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self { AttrValue::Bool(v) }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self { AttrValue::Text(v.to_string()) }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self { AttrValue::Text(v) }
}

/// Insertion-ordered attribute map. Setting an existing key replaces its value
/// in place, so a merge keeps first-seen key order and lets later values win.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(String, AttrValue)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleMap::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Apply every entry of `overrides` on top of `self`.
    pub fn merge(&mut self, overrides: &StyleMap) {
        for (k, v) in &overrides.entries {
            self.set(k.clone(), v.clone());
        }
    }

    pub fn merged(&self, overrides: &StyleMap) -> StyleMap {
        let mut out = self.clone();
        out.merge(overrides);
        out
    }

    /// Look up a presentation property, letting an inline `style` declaration
    /// (`"fill:none; stroke:#000"`) take precedence over the plain attribute.
    pub fn property(&self, name: &str) -> Option<String> {
        self.inline(name).or_else(|| self.attribute(name).map(AttrValue::to_string))
    }

    /// Numeric presentation property with the same precedence as [`StyleMap::property`].
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.inline(name) {
            Some(v) => AttrValue::Text(v).as_f64(),
            None => self.attribute(name).and_then(AttrValue::as_f64),
        }
    }

    fn inline(&self, name: &str) -> Option<String> {
        self.get("style").and_then(|style| {
            declarations(&style.to_string())
                .into_iter()
                .rev()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v)
        })
    }

    fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.iter()
            .find(|(k, _)| *k == name || kebab_case(k) == name)
            .map(|(_, v)| v)
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleMapVisitor;

        impl<'de> Visitor<'de> for StyleMapVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of attribute names to string, number or boolean values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleMap, A::Error> {
                let mut out = StyleMap::new();
                while let Some((k, v)) = access.next_entry::<String, AttrValue>()? {
                    out.set(k, v);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(StyleMapVisitor)
    }
}

/// `strokeWidth` -> `stroke-width`. Already-kebab names pass through.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Split a CSS declaration list into trimmed `(property, value)` pairs.
pub fn declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (k, v) = decl.split_once(':')?;
            let k = k.trim();
            if k.is_empty() { return None; }
            Some((k.to_ascii_lowercase(), v.trim().to_string()))
        })
        .collect()
}
