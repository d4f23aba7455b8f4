//! Properties and the sink they are applied to.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;

use crate::PropValue;

/// The rendering framework's property setter.
///
/// Implement this for whatever owns the element being configured;
/// a [`Property`] only knows how to call it.
pub trait PropertySink {
    /// Set property `name` to `value` on the current element.
    fn set_property(&mut self, name: &str, value: &PropValue);
}

/// A named attribute value, ready to be applied to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: Cow<'static, str>,
    value: PropValue,
}

impl Property {
    /// Create a new property.
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Get the property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the property value.
    pub fn value(&self) -> &PropValue {
        &self.value
    }

    /// Forward this property to a sink.
    pub fn apply(&self, sink: &mut (impl PropertySink + ?Sized)) {
        tracing::trace!(name = %self.name, value = %self.value, "set property");
        sink.set_property(&self.name, &self.value);
    }

    /// Consume the property and return its parts.
    pub fn into_parts(self) -> (String, PropValue) {
        (self.name.into_owned(), self.value)
    }
}

/// Insertion-ordered property store.
///
/// Setting a property twice keeps its original position and replaces
/// the value, matching how an element holds at most one value per name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyMap {
    entries: IndexMap<String, PropValue>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every property in order.
    pub fn extend<'a>(&mut self, properties: impl IntoIterator<Item = &'a Property>) -> &mut Self {
        for property in properties {
            property.apply(self);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PropertySink for PropertyMap {
    fn set_property(&mut self, name: &str, value: &PropValue) {
        self.entries.insert(name.to_string(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_forwards_name_and_value() {
        struct Recorder(Vec<(String, PropValue)>);
        impl PropertySink for Recorder {
            fn set_property(&mut self, name: &str, value: &PropValue) {
                self.0.push((name.to_string(), value.clone()));
            }
        }

        let mut recorder = Recorder(Vec::new());
        Property::new("href", "https://example.com").apply(&mut recorder);
        Property::new("hidden", true).apply(&mut recorder);

        assert_eq!(
            recorder.0,
            vec![
                ("href".to_string(), PropValue::from("https://example.com")),
                ("hidden".to_string(), PropValue::Bool(true)),
            ]
        );
    }

    #[test]
    fn test_map_keeps_first_position() {
        let mut map = PropertyMap::new();
        map.extend(&[
            Property::new("id", "a"),
            Property::new("class", "x"),
            Property::new("id", "b"),
        ]);

        let names: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["id", "class"]);
        assert_eq!(map.get("id"), Some(&PropValue::from("b")));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_into_parts() {
        let (name, value) = Property::new(String::from("data-x"), 3i64).into_parts();
        assert_eq!(name, "data-x");
        assert_eq!(value, PropValue::Int(3));
    }
}
