use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::GridError;

pub struct PropertyConstants;

impl PropertyConstants {
    pub const PROPERTY_DIVIDER: char = '.';
    pub const GRIDS: &'static str = "grids";
    pub const ENABLED: &'static str = "enabled";
    pub const MIN_ZOOM: &'static str = "min_zoom";
    pub const MAX_ZOOM: &'static str = "max_zoom";
    pub const LINES: &'static str = "lines";
    pub const COLOR: &'static str = "color";
    pub const WIDTH: &'static str = "width";
    pub const LABELER: &'static str = "labeler";
    pub const TEXT_SIZE: &'static str = "text_size";
    pub const BUFFER: &'static str = "buffer";
}

/// Joins key path segments with the property divider, skipping empty segments.
pub fn build_property(path: &[&str]) -> String {
    let mut combined = String::new();
    for segment in path.iter().filter(|segment| !segment.is_empty()) {
        if !combined.is_empty() {
            combined.push(PropertyConstants::PROPERTY_DIVIDER);
        }
        combined.push_str(segment);
    }
    combined
}

/// Synchronous key to value lookup of grid configuration.
///
/// Blank values are treated as missing. A missing value is an error only
/// when `required` is set.
pub trait GridProperties {
    fn get_value(&self, key: &str) -> Option<&str>;

    fn get_property(&self, required: bool, path: &[&str]) -> Result<Option<String>, GridError> {
        let key = build_property(path);
        let value = self
            .get_value(&key)
            .map(str::trim)
            .filter(|value| !value.is_empty());
        match value {
            Some(value) => Ok(Some(value.to_string())),
            None if required => Err(GridError::MissingProperty(key)),
            None => Ok(None),
        }
    }

    fn get_integer_property(&self, required: bool, path: &[&str]) -> Result<Option<i32>, GridError> {
        parse_property(self.get_property(required, path)?, path)
    }

    fn get_zoom_property(&self, required: bool, path: &[&str]) -> Result<Option<u8>, GridError> {
        parse_property(self.get_property(required, path)?, path)
    }

    fn get_double_property(&self, required: bool, path: &[&str]) -> Result<Option<f64>, GridError> {
        parse_property(self.get_property(required, path)?, path)
    }

    /// Anything other than a case insensitive `true` reads as false.
    fn get_boolean_property(&self, required: bool, path: &[&str]) -> Result<Option<bool>, GridError> {
        Ok(self
            .get_property(required, path)?
            .map(|value| value.eq_ignore_ascii_case("true")))
    }
}

fn parse_property<V: FromStr>(value: Option<String>, path: &[&str]) -> Result<Option<V>, GridError> {
    value
        .map(|value| {
            value.parse::<V>().map_err(|_| GridError::InvalidProperty {
                key: build_property(path),
                value,
            })
        })
        .transpose()
}

/// In memory property source.
#[derive(Debug, Clone, Default)]
pub struct MapProperties {
    properties: HashMap<String, String>,
}

impl MapProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl GridProperties for MapProperties {
    fn get_value(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
