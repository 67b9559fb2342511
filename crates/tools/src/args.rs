//! Typed access to a tool's argument object.

use crate::error::ToolError;
use serde_json::{Map, Value};
use std::str::FromStr;

pub struct Args<'a> {
    inner: &'a Map<String, Value>,
}

impl<'a> Args<'a> {
    pub fn new(inner: &'a Map<String, Value>) -> Self {
        Self { inner }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        // An explicit null counts as absent.
        self.inner.get(key).filter(|v| !v.is_null())
    }

    fn missing(key: &str) -> ToolError {
        ToolError::InvalidArguments(format!("Missing required argument: {}", key))
    }

    fn mistyped(key: &str, expected: &str) -> ToolError {
        ToolError::InvalidArguments(format!("Argument '{}' must be {}", key, expected))
    }

    pub fn required_str(&self, key: &str) -> Result<&'a str, ToolError> {
        match self.get(key) {
            None => Err(Self::missing(key)),
            Some(v) => v.as_str().ok_or_else(|| Self::mistyped(key, "a string")),
        }
    }

    pub fn optional_str(&self, key: &str) -> Result<Option<&'a str>, ToolError> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(Some)
                .ok_or_else(|| Self::mistyped(key, "a string")),
        }
    }

    pub fn required_bool(&self, key: &str) -> Result<bool, ToolError> {
        match self.get(key) {
            None => Err(Self::missing(key)),
            Some(v) => v.as_bool().ok_or_else(|| Self::mistyped(key, "a boolean")),
        }
    }

    pub fn optional_bool(&self, key: &str, default: bool) -> Result<bool, ToolError> {
        match self.get(key) {
            None => Ok(default),
            Some(v) => v.as_bool().ok_or_else(|| Self::mistyped(key, "a boolean")),
        }
    }

    /// Integer argument constrained to `min..=max`.
    pub fn optional_int(
        &self,
        key: &str,
        default: u64,
        min: u64,
        max: Option<u64>,
    ) -> Result<u64, ToolError> {
        let value = match self.get(key) {
            None => return Ok(default),
            Some(v) => v
                .as_u64()
                .ok_or_else(|| Self::mistyped(key, "a non-negative integer"))?,
        };
        let too_big = max.map_or(false, |max| value > max);
        if value < min || too_big {
            let bounds = match max {
                Some(max) => format!("between {} and {}", min, max),
                None => format!("at least {}", min),
            };
            return Err(ToolError::InvalidArguments(format!(
                "Invalid {}: {}. Must be {}",
                key, value, bounds
            )));
        }
        Ok(value)
    }

    pub fn required_object(&self, key: &str) -> Result<&'a Value, ToolError> {
        match self.get(key) {
            None => Err(Self::missing(key)),
            Some(v) if v.is_object() => Ok(v),
            Some(_) => Err(Self::mistyped(key, "an object")),
        }
    }

    pub fn required_str_list(&self, key: &str) -> Result<Vec<&'a str>, ToolError> {
        let items = match self.get(key) {
            None => return Err(Self::missing(key)),
            Some(v) => v
                .as_array()
                .ok_or_else(|| Self::mistyped(key, "an array of strings"))?,
        };
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(|| Self::mistyped(key, "an array of strings"))
            })
            .collect()
    }

    /// String argument parsed into one of a fixed set of values.
    pub fn required_enum<T>(&self, key: &str) -> Result<T, ToolError>
    where
        T: FromStr<Err = String>,
    {
        self.required_str(key)?
            .parse()
            .map_err(ToolError::InvalidArguments)
    }

    pub fn optional_enum<T>(&self, key: &str) -> Result<Option<T>, ToolError>
    where
        T: FromStr<Err = String>,
    {
        self.optional_str(key)?
            .map(|s| s.parse().map_err(ToolError::InvalidArguments))
            .transpose()
    }
}
