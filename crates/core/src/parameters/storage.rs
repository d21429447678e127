//! Fixed-capacity parameter table
//!
//! Parameters are registered once with a typed default. Later writes must
//! keep that type; `NAME=VALUE` overrides are parsed against it. The table
//! is heap-free so it can be filled before any other state exists.

use super::error::ParameterError;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
pub const MAX_PARAMS: usize = 32;

type ParamName = String<PARAM_NAME_LEN>;

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i32),
    Float(f32),
}

impl ParamValue {
    /// True if `other` is the same variant
    pub fn same_type(&self, other: &ParamValue) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    /// Parse `text` as the same variant as `self`
    pub fn parse_like(&self, text: &str) -> Result<ParamValue, ParameterError> {
        let text = text.trim();
        match self {
            ParamValue::Bool(_) => match text {
                "1" | "true" => Ok(ParamValue::Bool(true)),
                "0" | "false" => Ok(ParamValue::Bool(false)),
                _ => Err(ParameterError::InvalidValue),
            },
            ParamValue::Int(_) => text
                .parse::<i32>()
                .map(ParamValue::Int)
                .map_err(|_| ParameterError::InvalidValue),
            ParamValue::Float(_) => text
                .parse::<f32>()
                .map(ParamValue::Float)
                .map_err(|_| ParameterError::InvalidValue),
        }
    }
}

impl core::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    value: ParamValue,
    default: ParamValue,
}

/// One row of [`ParameterStore::iter`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamEntry<'a> {
    pub name: &'a str,
    pub value: ParamValue,
    /// False once the value differs from the registered default
    pub is_default: bool,
}

/// Named, typed parameter values with their registered defaults
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    entries: FnvIndexMap<ParamName, Entry, MAX_PARAMS>,
}

fn key(name: &str) -> Result<ParamName, ParameterError> {
    let mut key = ParamName::new();
    key.push_str(name)
        .map_err(|_| ParameterError::UnknownParameter)?;
    Ok(key)
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = key(name).ok()?;
        self.entries.get(&key).map(|entry| &entry.value)
    }

    /// Overwrite a registered value; the type must not change
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let entry = self
            .entries
            .get_mut(&key(name)?)
            .ok_or(ParameterError::UnknownParameter)?;
        if !entry.value.same_type(&value) {
            return Err(ParameterError::InvalidValue);
        }
        entry.value = value;
        Ok(())
    }

    /// Parse and apply a `NAME=VALUE` override
    pub fn apply_override(&mut self, assignment: &str) -> Result<(), ParameterError> {
        let (name, text) = assignment
            .split_once('=')
            .ok_or(ParameterError::InvalidValue)?;
        let name = name.trim();
        let current = *self.get(name).ok_or(ParameterError::UnknownParameter)?;
        self.set(name, current.parse_like(text)?)
    }

    /// Add a parameter with its default
    ///
    /// Registering an existing name keeps the current value.
    pub fn register(&mut self, name: &str, default: ParamValue) -> Result<(), ParameterError> {
        let key = key(name).map_err(|_| ParameterError::InvalidConfig)?;
        if self.entries.contains_key(&key) {
            return Ok(());
        }
        self.entries
            .insert(
                key,
                Entry {
                    value: default,
                    default,
                },
            )
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Registered parameters in registration order
    pub fn iter(&self) -> impl Iterator<Item = ParamEntry<'_>> {
        self.entries.iter().map(|(name, entry)| ParamEntry {
            name: name.as_str(),
            value: entry.value,
            is_default: entry.value == entry.default,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load a float parameter from store with clamping
pub(crate) fn load_float(
    store: &ParameterStore,
    name: &str,
    default: f32,
    min: f32,
    max: f32,
) -> f32 {
    match store.get(name) {
        Some(ParamValue::Float(v)) => v.clamp(min, max),
        Some(ParamValue::Int(v)) => (*v as f32).clamp(min, max),
        _ => default,
    }
}

/// Load an integer parameter from store with clamping
pub(crate) fn load_int(store: &ParameterStore, name: &str, default: i32, min: i32, max: i32) -> i32 {
    match store.get(name) {
        Some(ParamValue::Int(v)) => (*v).clamp(min, max),
        _ => default,
    }
}
