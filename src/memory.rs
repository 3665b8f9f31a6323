use crate::property::{PropertyError, PropertyStore, is_read_only, validate_name, validate_value};
use anyhow::Context;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// In-process property area with bionic's observable rules.
///
/// Records are never removed, so a handle stays valid for the lifetime of
/// the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<(String, String)>,
    index: HashMap<String, usize>,
    capacity: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(records: usize) -> Self {
        Self {
            capacity: Some(records),
            ..Self::default()
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut store = Self::new();
        for (name, value) in pairs {
            store.insert(name.as_ref(), value.as_ref());
        }
        store
    }

    /// Parses `build.prop` text the way init loads it: only lines starting
    /// with `#` are comments, key and value are split at the first `=` and
    /// trimmed. Lines without `=` (`import ...`) are skipped and a repeated
    /// key keeps its last value.
    pub fn parse_build_prop(text: &str) -> Self {
        let mut store = Self::new();
        for line in text.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if !key.is_empty() {
                    store.insert(key, value.trim());
                }
            }
        }
        store
    }

    pub fn load_build_prop(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read \"{}\"", path.display()))?;
        Ok(Self::parse_build_prop(&text))
    }

    /// The conventional setter: refuses to change an existing `ro.*` record.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), PropertyError> {
        match self.find(name) {
            Some(_) if is_read_only(name) => Err(PropertyError::ReadOnly(name.to_string())),
            Some(handle) => self.update(handle, value),
            None => self.add(name, value),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.records.iter().cloned().collect()
    }

    fn insert(&mut self, name: &str, value: &str) {
        match self.index.get(name) {
            Some(&slot) => self.records[slot].1 = value.to_string(),
            None => {
                self.index.insert(name.to_string(), self.records.len());
                self.records.push((name.to_string(), value.to_string()));
            }
        }
    }
}

impl PropertyStore for MemoryStore {
    type Handle = usize;

    fn find(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn update(&mut self, handle: usize, value: &str) -> Result<(), PropertyError> {
        let (name, slot) = self
            .records
            .get_mut(handle)
            .map(|(name, slot)| (name.as_str(), slot))
            .ok_or(PropertyError::InvalidName(format!("#{handle}")))?;
        validate_value(name, value, false)?;
        *slot = value.to_string();
        Ok(())
    }

    fn add(&mut self, name: &str, value: &str) -> Result<(), PropertyError> {
        validate_name(name)?;
        validate_value(name, value, true)?;
        if self.index.contains_key(name) {
            return Err(PropertyError::Rejected {
                name: name.to_string(),
                code: -1,
            });
        }
        if self.capacity.is_some_and(|cap| self.records.len() >= cap) {
            return Err(PropertyError::StoreFull);
        }
        self.insert(name, value);
        Ok(())
    }

    fn get(&self, name: &str) -> Option<String> {
        self.find(name).map(|slot| self.records[slot].1.clone())
    }
}
