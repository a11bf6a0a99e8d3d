//! Pattern registry for named pattern lookup.

use heapless::{FnvIndexMap, String};

use crate::error::{Error, PatternError, Result};

use super::builtin;
use super::table::MotionTable;

/// Maximum number of patterns in the registry.
pub const MAX_PATTERNS: usize = 16;

/// Registry for named motion tables.
///
/// Tables are borrowed views; the registry outlives nothing. Compiled-in
/// patterns are `'static`, configuration-loaded ones borrow their config
/// storage.
#[derive(Debug)]
pub struct PatternRegistry<'a> {
    patterns: FnvIndexMap<String<32>, MotionTable<'a>, MAX_PATTERNS>,
}

impl<'a> Default for PatternRegistry<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PatternRegistry<'a> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            patterns: FnvIndexMap::new(),
        }
    }

    /// Create a registry pre-loaded with the compiled-in patterns
    /// (`erase`, `square_spiral`).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        // Capacity covers the builtins
        let _ = registry.register("erase", builtin::ERASE);
        let _ = registry.register("square_spiral", builtin::SQUARE_SPIRAL);
        registry
    }

    /// Register a pattern under a name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or the registry is full.
    pub fn register(&mut self, name: &str, table: MotionTable<'a>) -> Result<()> {
        let name_str =
            String::try_from(name).map_err(|_| Error::Pattern(PatternError::NameTooLong))?;

        self.patterns
            .insert(name_str, table)
            .map_err(|_| Error::Pattern(PatternError::RegistryFull))?;

        Ok(())
    }

    /// Get a pattern by name.
    pub fn get(&self, name: &str) -> Option<&MotionTable<'a>> {
        let name_str = String::try_from(name).ok()?;
        self.patterns.get(&name_str)
    }

    /// Get a pattern by name, with an error naming the miss.
    pub fn get_or_error(&self, name: &str) -> Result<&MotionTable<'a>> {
        self.get(name).ok_or_else(|| {
            Error::Pattern(PatternError::NotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })
    }

    /// Check if a pattern exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a pattern by name.
    pub fn remove(&mut self, name: &str) -> Option<MotionTable<'a>> {
        let name_str = String::try_from(name).ok()?;
        self.patterns.remove(&name_str)
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate registered pattern names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(|s| s.as_str())
    }

    /// Iterate registered patterns.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MotionTable<'a>)> {
        self.patterns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Clear all patterns.
    pub fn clear(&mut self) {
        self.patterns.clear();
    }
}
