use std::collections::{hash_map, HashMap};

use serde::{Deserialize, Serialize};

use crate::{error::Error, utils::masses_are_equivalent};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModificationDefinition {
    pub name: String,
    /// Mass shift in Dalton
    pub mass: f64,
}

impl ModificationDefinition {
    pub fn new(name: impl Into<String>, mass: f64) -> Self {
        Self {
            name: name.into(),
            mass,
        }
    }
}

/// Lookup of modification definitions by their unique name.
///
/// The catalog is owned by the surrounding application and handed to the
/// aggregator by reference.
#[derive(Debug, Clone, Default)]
pub struct ModificationCatalog {
    definitions: HashMap<String, ModificationDefinition>,
}

impl ModificationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition. Returns the previous definition with the same name, if any.
    pub fn insert(&mut self, definition: ModificationDefinition) -> Option<ModificationDefinition> {
        self.definitions.insert(definition.name.clone(), definition)
    }

    pub fn get(&self, name: &str) -> Option<&ModificationDefinition> {
        self.definitions.get(name)
    }

    /// Resolves the mass of the given modification.
    ///
    /// # Arguments
    /// * `name` - Modification name as found in a score record
    ///
    pub fn mass(&self, name: &str) -> Result<f64, Error> {
        self.get(name)
            .map(|definition| definition.mass)
            .ok_or_else(|| Error::UnknownModification(name.to_string()))
    }

    /// Names of all modifications sharing the target's mass, the target itself included
    /// if it is part of the catalog. Sorted by name.
    ///
    /// # Arguments
    /// * `target` - Modification to find the equivalents for
    /// * `tolerance` - Absolute mass tolerance, `None` for exact matching
    ///
    pub fn mass_equivalents(
        &self,
        target: &ModificationDefinition,
        tolerance: Option<f64>,
    ) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .definitions
            .values()
            .filter(|definition| masses_are_equivalent(definition.mass, target.mass, tolerance))
            .map(|definition| definition.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> hash_map::Values<'_, String, ModificationDefinition> {
        self.definitions.values()
    }
}

impl FromIterator<ModificationDefinition> for ModificationCatalog {
    fn from_iter<I: IntoIterator<Item = ModificationDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.insert(definition);
        }
        catalog
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub fn test_catalog() -> ModificationCatalog {
        vec![
            ModificationDefinition::new("Phospho (S)", 79.9663),
            ModificationDefinition::new("Phospho (T)", 79.9663),
            ModificationDefinition::new("Oxidation (M)", 15.9949),
            ModificationDefinition::new("Oxidation (W)", 15.9949),
            ModificationDefinition::new("Acetylation (K)", 42.0106),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_mass_lookup() {
        let catalog = test_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.mass("Phospho (T)"), Ok(79.9663));
        assert_eq!(
            catalog.mass("Deamidation (N)"),
            Err(Error::UnknownModification("Deamidation (N)".to_string()))
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut catalog = test_catalog();
        let previous = catalog.insert(ModificationDefinition::new("Oxidation (M)", 15.99));
        assert_eq!(previous.map(|d| d.mass), Some(15.9949));
        assert_eq!(catalog.mass("Oxidation (M)"), Ok(15.99));
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_mass_equivalents() {
        let catalog = test_catalog();
        let phospho = ModificationDefinition::new("Phospho (S)", 79.9663);
        assert_eq!(
            catalog.mass_equivalents(&phospho, None),
            vec!["Phospho (S)", "Phospho (T)"]
        );

        let acetyl = ModificationDefinition::new("Acetylation (K)", 42.0106);
        assert_eq!(catalog.mass_equivalents(&acetyl, None), vec!["Acetylation (K)"]);

        let almost_acetyl = ModificationDefinition::new("Acetylation (N-term)", 42.01);
        assert!(catalog.mass_equivalents(&almost_acetyl, None).is_empty());
        assert_eq!(
            catalog.mass_equivalents(&almost_acetyl, Some(0.001)),
            vec!["Acetylation (K)"]
        );
    }
}
