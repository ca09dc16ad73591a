//! Unit catalog - the immutable registry of categories and units
//!
//! Built once at process start and shared behind an `Arc`. Lookups accept
//! a unit key ("kilometer"), its symbol ("km") or any alias ("kilometres").
//! Exact matches win; otherwise the lookup is retried case-insensitively
//! and with spaces read as underscores, so display names resolve too.

use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;
use uniconv_core::ConversionError;
use crate::units::standard_units;
use crate::{Category, Unit};

/// Position of a unit inside the catalog: (group index, unit index)
type Slot = (usize, usize);

/// Invalid catalog definition, detected at construction time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("category {0} has no units")]
    EmptyCategory(Category),

    #[error("category {0} is declared twice")]
    DuplicateCategory(Category),

    #[error("unit '{unit}' belongs to {declared} but is listed under {group}")]
    MisfiledUnit {
        unit: &'static str,
        declared: Category,
        group: Category,
    },

    #[error("unit '{unit}' has unusable scale {scale}")]
    InvalidScale { unit: &'static str, scale: f64 },

    #[error("unit '{unit}' has non-finite offset {offset}")]
    InvalidOffset { unit: &'static str, offset: f64 },

    #[error("name '{name}' is used by both '{first}' and '{second}'")]
    DuplicateName {
        name: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

struct Group {
    category: Category,
    units: Vec<Unit>,
}

/// Registry of all known units, in declared order
pub struct UnitCatalog {
    groups: Vec<Group>,
    exact: HashMap<&'static str, Slot>,
    /// Lowercased names; `None` marks a name two units fold onto
    folded: HashMap<String, Option<Slot>>,
}

impl UnitCatalog {
    /// The standard catalog
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_groups(standard_units())
    }

    /// Build a catalog from `(category, units)` groups, validating every unit
    pub fn from_groups(definitions: Vec<(Category, Vec<Unit>)>) -> Result<Self, CatalogError> {
        let mut catalog = UnitCatalog {
            groups: Vec::with_capacity(definitions.len()),
            exact: HashMap::new(),
            folded: HashMap::new(),
        };

        for (category, units) in definitions {
            if catalog.groups.iter().any(|g| g.category == category) {
                return Err(CatalogError::DuplicateCategory(category));
            }
            if units.is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }

            let group_index = catalog.groups.len();
            let count = units.len();
            catalog.groups.push(Group { category, units });

            for unit_index in 0..count {
                let unit = catalog.groups[group_index].units[unit_index].clone();
                Self::validate(&unit, category)?;
                catalog.index(&unit, (group_index, unit_index))?;
            }
        }

        debug!(
            categories = catalog.groups.len(),
            units = catalog.len(),
            affine = catalog.groups.iter().flat_map(|g| &g.units).filter(|u| u.is_affine()).count(),
            "unit catalog built"
        );

        Ok(catalog)
    }

    fn validate(unit: &Unit, group: Category) -> Result<(), CatalogError> {
        if unit.category != group {
            return Err(CatalogError::MisfiledUnit {
                unit: unit.key,
                declared: unit.category,
                group,
            });
        }
        if !unit.scale.is_finite() || unit.scale == 0.0 {
            return Err(CatalogError::InvalidScale { unit: unit.key, scale: unit.scale });
        }
        if let Some(offset) = [unit.offset, unit.zero].into_iter().find(|v| !v.is_finite()) {
            return Err(CatalogError::InvalidOffset { unit: unit.key, offset });
        }
        Ok(())
    }

    fn index(&mut self, unit: &Unit, slot: Slot) -> Result<(), CatalogError> {
        for name in unit.names() {
            match self.exact.get(name) {
                // key and symbol may coincide ("cup", "bar")
                Some(existing) if *existing == slot => continue,
                Some(&(g, u)) => {
                    return Err(CatalogError::DuplicateName {
                        name,
                        first: self.groups[g].units[u].key,
                        second: unit.key,
                    });
                }
                None => {
                    self.exact.insert(name, slot);
                }
            }

            self.folded
                .entry(name.to_lowercase())
                .and_modify(|entry| {
                    if *entry != Some(slot) {
                        *entry = None;
                    }
                })
                .or_insert(Some(slot));
        }
        Ok(())
    }

    fn at(&self, (g, u): Slot) -> &Unit {
        &self.groups[g].units[u]
    }

    /// Categories in declared order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.iter().map(|g| g.category)
    }

    /// Check whether the catalog defines `category`
    pub fn contains(&self, category: Category) -> bool {
        self.groups.iter().any(|g| g.category == category)
    }

    /// Units of a category in declared order (empty if not in the catalog)
    pub fn units(&self, category: Category) -> &[Unit] {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.units.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of units
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.units.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get a unit by key, symbol or alias, in any category
    pub fn lookup(&self, name: &str) -> Option<&Unit> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        // Try direct lookup first
        if let Some(&slot) = self.exact.get(name) {
            return Some(self.at(slot));
        }

        // Then case-insensitive, with "Cubic Meter" read as "cubic_meter"
        let lowered = name.to_lowercase();
        let underscored = lowered.split_whitespace().collect::<Vec<_>>().join("_");
        [lowered, underscored]
            .iter()
            .find_map(|candidate| self.folded.get(candidate).copied().flatten())
            .map(|slot| self.at(slot))
    }

    /// Get a unit that must belong to `category`
    pub fn unit_in(&self, category: Category, name: &str) -> Result<&Unit, ConversionError> {
        match self.lookup(name) {
            Some(unit) if unit.category == category => Ok(unit),
            _ => Err(ConversionError::unknown_unit(name.trim(), category.name())),
        }
    }

    /// Resolve a category name against the categories this catalog defines
    pub fn parse_category(&self, name: &str) -> Result<Category, ConversionError> {
        let category: Category = name.parse()?;
        if self.contains(category) {
            Ok(category)
        } else {
            let available: Vec<&str> = self.categories().map(|c| c.name()).collect();
            Err(ConversionError::unknown_category(name.trim(), &available))
        }
    }

    /// Initial (from, to) selection for a category: the first two units,
    /// or the only unit twice
    pub fn default_pair(&self, category: Category) -> Option<(&Unit, &Unit)> {
        let units = self.units(category);
        let first = units.first()?;
        Some((first, units.get(1).unwrap_or(first)))
    }
}
