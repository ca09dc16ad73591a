//! Unit representation with conversion factors

use std::fmt;
use serde::Serialize;
use crate::Category;

/// A unit valid within exactly one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Catalog key (e.g., "kilometer", "cubic_meter")
    pub key: &'static str,
    /// Short symbol (e.g., "km", "m3")
    pub symbol: &'static str,
    /// Human readable name (e.g., "kilometer", "cubic meter")
    pub name: &'static str,
    /// Owning category
    pub category: Category,
    /// Factor to the category base unit: base = (value - zero) * scale + offset
    pub scale: f64,
    /// Reading of this unit at the base offset (32 for Fahrenheit)
    pub zero: f64,
    /// Base value at `zero` (273.15 K for Celsius and Fahrenheit)
    pub offset: f64,
    /// Extra lookup names (plurals, alternate spellings)
    #[serde(skip)]
    pub aliases: &'static [&'static str],
}

impl Unit {
    /// Create a unit with proportional conversion (no offset)
    pub fn new(
        key: &'static str,
        symbol: &'static str,
        name: &'static str,
        category: Category,
        scale: f64,
    ) -> Self {
        Unit {
            key,
            symbol,
            name,
            category,
            scale,
            zero: 0.0,
            offset: 0.0,
            aliases: &[],
        }
    }

    /// Create an affine unit (temperature scales).
    ///
    /// `zero` is kept apart from `offset` so a scale whose zero point is an
    /// exact number in its own unit (32 °F) converts exactly at that point.
    pub fn with_offset(
        key: &'static str,
        symbol: &'static str,
        name: &'static str,
        category: Category,
        scale: f64,
        zero: f64,
        offset: f64,
    ) -> Self {
        Unit {
            key,
            symbol,
            name,
            category,
            scale,
            zero,
            offset,
            aliases: &[],
        }
    }

    /// Builder: attach lookup aliases
    pub fn aliased(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        self.scale == 1.0 && !self.is_affine()
    }

    /// Check if this unit needs an affine (scale + offset) transform
    pub fn is_affine(&self) -> bool {
        self.offset != 0.0 || self.zero != 0.0
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Convert a value in this unit to the category base unit
    pub fn to_base(&self, value: f64) -> f64 {
        (value - self.zero) * self.scale + self.offset
    }

    /// Convert a value in the category base unit to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        (base - self.offset) / self.scale + self.zero
    }

    /// Every name this unit answers to: key, symbol, then aliases
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        [self.key, self.symbol]
            .into_iter()
            .chain(self.aliases.iter().copied())
    }

    /// Readable label: underscores become spaces, words capitalized
    pub fn display_name(&self) -> String {
        self.key
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
