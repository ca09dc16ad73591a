//! Conversion facade
//!
//! Validates a request against the catalog, then delegates the arithmetic
//! to the resolved units. Temperature units are affine, so callers must not
//! assume that zero maps to zero.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uniconv_core::{ensure_finite, ConversionError, DisplayPrecision};
use crate::{Category, Unit, UnitCatalog};

/// One conversion as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    /// Source unit name (key, symbol or alias)
    pub from: String,
    /// Target unit name (key, symbol or alias)
    pub to: String,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(
        category: Category,
        from: impl Into<String>,
        to: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            category,
            from: from.into(),
            to: to.into(),
            value,
        }
    }

    /// Same request with source and target exchanged
    pub fn swapped(&self) -> Self {
        Self {
            category: self.category,
            from: self.to.clone(),
            to: self.from.clone(),
            value: self.value,
        }
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub category: Category,
    /// Input value, in `from` units
    pub input: f64,
    /// Converted value, in `to` units
    pub value: f64,
    /// Canonical key of the source unit
    pub from: String,
    /// Canonical key of the target unit
    pub to: String,
}

/// Human readable explanation of a conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionDetails {
    /// "<input> <From> = <value> <To>"
    pub formula: String,
    /// "1 <From> = <factor> <To>"
    pub factor: String,
}

/// Validating front door to the unit catalog
#[derive(Clone)]
pub struct Converter {
    catalog: Arc<UnitCatalog>,
}

impl Converter {
    pub fn new(catalog: Arc<UnitCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    /// Convert `request.value` from `request.from` to `request.to`
    pub fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        let result = self.run(request);
        if let Err(e) = &result {
            warn!(
                code = e.code(),
                category = %request.category,
                from = %request.from,
                to = %request.to,
                "conversion rejected"
            );
        }
        result
    }

    /// Positional form of [`Converter::convert`]
    pub fn convert_value(
        &self,
        category: Category,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<ConversionResult, ConversionError> {
        self.convert(&ConversionRequest::new(category, from, to, value))
    }

    fn run(&self, request: &ConversionRequest) -> Result<ConversionResult, ConversionError> {
        let value = ensure_finite(request.value)?;
        let (from, to) = self.resolve_pair(request.category, &request.from, &request.to)?;

        // Identity must hand back the input bit for bit
        let converted = if from.key == to.key {
            value
        } else {
            to.from_base(from.to_base(value))
        };

        if !converted.is_finite() {
            return Err(ConversionError::invalid_value(format!(
                "{} {} is out of range in {}",
                value, from.symbol, to.symbol
            )));
        }

        debug!(
            category = %request.category,
            from = from.key,
            to = to.key,
            value,
            converted,
            "converted"
        );

        Ok(ConversionResult {
            category: request.category,
            input: value,
            value: converted,
            from: from.key.to_string(),
            to: to.key.to_string(),
        })
    }

    /// Resolve both unit names and check they can be converted within `category`
    fn resolve_pair(
        &self,
        category: Category,
        from: &str,
        to: &str,
    ) -> Result<(&Unit, &Unit), ConversionError> {
        let source = self.resolve(category, from)?;
        let target = self.resolve(category, to)?;

        if !source.is_compatible(target) {
            return Err(ConversionError::incompatible_units(
                source.key,
                source.category.name(),
                target.key,
                target.category.name(),
            ));
        }
        if source.category != category {
            return Err(ConversionError::unknown_unit(from.trim(), category.name()));
        }

        Ok((source, target))
    }

    fn resolve(&self, category: Category, name: &str) -> Result<&Unit, ConversionError> {
        self.catalog
            .lookup(name)
            .ok_or_else(|| ConversionError::unknown_unit(name.trim(), category.name()))
    }

    /// How many `to` one `from` is worth
    pub fn factor(&self, category: Category, from: &str, to: &str) -> Result<f64, ConversionError> {
        self.convert_value(category, from, to, 1.0).map(|r| r.value)
    }

    /// Formula and unit factor for a finished conversion
    pub fn details(
        &self,
        result: &ConversionResult,
        precision: DisplayPrecision,
    ) -> Result<ConversionDetails, ConversionError> {
        let (from, to) = self.resolve_pair(result.category, &result.from, &result.to)?;
        let factor = self.factor(result.category, &result.from, &result.to)?;

        Ok(ConversionDetails {
            formula: format!(
                "{} {} = {} {}",
                precision.format(result.input),
                from.display_name(),
                precision.format(result.value),
                to.display_name()
            ),
            factor: format!(
                "1 {} = {} {}",
                from.display_name(),
                precision.format(factor),
                to.display_name()
            ),
        })
    }
}
