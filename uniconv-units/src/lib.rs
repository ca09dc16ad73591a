//! uniconv Units - Unit catalog and conversion facade
//!
//! The catalog is built once at startup and shared read-only. Every
//! conversion is validated against it before any arithmetic happens.
//!
//! Categories:
//! - Length (m, km, cm, mm, mi, yd, ft, in)
//! - Mass (g, kg, mg, lb, oz, t)
//! - Volume (L, mL, m³, gal, qt, pt, cup, fl oz)
//! - Temperature (K, °C, °F)
//! - Time (s, min, h, d, wk, mo, yr)
//! - Speed (m/s, km/h, mph, kn)
//! - Area (m², km², ha, ac, ft², in²)
//! - Data (bit, B, KB, MB, GB, TB)
//! - Energy (J, kJ, cal, kcal, Wh, kWh)
//! - Pressure (Pa, kPa, bar, atm, psi)

mod category;
mod unit;
mod units;
mod catalog;
mod convert;
mod parse;

pub use category::Category;
pub use unit::Unit;
pub use catalog::{CatalogError, UnitCatalog};
pub use convert::{ConversionDetails, ConversionRequest, ConversionResult, Converter};
pub use parse::{parse_conversion, parse_quantity, parse_query};
