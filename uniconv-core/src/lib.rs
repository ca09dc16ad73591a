//! uniconv Core - Fundamental types
//!
//! This crate provides the types shared by every uniconv crate:
//! - `ConversionError`: Structured, user-facing errors with machine-readable codes
//! - `parse_value`: Validation of user-typed numbers
//! - `format_sig`: Fixed significant-digit display formatting

mod error;
mod format;
mod value;

pub use error::{ConversionError, ErrorKind};
pub use format::{format_sig, DisplayPrecision};
pub use value::{ensure_finite, parse_value};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConversionError, DisplayPrecision, ErrorKind};
    pub use crate::{ensure_finite, format_sig, parse_value};
}
