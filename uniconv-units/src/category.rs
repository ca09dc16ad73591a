//! Measurement categories

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use uniconv_core::ConversionError;

/// A group of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Length,
    Mass,
    Volume,
    Temperature,
    Time,
    Speed,
    Area,
    Data,
    Energy,
    Pressure,
}

impl Category {
    /// All categories in catalog order
    pub const ALL: [Category; 10] = [
        Category::Length,
        Category::Mass,
        Category::Volume,
        Category::Temperature,
        Category::Time,
        Category::Speed,
        Category::Area,
        Category::Data,
        Category::Energy,
        Category::Pressure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Mass => "Mass",
            Category::Volume => "Volume",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
            Category::Speed => "Speed",
            Category::Area => "Area",
            Category::Data => "Data",
            Category::Energy => "Energy",
            Category::Pressure => "Pressure",
        }
    }

    /// Icon shown next to the category in menus
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Length => "📏",
            Category::Mass => "⚖️",
            Category::Volume => "🧪",
            Category::Temperature => "🌡️",
            Category::Time => "⏱️",
            Category::Speed => "🚀",
            Category::Area => "📐",
            Category::Data => "💾",
            Category::Energy => "⚡",
            Category::Pressure => "🔄",
        }
    }

    /// Chart accent colour (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Category::Length => "#FF5757",
            Category::Mass => "#4CAF50",
            Category::Volume => "#2196F3",
            Category::Temperature => "#FF9800",
            Category::Time => "#9C27B0",
            Category::Speed => "#607D8B",
            Category::Area => "#795548",
            Category::Data => "#00BCD4",
            Category::Energy => "#FFEB3B",
            Category::Pressure => "#3F51B5",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    /// Case-insensitive; an icon prefix ("📏 Length") is tolerated
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed
            .split_once(' ')
            .filter(|(head, _)| !head.chars().any(|c| c.is_ascii_alphanumeric()))
            .map(|(_, tail)| tail.trim())
            .unwrap_or(trimmed);

        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConversionError::unknown_category(s.trim(), &Self::names()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniconv_core::ErrorKind;

    #[test]
    fn test_from_str() {
        assert_eq!("Length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!("temperature".parse::<Category>().unwrap(), Category::Temperature);
        assert_eq!("  DATA ".parse::<Category>().unwrap(), Category::Data);
        assert_eq!("💾 Data".parse::<Category>().unwrap(), Category::Data);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "Luminosity".parse::<Category>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownCategory);
        assert!(err.suggestion.unwrap().contains("Pressure"));
    }

    #[test]
    fn test_display_round_trip() {
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn test_colors_are_hex() {
        for c in Category::ALL {
            let color = c.color();
            assert!(color.starts_with('#') && color.len() == 7, "{}", color);
        }
    }
}
