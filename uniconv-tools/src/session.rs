//! Conversion session state

use chrono::Local;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use uniconv_core::DisplayPrecision;
use uniconv_units::{Category, ConversionResult, Converter, UnitCatalog};

/// Default number of conversions kept in history
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One successful conversion, as remembered by the session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    #[serde(flatten)]
    pub result: ConversionResult,
}

/// State shared by tool calls: the catalog, display settings and the
/// history of successful conversions (in memory, newest last)
pub struct Session {
    converter: Converter,
    precision: DisplayPrecision,
    default_category: Category,
    history: VecDeque<HistoryEntry>,
    history_limit: usize,
}

impl Session {
    pub fn new(catalog: Arc<UnitCatalog>) -> Self {
        Self {
            converter: Converter::new(catalog),
            precision: DisplayPrecision::default(),
            default_category: Category::Length,
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    pub fn with_precision(mut self, precision: DisplayPrecision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_default_category(mut self, category: Category) -> Self {
        self.default_category = category;
        self
    }

    /// Keep at most `limit` entries; 0 disables history
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self.trim();
        self
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn catalog(&self) -> &UnitCatalog {
        self.converter.catalog()
    }

    pub fn precision(&self) -> DisplayPrecision {
        self.precision
    }

    pub fn default_category(&self) -> Category {
        self.default_category
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Remember a successful conversion
    pub fn record(&mut self, result: &ConversionResult) {
        if self.history_limit == 0 {
            return;
        }
        self.history.push_back(HistoryEntry {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            result: result.clone(),
        });
        self.trim();
    }

    /// History, oldest first
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.history.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.history.back()
    }

    /// Forget every entry, returning how many there were
    pub fn clear_history(&mut self) -> usize {
        let cleared = self.history.len();
        self.history.clear();
        cleared
    }

    fn trim(&mut self) {
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }
}
