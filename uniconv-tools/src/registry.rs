//! Tool registry

use serde_json::Value as JsonValue;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;
use crate::{Session, ToolError, ToolMeta, ToolPlugin};

/// Name-keyed tool registry; listing keeps registration order
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolPlugin>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a tool; a later tool with the same name replaces the earlier one
    pub fn with_tool<T: ToolPlugin + 'static>(mut self, tool: T) -> Self {
        let name = tool.meta().name.to_lowercase();
        match self.index.get(&name) {
            Some(&i) => self.tools[i] = Arc::new(tool),
            None => {
                self.index.insert(name, self.tools.len());
                self.tools.push(Arc::new(tool));
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn ToolPlugin> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| self.tools[i].as_ref())
    }

    /// Metadata of every tool in registration order
    pub fn metas(&self) -> Vec<ToolMeta> {
        self.tools.iter().map(|t| t.meta()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn call(
        &self,
        name: &str,
        args: &JsonValue,
        session: &mut Session,
    ) -> Result<JsonValue, ToolError> {
        match self.get(name) {
            Some(tool) => {
                debug!(tool = name, "calling tool");
                tool.call(args, session)
            }
            None => Err(ToolError::UnknownTool {
                name: name.to_string(),
                similar: self.find_similar(name).into_iter().take(3).collect(),
            }),
        }
    }

    /// Tool names similar to the given name, best match first
    fn find_similar(&self, name: &str) -> Vec<String> {
        let query = name.trim().to_lowercase();
        let mut matches: Vec<(String, usize)> = self
            .index
            .iter()
            .map(|(candidate, &i)| (candidate.clone(), i))
            .filter_map(|(candidate, i)| {
                let score = Self::similarity_score(&query, &candidate);
                (score > 0).then_some((candidate, score * 100 + (99 - i.min(99))))
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        if query.is_empty() {
            return 0;
        }
        let mut score = if candidate.starts_with(query) {
            100
        } else if candidate.contains(query) {
            50
        } else if query.contains(candidate) {
            30
        } else {
            0
        };

        let query_chars: HashSet<char> = query.chars().filter(|c| *c != '_').collect();
        let candidate_chars: HashSet<char> = candidate.chars().filter(|c| *c != '_').collect();
        let common = query_chars.intersection(&candidate_chars).count();

        // Require most of the query's letters before counting overlap alone
        if score == 0 && common * 2 < query_chars.len().max(1) + 1 {
            return 0;
        }
        score += common * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 {
            score += 5 - len_diff;
        }
        score
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
