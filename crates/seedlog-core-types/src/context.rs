//! Child-logger context
//!
//! The fields a child logger merges into every record it emits. Built
//! once per call and read-only afterwards.

use crate::correlation::CorrelationSeed;
use serde::Serialize;

/// Context carried by a child logger: tags, optional seed, optional stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildLogContext {
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<CorrelationSeed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
}

impl ChildLogContext {
    /// Create a context carrying only tags
    pub fn new(tags: Vec<String>) -> Self {
        Self {
            tags,
            seed: None,
            stack: None,
        }
    }

    /// Attach a correlation seed
    pub fn with_seed(mut self, seed: CorrelationSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Attach a captured call stack
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn seed(&self) -> Option<&CorrelationSeed> {
        self.seed.as_ref()
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// Tags concatenated as `[tag1][tag2]...`
    pub fn bracketed_tags(&self) -> String {
        self.tags.iter().map(|tag| format!("[{}]", tag)).collect()
    }
}
