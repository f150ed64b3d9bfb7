//! Filter pipeline
//!
//! Row visibility is the conjunction of four optional filter categories:
//! read status, tag set, text conditions, and an injected custom
//! predicate. Text conditions are compiled once when the filter is set;
//! an invalid regex pattern silently degrades to substring matching.

use std::fmt;

use regex::RegexBuilder;

use super::record::{Column, ReadStatus, Record};

/// How two text conditions combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombineLogic {
    #[default]
    And,
    Or,
}

/// One text condition: substring or regex match against a column
#[derive(Debug, Clone)]
pub struct TextCondition {
    pub column: Column,
    pub text: String,
}

impl TextCondition {
    pub fn new(column: Column, text: impl Into<String>) -> Self {
        Self {
            column,
            text: text.into(),
        }
    }
}

/// Text filter specification: one or two conditions plus match options
#[derive(Debug, Clone)]
pub struct TextFilter {
    pub first: TextCondition,
    pub second: Option<TextCondition>,
    pub combine: CombineLogic,
    pub case_sensitive: bool,
    pub use_regex: bool,
}

impl TextFilter {
    pub fn single(condition: TextCondition) -> Self {
        Self {
            first: condition,
            second: None,
            combine: CombineLogic::And,
            case_sensitive: false,
            use_regex: false,
        }
    }

    /// Compile conditions into matchers; invalid regex falls back to
    /// substring matching rather than failing
    pub fn compile(&self) -> CompiledTextFilter {
        CompiledTextFilter {
            first: CompiledCondition::compile(&self.first, self.case_sensitive, self.use_regex),
            second: self
                .second
                .as_ref()
                .map(|c| CompiledCondition::compile(c, self.case_sensitive, self.use_regex)),
            combine: self.combine,
        }
    }
}

enum Matcher {
    Regex(regex::Regex),
    /// Needle pre-lowercased when matching case-insensitively
    Substring(String),
}

pub struct CompiledCondition {
    column: Column,
    matcher: Matcher,
    case_sensitive: bool,
}

impl CompiledCondition {
    fn compile(condition: &TextCondition, case_sensitive: bool, use_regex: bool) -> Self {
        let matcher = if use_regex {
            match RegexBuilder::new(&condition.text)
                .case_insensitive(!case_sensitive)
                .build()
            {
                Ok(pattern) => Matcher::Regex(pattern),
                Err(e) => {
                    tracing::debug!(
                        "Invalid filter pattern {:?}, falling back to substring: {}",
                        condition.text,
                        e
                    );
                    Matcher::Substring(normalize(&condition.text, case_sensitive))
                }
            }
        } else {
            Matcher::Substring(normalize(&condition.text, case_sensitive))
        };

        Self {
            column: condition.column,
            matcher,
            case_sensitive,
        }
    }

    fn matches(&self, record: &Record) -> bool {
        let cell = record.raw_text(self.column);
        match &self.matcher {
            Matcher::Regex(pattern) => pattern.is_match(&cell),
            Matcher::Substring(needle) => {
                normalize(&cell, self.case_sensitive).contains(needle.as_str())
            }
        }
    }
}

fn normalize(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    }
}

/// A text filter with its matchers compiled
pub struct CompiledTextFilter {
    first: CompiledCondition,
    second: Option<CompiledCondition>,
    combine: CombineLogic,
}

impl CompiledTextFilter {
    pub fn matches(&self, record: &Record) -> bool {
        let first = self.first.matches(record);
        match &self.second {
            None => first,
            Some(second) => match self.combine {
                CombineLogic::And => first && second.matches(record),
                CombineLogic::Or => first || second.matches(record),
            },
        }
    }
}

/// Injected predicate over (record, logical index)
pub type CustomFilter = Box<dyn Fn(&Record, usize) -> bool>;

/// Active filter state: the conjunction of all set categories
#[derive(Default)]
pub struct FilterSet {
    status: Option<ReadStatus>,
    tags: Option<Vec<String>>,
    text: Option<CompiledTextFilter>,
    custom: Option<CustomFilter>,
}

impl FilterSet {
    pub fn set_status(&mut self, status: Option<ReadStatus>) {
        self.status = status;
    }

    /// An empty tag list clears the tag filter
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = if tags.is_empty() { None } else { Some(tags) };
    }

    pub fn set_text(&mut self, filter: Option<&TextFilter>) {
        self.text = filter.map(TextFilter::compile);
    }

    pub fn set_custom(&mut self, predicate: Option<CustomFilter>) {
        self.custom = predicate;
    }

    pub fn clear(&mut self) {
        self.status = None;
        self.tags = None;
        self.text = None;
        self.custom = None;
    }

    pub fn is_active(&self) -> bool {
        self.status.is_some() || self.tags.is_some() || self.text.is_some() || self.custom.is_some()
    }

    /// Evaluate all active categories; custom predicate runs last
    pub fn matches(&self, record: &Record, logical_index: usize) -> bool {
        if let Some(status) = self.status {
            if record.read_status != status {
                return false;
            }
        }

        if let Some(tags) = &self.tags {
            if !record.tags().any(|t| tags.iter().any(|f| f == t)) {
                return false;
            }
        }

        if let Some(text) = &self.text {
            if !text.matches(record) {
                return false;
            }
        }

        if let Some(custom) = &self.custom {
            if !custom(record, logical_index) {
                return false;
            }
        }

        true
    }
}

impl fmt::Debug for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSet")
            .field("status", &self.status)
            .field("tags", &self.tags)
            .field("text_active", &self.text.is_some())
            .field("custom_active", &self.custom.is_some())
            .finish()
    }
}
