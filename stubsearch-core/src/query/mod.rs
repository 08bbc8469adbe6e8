//! Typed model of the accepted search request body.
//!
//! The imitated engine takes arbitrarily nested query DSL; this mock
//! recognizes the small subset the log pipeline actually sends (bool
//! must/should over term conditions, plus a timestamp range) and parses
//! it explicitly instead of walking untyped maps. Unknown query parts
//! deserialize but are ignored by the engine.

#[cfg(test)]
mod tests;

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Top-level search request: `{query?, size?, from?}`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<Query>,

    #[serde(default = "default_size")]
    pub size: usize,

    #[serde(default)]
    pub from: usize,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: None,
            size: default_size(),
            from: 0,
        }
    }
}

fn default_size() -> usize {
    10
}

#[derive(Debug, Default, Deserialize)]
pub struct Query {
    #[serde(rename = "bool", default)]
    pub boolean: Option<BoolQuery>,

    /// Parsed for shape validation, never applied (time bounds are a
    /// no-op in the reference service).
    #[serde(default)]
    pub range: Option<RangeQuery>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BoolQuery {
    #[serde(default)]
    pub must: Vec<Clause>,

    #[serde(default)]
    pub should: Vec<Clause>,
}

/// One must/should entry. Clauses without a `term` condition are kept
/// but match nothing; they are not an error.
#[derive(Debug, Default, Deserialize)]
pub struct Clause {
    #[serde(default)]
    pub term: Option<TermQuery>,
}

/// Field name -> expected value. Only the fields in [`TermField`] are
/// interpreted; the rest are silently ignored.
pub type TermQuery = BTreeMap<String, Value>;

/// Range condition keyed by field name, e.g. `{"@timestamp": {"gte": ...}}`.
pub type RangeQuery = BTreeMap<String, Value>;

/// The term-filterable fields this mock understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermField {
    RuleLevel,
    RuleCategory,
    AgentName,
}

impl FromStr for TermField {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rule.level" => Ok(TermField::RuleLevel),
            "rule.category" => Ok(TermField::RuleCategory),
            "agent.name" => Ok(TermField::AgentName),
            _ => Err("unrecognized term field"),
        }
    }
}
