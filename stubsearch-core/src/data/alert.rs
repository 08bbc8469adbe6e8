use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Origin host of an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub ip: String,
}

/// The detection rule that fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: u32,
    pub description: String,
    /// Severity, 0..=15 in the imitated ruleset.
    pub level: u8,
    pub groups: Vec<String>,
    pub category: String,
}

/// Metadata about the log line itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMeta {
    pub level: String,
    pub logger: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Provenance of the log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

/// One synthetic security alert, the `_source` of a hit.
///
/// Field names follow the Elasticsearch document shape the consuming
/// pipeline expects (`@timestamp`, `full_log`), hence the renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "@timestamp")]
    pub timestamp: DateTime<Utc>,
    pub agent: Agent,
    pub rule: Rule,
    pub log: LogMeta,
    pub message: String,
    pub full_log: String,
    pub input: Input,
    pub location: Location,
}

/// A stored document envelope, exactly as it is returned inside
/// `hits.hits` of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: f64,
    #[serde(rename = "_source")]
    pub source: Alert,
}
