use crate::data::Hit;
use crate::search::SearchResults;
use serde::Serialize;
use serde_json::{Value, json};

/// The `_shards` block; always one successful shard since no real
/// partitioning exists.
#[derive(Debug, Serialize)]
pub struct ShardStatus {
    pub total: u32,
    pub successful: u32,
    pub skipped: u32,
    pub failed: u32,
}

impl Default for ShardStatus {
    fn default() -> Self {
        Self {
            total: 1,
            successful: 1,
            skipped: 0,
            failed: 0,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TotalHits {
    pub value: usize,
    pub relation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HitsEnvelope {
    pub total: TotalHits,
    pub max_score: f64,
    pub hits: Vec<Hit>,
}

/// Successful search response envelope.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub took: u64,
    pub timed_out: bool,
    #[serde(rename = "_shards")]
    pub shards: ShardStatus,
    pub hits: HitsEnvelope,
}

impl SearchResponse {
    pub fn new(results: SearchResults, took_ms: u64) -> Self {
        Self {
            took: took_ms,
            timed_out: false,
            shards: ShardStatus::default(),
            hits: HitsEnvelope {
                total: TotalHits {
                    value: results.total,
                    relation: "eq",
                },
                max_score: 1.0,
                hits: results.hits,
            },
        }
    }
}

/// The generic search-phase failure body returned with HTTP 500.
pub fn error_body(reason: &str) -> Value {
    json!({
        "error": {
            "type": "search_phase_execution_exception",
            "reason": reason
        }
    })
}
