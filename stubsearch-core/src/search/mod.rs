mod engine;
mod response;

pub use engine::{SearchResults, execute};
pub use response::{HitsEnvelope, SearchResponse, ShardStatus, TotalHits, error_body};
