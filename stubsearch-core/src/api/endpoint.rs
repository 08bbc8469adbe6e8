use http::Method;
use std::str::FromStr;

/// The REST surface of the imitated engine. Paths are matched
/// literally; the `*` in the index pattern is part of the path the
/// consuming pipeline requests, not a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /` - service identity and version descriptor.
    Root,
    /// `GET /_cluster/health` - always green.
    ClusterHealth,
    /// `POST /wazuh-alerts-*/_search` - the only endpoint with logic.
    Search,
    /// `GET /_cat/indices` - single-index catalog.
    CatIndices,
    /// `GET /wazuh-alerts-*/_mapping` - fixed field schema.
    Mapping,
}

impl FromStr for Endpoint {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/" => Ok(Endpoint::Root),
            "/_cluster/health" => Ok(Endpoint::ClusterHealth),
            "/wazuh-alerts-*/_search" => Ok(Endpoint::Search),
            "/_cat/indices" => Ok(Endpoint::CatIndices),
            "/wazuh-alerts-*/_mapping" => Ok(Endpoint::Mapping),
            _ => Err("unknown endpoint"),
        }
    }
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Search => Method::POST,
            _ => Method::GET,
        }
    }

    /// Static route table, used for startup logging.
    pub fn all() -> &'static [(Endpoint, &'static str, &'static str)] {
        &[
            (Endpoint::Root, "/", "cluster info"),
            (Endpoint::ClusterHealth, "/_cluster/health", "cluster health"),
            (Endpoint::Search, "/wazuh-alerts-*/_search", "search logs"),
            (Endpoint::CatIndices, "/_cat/indices", "list indices"),
            (Endpoint::Mapping, "/wazuh-alerts-*/_mapping", "get mapping"),
        ]
    }
}
