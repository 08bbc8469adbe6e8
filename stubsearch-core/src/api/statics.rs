//! Canned payloads for the argument-free endpoints. No branching, no
//! inputs consulted; the only live value is the document count.

use crate::data::INDEX_NAME;
use serde_json::{Value, json};

pub fn identity() -> Value {
    json!({
        "name": "mock-elasticsearch",
        "cluster_name": "elasticsearch",
        "cluster_uuid": "mock-cluster-uuid",
        "version": {
            "number": "7.17.0",
            "build_flavor": "default",
            "build_type": "docker",
            "build_hash": "mock-build-hash",
            "build_date": "2024-01-01T00:00:00.000Z",
            "build_snapshot": false,
            "lucene_version": "8.11.1",
            "minimum_wire_compatibility_version": "6.8.0",
            "minimum_index_compatibility_version": "6.0.0-beta1"
        },
        "tagline": "You Know, for Search"
    })
}

pub fn cluster_health() -> Value {
    json!({
        "cluster_name": "elasticsearch",
        "status": "green",
        "timed_out": false,
        "number_of_nodes": 1,
        "number_of_data_nodes": 1,
        "active_primary_shards": 1,
        "active_shards": 1,
        "relocating_shards": 0,
        "initializing_shards": 0,
        "unassigned_shards": 0,
        "delayed_unassigned_shards": 0,
        "number_of_pending_tasks": 0,
        "number_of_in_flight_fetch": 0,
        "task_max_waiting_in_queue_millis": 0,
        "active_shards_percent_as_number": 100.0
    })
}

/// The index catalog; `doc_count` reflects the live dataset size.
pub fn cat_indices(doc_count: usize) -> Value {
    json!([
        {
            "health": "green",
            "status": "open",
            "index": INDEX_NAME,
            "uuid": "mock-uuid-1",
            "pri": "1",
            "rep": "0",
            "docs.count": doc_count.to_string(),
            "docs.deleted": "0",
            "store.size": "1.2mb",
            "pri.store.size": "1.2mb"
        }
    ])
}

pub fn index_mapping() -> Value {
    json!({
        INDEX_NAME: {
            "mappings": {
                "properties": {
                    "@timestamp": {"type": "date"},
                    "agent": {
                        "properties": {
                            "id": {"type": "keyword"},
                            "name": {"type": "keyword"},
                            "ip": {"type": "ip"}
                        }
                    },
                    "rule": {
                        "properties": {
                            "id": {"type": "integer"},
                            "description": {"type": "text"},
                            "level": {"type": "integer"},
                            "groups": {"type": "keyword"},
                            "category": {"type": "keyword"}
                        }
                    },
                    "log": {
                        "properties": {
                            "level": {"type": "keyword"},
                            "logger": {"type": "keyword"}
                        }
                    },
                    "message": {"type": "text"},
                    "full_log": {"type": "text"}
                }
            }
        }
    })
}
