use integration_tests::harness::TestServer;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::sync::OnceLock;

static SERVER: OnceLock<TestServer> = OnceLock::new();

fn server() -> &'static TestServer {
    SERVER.get_or_init(|| TestServer::start(100))
}

#[test]
fn root_returns_the_service_identity() {
    // Act
    let res = server().get("/").send().expect("request failed");

    // Assert
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let body: Value = res.json().unwrap();
    assert_eq!(body["name"], "mock-elasticsearch");
    assert_eq!(body["version"]["number"], "7.17.0");
    assert_eq!(body["tagline"], "You Know, for Search");
}

#[test]
fn cluster_health_is_green_with_one_node() {
    let res = server()
        .get("/_cluster/health")
        .send()
        .expect("request failed");

    assert_eq!(res.status(), 200);
    let body: Value = res.json().unwrap();
    assert_eq!(body["status"], "green");
    assert_eq!(body["number_of_nodes"], 1);
    assert_eq!(body["number_of_data_nodes"], 1);
}

#[test]
fn cat_indices_reports_the_generated_dataset_size() {
    let res = server().get("/_cat/indices").send().expect("request failed");

    assert_eq!(res.status(), 200);
    let body: Value = res.json().unwrap();
    let indices = body.as_array().unwrap();
    assert_eq!(indices.len(), 1);
    assert_eq!(indices[0]["index"], "wazuh-alerts-2024.09.22");
    assert_eq!(
        indices[0]["docs.count"],
        server().dataset_len().to_string()
    );
}

#[test]
fn mapping_exposes_the_index_schema() {
    let res = server()
        .get("/wazuh-alerts-*/_mapping")
        .send()
        .expect("request failed");

    assert_eq!(res.status(), 200);
    let body: Value = res.json().unwrap();
    let props = &body["wazuh-alerts-2024.09.22"]["mappings"]["properties"];
    assert_eq!(props["rule"]["properties"]["level"]["type"], "integer");
    assert_eq!(props["message"]["type"], "text");
}

#[test]
fn unknown_paths_get_404() {
    let res = server().get("/_nodes").send().expect("request failed");

    assert_eq!(res.status(), 404);
}

#[test]
fn wrong_method_gets_405() {
    let res = server()
        .post("/_cluster/health")
        .send()
        .expect("request failed");

    assert_eq!(res.status(), 405);
    assert_eq!(res.headers()["allow"].to_str().unwrap(), "GET");

    let res = server()
        .get("/wazuh-alerts-*/_search")
        .send()
        .expect("request failed");

    assert_eq!(res.status(), 405);
    assert_eq!(res.headers()["allow"].to_str().unwrap(), "POST");
}
