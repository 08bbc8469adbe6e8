use crate::api::Endpoint;
use crate::api::statics;
use http::Method;
use pretty_assertions::assert_eq;

#[test]
fn paths_resolve_to_endpoints() {
    assert_eq!("/".parse::<Endpoint>(), Ok(Endpoint::Root));
    assert_eq!(
        "/_cluster/health".parse::<Endpoint>(),
        Ok(Endpoint::ClusterHealth)
    );
    assert_eq!(
        "/wazuh-alerts-*/_search".parse::<Endpoint>(),
        Ok(Endpoint::Search)
    );
    assert_eq!("/_cat/indices".parse::<Endpoint>(), Ok(Endpoint::CatIndices));
    assert_eq!(
        "/wazuh-alerts-*/_mapping".parse::<Endpoint>(),
        Ok(Endpoint::Mapping)
    );
}

#[test]
fn unknown_paths_do_not_resolve() {
    assert!("/unknown".parse::<Endpoint>().is_err());
    assert!("/wazuh-alerts-2024.09.22/_search".parse::<Endpoint>().is_err());
    assert!("".parse::<Endpoint>().is_err());
}

#[test]
fn only_search_accepts_post() {
    for (endpoint, _, _) in Endpoint::all() {
        let expected = if *endpoint == Endpoint::Search {
            Method::POST
        } else {
            Method::GET
        };
        assert_eq!(endpoint.method(), expected);
    }
}

#[test]
fn identity_payload_is_the_fixed_descriptor() {
    let body = statics::identity();

    assert_eq!(body["name"], "mock-elasticsearch");
    assert_eq!(body["cluster_name"], "elasticsearch");
    assert_eq!(body["version"]["number"], "7.17.0");
    assert_eq!(body["tagline"], "You Know, for Search");
}

#[test]
fn cluster_health_is_always_green() {
    let body = statics::cluster_health();

    assert_eq!(body["status"], "green");
    assert_eq!(body["number_of_nodes"], 1);
    assert_eq!(body["active_shards_percent_as_number"], 100.0);
}

#[test]
fn cat_indices_reports_the_live_document_count() {
    let body = statics::cat_indices(105);

    let index = &body[0];
    assert_eq!(index["index"], "wazuh-alerts-2024.09.22");
    assert_eq!(index["docs.count"], "105");
    assert_eq!(index["health"], "green");
}

#[test]
fn mapping_describes_the_filterable_fields() {
    let body = statics::index_mapping();

    let props = &body["wazuh-alerts-2024.09.22"]["mappings"]["properties"];
    assert_eq!(props["rule"]["properties"]["level"]["type"], "integer");
    assert_eq!(props["rule"]["properties"]["category"]["type"], "keyword");
    assert_eq!(props["agent"]["properties"]["name"]["type"], "keyword");
    assert_eq!(props["@timestamp"]["type"], "date");
}
