use crate::query::{SearchRequest, TermField};
use pretty_assertions::assert_eq;

#[test]
fn empty_object_uses_pagination_defaults() {
    // Act
    let req: SearchRequest = serde_json::from_str("{}").unwrap();

    // Assert
    assert!(req.query.is_none());
    assert_eq!(req.size, 10);
    assert_eq!(req.from, 0);
}

#[test]
fn parses_bool_must_term_query() {
    let req: SearchRequest = serde_json::from_str(
        r#"{
            "query": {
                "bool": {
                    "must": [
                        {"term": {"rule.level": 12}},
                        {"term": {"agent.name": "web"}}
                    ]
                }
            },
            "size": 25,
            "from": 5
        }"#,
    )
    .unwrap();

    let boolean = req.query.unwrap().boolean.unwrap();
    assert_eq!(boolean.must.len(), 2);
    assert!(boolean.should.is_empty());
    assert_eq!(req.size, 25);
    assert_eq!(req.from, 5);

    let term = boolean.must[0].term.as_ref().unwrap();
    assert_eq!(term["rule.level"], 12);
}

#[test]
fn clause_without_term_condition_is_not_an_error() {
    let req: SearchRequest = serde_json::from_str(
        r#"{"query": {"bool": {"must": [{"match_all": {}}]}}}"#,
    )
    .unwrap();

    let boolean = req.query.unwrap().boolean.unwrap();
    assert!(boolean.must[0].term.is_none());
}

#[test]
fn range_query_is_parsed() {
    let req: SearchRequest = serde_json::from_str(
        r#"{"query": {"range": {"@timestamp": {"gte": "now-1h"}}}}"#,
    )
    .unwrap();

    let range = req.query.unwrap().range.unwrap();
    assert!(range.contains_key("@timestamp"));
}

#[test]
fn non_object_body_fails_to_parse() {
    let err = serde_json::from_str::<SearchRequest>(r#""not a query""#);
    assert!(err.is_err());
}

#[test]
fn term_field_names_round_trip() {
    assert_eq!("rule.level".parse::<TermField>(), Ok(TermField::RuleLevel));
    assert_eq!(
        "rule.category".parse::<TermField>(),
        Ok(TermField::RuleCategory)
    );
    assert_eq!("agent.name".parse::<TermField>(), Ok(TermField::AgentName));
    assert!("rule.id".parse::<TermField>().is_err());
}
