use crate::data::{Dataset, Hit};
use crate::query::{SearchRequest, TermField, TermQuery};
use serde_json::Value;

/// Outcome of evaluating a query against the dataset: the paginated
/// page plus the pre-pagination match count.
#[derive(Debug)]
pub struct SearchResults {
    pub total: usize,
    pub hits: Vec<Hit>,
}

/// Evaluate `request` against the full dataset.
///
/// Semantics are reference-compatible, quirks included:
/// - `must` term clauses narrow the working set sequentially (AND).
/// - `should` term clauses each match against the ORIGINAL dataset and
///   are concatenated, duplicates and all. A non-empty should result
///   replaces the must-filtered set entirely.
/// - `range` conditions pass every record.
/// - Pagination clamps silently; an offset past the end is an empty
///   page, not an error.
pub fn execute(dataset: &Dataset, request: &SearchRequest) -> SearchResults {
    let mut filtered: Vec<&Hit> = dataset.hits().iter().collect();

    if let Some(boolean) = request.query.as_ref().and_then(|q| q.boolean.as_ref()) {
        for clause in &boolean.must {
            if let Some(term) = &clause.term {
                filtered.retain(|hit| matches_term(hit, term));
            }
        }

        let mut should_matches: Vec<&Hit> = Vec::new();
        for clause in &boolean.should {
            if let Some(term) = &clause.term {
                // A should clause over only unrecognized fields contributes
                // nothing; inside a recognized clause, unknown fields are
                // no constraint.
                if term.keys().any(|field| field.parse::<TermField>().is_ok()) {
                    should_matches
                        .extend(dataset.hits().iter().filter(|hit| matches_term(hit, term)));
                }
            }
        }
        if !should_matches.is_empty() {
            filtered = should_matches;
        }
    }

    let total = filtered.len();
    let hits = filtered
        .into_iter()
        .skip(request.from)
        .take(request.size)
        .cloned()
        .collect();

    SearchResults { total, hits }
}

/// A hit matches a term condition when every recognized field agrees.
/// Unrecognized fields are ignored; a recognized field compared against
/// a value of the wrong JSON type matches nothing.
fn matches_term(hit: &Hit, term: &TermQuery) -> bool {
    term.iter().all(|(field, value)| {
        match field.parse::<TermField>() {
            Ok(TermField::RuleLevel) => value
                .as_u64()
                .is_some_and(|level| u64::from(hit.source.rule.level) == level),
            Ok(TermField::RuleCategory) => {
                matches_str(value, |category| hit.source.rule.category == category)
            }
            Ok(TermField::AgentName) => {
                matches_str(value, |name| hit.source.agent.name.contains(name))
            }
            Err(_) => true,
        }
    })
}

fn matches_str(value: &Value, predicate: impl Fn(&str) -> bool) -> bool {
    value.as_str().is_some_and(predicate)
}
