use crate::api::Endpoint;
use crate::api::statics;
use crate::data::Dataset;
use crate::error::SearchError;
use crate::query::SearchRequest;
use crate::search::{self, SearchResponse, error_body};
use async_trait::async_trait;
use http::{StatusCode, header};
use pingora::prelude::{HttpPeer, ProxyHttp, Session};
use pingora::{Custom, Error};
use pingora_http::ResponseHeader;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// The mock search engine's HTTP front.
///
/// This is a terminal gateway: every request is answered in
/// `request_filter` and nothing is ever proxied upstream. Handlers
/// share the immutable dataset and never write to it, so concurrent
/// requests need no coordination.
pub struct MockGateway {
    dataset: Arc<Dataset>,
}

impl MockGateway {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl ProxyHttp for MockGateway {
    type CTX = ();

    fn new_ctx(&self) -> Self::CTX {}

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<Box<HttpPeer>> {
        // This is unreachable by design.
        Err(Error::new(Custom(
            "MockGateway attempted to proxy upstream (bug)",
        )))
    }

    async fn request_filter(
        &self,
        session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<bool> {
        let path = session.req_header().uri.path().to_owned();

        let endpoint = match path.parse::<Endpoint>() {
            Ok(endpoint) => endpoint,
            Err(_) => {
                tracing::debug!(path, "no endpoint matched");
                session.respond_error(StatusCode::NOT_FOUND.as_u16()).await?;
                return Ok(true);
            }
        };

        if session.req_header().method != endpoint.method() {
            let mut resp = ResponseHeader::build(StatusCode::METHOD_NOT_ALLOWED, None)?;
            resp.insert_header(header::ALLOW, endpoint.method().as_str())?;
            resp.insert_header(header::CONTENT_LENGTH, "0")?;
            session.write_response_header(Box::new(resp), true).await?;
            return Ok(true);
        }

        self.handle(session, endpoint).await?;
        Ok(true)
    }
}

impl MockGateway {
    async fn handle(&self, session: &mut Session, endpoint: Endpoint) -> pingora::Result<()> {
        match endpoint {
            Endpoint::Root => {
                self.send_json(session, StatusCode::OK, &statics::identity())
                    .await
            }

            Endpoint::ClusterHealth => {
                self.send_json(session, StatusCode::OK, &statics::cluster_health())
                    .await
            }

            Endpoint::CatIndices => {
                let body = statics::cat_indices(self.dataset.len());
                self.send_json(session, StatusCode::OK, &body).await
            }

            Endpoint::Mapping => {
                self.send_json(session, StatusCode::OK, &statics::index_mapping())
                    .await
            }

            Endpoint::Search => self.handle_search(session).await,
        }
    }

    /// Run a search; any failure along the way becomes the generic
    /// search-phase error envelope with HTTP 500.
    async fn handle_search(&self, session: &mut Session) -> pingora::Result<()> {
        match self.run_search(session).await {
            Ok(response) => {
                self.send_json(session, StatusCode::OK, &response).await
            }

            Err(err) => {
                tracing::warn!(error = %err, "search request failed");
                self.send_json(
                    session,
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &error_body(&err.to_string()),
                )
                .await
            }
        }
    }

    async fn run_search(&self, session: &mut Session) -> Result<SearchResponse, SearchError> {
        let request = read_search_request(session).await?;
        let results = search::execute(&self.dataset, &request);

        tracing::debug!(
            total = results.total,
            page = results.hits.len(),
            from = request.from,
            size = request.size,
            "search evaluated"
        );

        // Simulated search time, surfaced as `took`.
        let took_ms: u64 = rand::rng().random_range(5..=50);
        tokio::time::sleep(Duration::from_millis(took_ms)).await;

        Ok(SearchResponse::new(results, took_ms))
    }

    async fn send_json<T: serde::Serialize>(
        &self,
        session: &mut Session,
        status: StatusCode,
        payload: &T,
    ) -> pingora::Result<()> {
        let body =
            serde_json::to_vec(payload).map_err(|_| Error::new(Custom("json serialization failed")))?;

        let mut resp = ResponseHeader::build(status, None)?;
        resp.insert_header(header::CONTENT_TYPE, "application/json")?;
        resp.insert_header(header::CONTENT_LENGTH, body.len().to_string())?;

        session.write_response_header(Box::new(resp), false).await?;
        session.write_response_body(Some(body.into()), true).await?;

        Ok(())
    }
}

/// Read and parse the request body. An absent body means "match all
/// with default pagination"; a body that is not a well-formed search
/// request is an error the caller reports as a search-phase failure.
async fn read_search_request(session: &mut Session) -> Result<SearchRequest, SearchError> {
    let mut raw = Vec::new();
    while let Some(chunk) = session
        .read_request_body()
        .await
        .map_err(|e| SearchError::BodyRead(e.to_string()))?
    {
        raw.extend_from_slice(&chunk);
    }

    if raw.is_empty() {
        return Ok(SearchRequest::default());
    }

    serde_json::from_slice(&raw).map_err(|e| SearchError::InvalidBody(e.to_string()))
}
