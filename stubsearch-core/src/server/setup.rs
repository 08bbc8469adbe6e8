use crate::api::{Endpoint, MockGateway};
use crate::config::StubsearchConfig;
use crate::data::Dataset;
use anyhow::Result;
use pingora::prelude::http_proxy_service;
use pingora::server::Server;
use std::sync::Arc;

/// Generate the dataset once, then serve it forever.
pub fn run(config: StubsearchConfig) -> Result<()> {
    let dataset = Arc::new(Dataset::generate(config.data.generated_records));

    tracing::info!(
        records = dataset.len(),
        generated = config.data.generated_records,
        "sample dataset generated"
    );
    log_routes(&config.server.listen);

    let server = build_server(&config, dataset)?;

    // run_forever blocks the main thread as intended.
    server.run_forever();
}

/// Build the Pingora server with the mock gateway mounted on the
/// configured listen address. Split out from [`run`] so tests can spin
/// up a server against an ephemeral port with a pre-built dataset.
pub fn build_server(config: &StubsearchConfig, dataset: Arc<Dataset>) -> Result<Server> {
    let mut server = Server::new(None)?;
    server.bootstrap();

    let gateway = MockGateway::new(dataset);

    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&config.server.listen);

    server.add_service(svc);

    Ok(server)
}

fn log_routes(listen: &str) {
    tracing::info!(listen, "starting mock search service");
    for (endpoint, path, description) in Endpoint::all() {
        tracing::info!(
            method = %endpoint.method(),
            path,
            description,
            "route registered"
        );
    }
}
