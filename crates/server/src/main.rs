//! Binary entry point: configure, seed, serve.

use std::sync::Arc;

use salvo::prelude::*;

use roster_core::StoreContext;

use crate::config::ServerConfig;

pub mod config;
pub mod server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let config = ServerConfig::from_env();
    let context = Arc::new(StoreContext::new());

    tracing::info!(
        addr = %config.listen_addr,
        origin = %config.allow_origin,
        users = context.store.len(),
        "serving the roster on /graphql"
    );

    let acceptor = TcpListener::new(config.listen_addr.clone()).bind().await;
    Server::new(acceptor)
        .serve(server::service(&config, context))
        .await;
}
