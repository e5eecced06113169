//! The `/graphql` endpoint and the service around it.

use std::sync::Arc;

use juniper::http::GraphQLRequest;
use salvo::cors::Cors;
use salvo::http::Method;
use salvo::logging::Logger;
use salvo::prelude::*;

use roster_core::{Schema, StoreContext, create_schema};

use crate::config::ServerConfig;

/// Handler for GraphQL requests, on GET and POST alike.
///
/// GET carries the document in the `query` URL parameter (plus an optional
/// `operationName`); POST carries the usual JSON request body. Either way
/// the executor's response is rendered as JSON with HTTP status 200, with
/// parse and validation problems reported inside its `errors` array.
#[handler]
async fn graphql(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let schema = depot
        .obtain::<Arc<Schema>>()
        .map_err(|_| StatusError::internal_server_error())?;
    let context = depot
        .obtain::<Arc<StoreContext>>()
        .map_err(|_| StatusError::internal_server_error())?;

    let data = if req.method() == Method::GET {
        let query = req
            .query::<String>("query")
            .ok_or_else(|| StatusError::bad_request().brief("missing `query` parameter"))?;
        GraphQLRequest::new(query, req.query::<String>("operationName"), None)
    } else {
        req.parse_json::<GraphQLRequest>()
            .await
            .map_err(|_| StatusError::bad_request().brief("body is not a GraphQL request"))?
    };

    let response = data.execute(schema.as_ref(), context.as_ref()).await;
    if !response.is_ok() {
        tracing::warn!("graphql request finished with errors");
    }
    res.render(Json(response));
    Ok(())
}

/// Router with the single `/graphql` route. The schema and the context are
/// injected as shared state so every request resolves against the same
/// roster.
pub fn route(context: Arc<StoreContext>) -> Router {
    Router::with_path("graphql")
        .hoop(affix_state::inject(Arc::new(create_schema())).inject(context))
        .get(graphql)
        .post(graphql)
}

/// The full service: request logging, then the CORS layer, then the router.
/// Preflight OPTIONS requests are answered by the CORS handler itself.
pub fn service(config: &ServerConfig, context: Arc<StoreContext>) -> Service {
    let cors = Cors::new()
        .allow_origin(&config.allow_origin)
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec!["content-type"])
        .into_handler();

    Service::new(route(context))
        .hoop(Logger::new())
        .hoop(cors)
}
