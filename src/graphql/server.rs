use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{MethodRouter, post},
};
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::Result;

use super::RosterSchema;

async fn graphql_handler(
    State(schema): State<RosterSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Routes for the GraphQL endpoint, plus the GraphiQL explorer on the same path.
pub fn router(schema: RosterSchema, settings: &ServerSettings) -> Router {
    let mut route: MethodRouter<RosterSchema> = post(graphql_handler);
    if settings.explorer {
        let page = GraphiQLSource::build().endpoint(&settings.path).finish();
        route = route.get(move || async move { Html(page) });
    }

    Router::new().route(&settings.path, route).with_state(schema)
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve(
    listener: TcpListener,
    schema: RosterSchema,
    settings: &ServerSettings,
) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(
        %addr,
        path = %settings.path,
        explorer = settings.explorer,
        "GraphQL server listening"
    );

    axum::serve(listener, router(schema, settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

pub async fn run_server(schema: RosterSchema, settings: &ServerSettings) -> Result<()> {
    let listener = TcpListener::bind(settings.address()).await?;
    serve(listener, schema, settings).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
