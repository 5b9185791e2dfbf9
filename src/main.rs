use axum::Router;
use dotenvy::dotenv;
use table_data_api::{
    config::app_config::AppConfig,
    shared::infrastructure::logging::register_logger,
    table_data::{
        build_table_data_router,
        interfaces::rest::resources::{
            compact_table_data_response_resource::CompactTableDataResponseResource,
            table_data_response_resource::TableDataResponseResource,
        },
    },
};
use tokio::signal;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        table_data_api::table_data::interfaces::rest::controllers::table_data_rest_controller::get_table_data,
        table_data_api::table_data::interfaces::rest::controllers::table_data_rest_controller::get_compact_table_data
    ),
    components(
        schemas(
            TableDataResponseResource,
            CompactTableDataResponseResource
        )
    ),
    tags(
        (name = "table-data", description = "Read-only table data served through a chain of data handlers")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    register_logger();

    let config = AppConfig::from_env();

    let app = Router::new()
        .merge(build_table_data_router(&config))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!("server listening on http://localhost:{}", config.port);
    tracing::info!(
        "swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("failed to start axum server");

    tracing::info!("server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
