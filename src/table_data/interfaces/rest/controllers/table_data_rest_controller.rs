use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::table_data::{
    domain::{
        model::queries::table_data_request::TableDataRequest,
        services::{
            table_data_compact_query_service::TableDataCompactQueryService,
            table_data_query_service::TableDataQueryService,
        },
    },
    infrastructure::persistence::repositories::table_data_cache_repository::TableDataCacheRepository,
    interfaces::rest::resources::{
        compact_table_data_response_resource::CompactTableDataResponseResource,
        table_data_response_resource::TableDataResponseResource,
    },
};

#[derive(Clone)]
pub struct TableDataRestControllerState {
    pub query_service: Arc<dyn TableDataQueryService>,
    pub compact_query_service: Arc<dyn TableDataCompactQueryService>,
    pub cache: Arc<dyn TableDataCacheRepository>,
}

pub fn router(state: TableDataRestControllerState) -> Router {
    Router::new()
        .route("/api/:database_name/:table_name/data", get(get_table_data))
        .route(
            "/api/:database_name/:table_name/data/compact",
            get(get_compact_table_data),
        )
        .with_state(state)
}

// Both endpoints answer 200 for every failure, with one empty shape per
// endpoint. Failure reasons only reach the logs.

#[utoipa::path(
    get,
    path = "/api/{database_name}/{table_name}/data",
    tag = "table-data",
    params(
        ("database_name" = String, Path, description = "Configured database name"),
        ("table_name" = String, Path, description = "Table name")
    ),
    responses(
        (status = 200, description = "Table rows; empty when the request could not be served", body = TableDataResponseResource)
    )
)]
pub async fn get_table_data(
    State(state): State<TableDataRestControllerState>,
    Path((database_name, table_name)): Path<(String, String)>,
) -> Json<TableDataResponseResource> {
    let request = TableDataRequest::new(database_name, table_name);

    match state.query_service.handle_get_table_data(&request).await {
        Ok(table_data) => {
            if table_data.is_cacheable() {
                state
                    .cache
                    .insert(request.cache_key(), Arc::clone(&table_data.rows))
                    .await;
            }
            Json(TableDataResponseResource::from(table_data))
        }
        Err(error) => {
            tracing::debug!(
                database_name = request.database_name(),
                table_name = request.table_name(),
                %error,
                "table data request failed"
            );
            Json(TableDataResponseResource::empty(&request))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/{database_name}/{table_name}/data/compact",
    tag = "table-data",
    params(
        ("database_name" = String, Path, description = "Configured database name"),
        ("table_name" = String, Path, description = "Table name")
    ),
    responses(
        (status = 200, description = "Column names and positional rows; empty when the request could not be served", body = CompactTableDataResponseResource)
    )
)]
pub async fn get_compact_table_data(
    State(state): State<TableDataRestControllerState>,
    Path((database_name, table_name)): Path<(String, String)>,
) -> Json<CompactTableDataResponseResource> {
    let request = TableDataRequest::new(database_name, table_name);

    match state
        .compact_query_service
        .handle_get_compact_table_data(&request)
        .await
    {
        Ok(compact) => Json(CompactTableDataResponseResource::from(compact)),
        Err(error) => {
            tracing::debug!(
                database_name = request.database_name(),
                table_name = request.table_name(),
                %error,
                "compact table data request failed"
            );
            Json(CompactTableDataResponseResource::default())
        }
    }
}
