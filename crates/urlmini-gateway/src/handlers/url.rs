use crate::error::{AppError, Result};
use crate::model::{ExpandQuery, ExpandResponse, MinifyRequest, MinifyResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use urlmini_core::AliasScheme;

pub async fn minify_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<MinifyRequest>, JsonRejection>,
) -> Result<Json<MinifyResponse>> {
    let Json(request) = request?;
    let scheme = AliasScheme::from_secure_flag(request.use_secure);
    let alias = state.shortener().minify(&request.url, scheme).await?;

    Ok(Json(MinifyResponse {
        mini_url: alias.into_string(),
    }))
}

pub async fn expand_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<ExpandQuery>, QueryRejection>,
) -> Result<Json<ExpandResponse>> {
    let Query(query) = query?;
    match state.shortener().expand(&query.mini_url).await? {
        Some(original_url) => Ok(Json(ExpandResponse { original_url })),
        None => Err(AppError::NotFound(query.mini_url)),
    }
}
