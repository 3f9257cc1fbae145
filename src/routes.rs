use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::{error::ApiError, registry::Activity, state::AppState};

#[derive(Deserialize)]
pub struct EmailParam {
    email: String,
}

pub async fn activities_handler(
    State(state): State<Arc<AppState>>,
) -> Json<HashMap<String, Activity>> {
    let registry = state.registry.read().unwrap();

    Json(registry.snapshot())
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParam>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let mut registry = state.registry.write().unwrap();
    registry.signup(&activity_name, &params.email)?;

    info!("Signed up {} for {}", params.email, activity_name);

    Ok(Json(json!({
        "message": format!("Signed up {} for {}", params.email, activity_name)
    })))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParam>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let mut registry = state.registry.write().unwrap();
    registry.unregister(&activity_name, &params.email)?;

    info!("Unregistered {} from {}", params.email, activity_name);

    Ok(Json(json!({
        "message": format!("Unregistered {} from {}", params.email, activity_name)
    })))
}
