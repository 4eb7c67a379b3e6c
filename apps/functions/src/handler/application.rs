//! # 応募ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /handle_application` - 募集への応募

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use stintboard_domain::ids::ApplicationId;
use stintboard_shared::SuccessResponse;

use super::json_body;
use crate::{error::FunctionError, usecase::ApplicationUseCaseImpl};

/// 応募 API の共有状態
pub struct ApplicationState {
    pub usecase: ApplicationUseCaseImpl,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmitted {
    pub application_id: ApplicationId,
}

/// POST /handle_application
pub async fn handle_application(
    State(state): State<Arc<ApplicationState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, FunctionError> {
    let application_id = state.usecase.submit_application(json_body(payload)).await?;

    Ok(Json(SuccessResponse::with(
        "Application submitted successfully",
        ApplicationSubmitted { application_id },
    )))
}
