//! # 募集ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /add_stint_posting` - 認証済みビジネスの募集作成

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use stintboard_domain::ids::StintId;
use stintboard_shared::SuccessResponse;

use super::json_body;
use crate::{error::FunctionError, usecase::StintUseCaseImpl};

/// 募集 API の共有状態
pub struct StintState {
    pub usecase: StintUseCaseImpl,
}

/// 募集作成レスポンスの追加フィールド
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StintCreated {
    pub stint_id: StintId,
}

/// POST /add_stint_posting
pub async fn add_stint_posting(
    State(state): State<Arc<StintState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, FunctionError> {
    let stint_id = state.usecase.create_stint(json_body(payload)).await?;

    Ok(Json(SuccessResponse::with(
        "Stint posting added successfully",
        StintCreated { stint_id },
    )))
}
