//! # ビジネス認証ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /verify_business` - 管理者によるビジネス認証
//! - `POST /request_verification` - ビジネスによる認証申請
//! - `POST /check_admin` - 管理者判定

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use stintboard_shared::SuccessResponse;

use super::json_body;
use crate::{error::FunctionError, usecase::VerificationUseCaseImpl};

/// ビジネス認証 API の共有状態
pub struct VerificationState {
    pub usecase: VerificationUseCaseImpl,
}

/// 管理者判定レスポンスの追加フィールド
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCheck {
    pub is_admin: bool,
}

/// POST /verify_business
pub async fn verify_business(
    State(state): State<Arc<VerificationState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, FunctionError> {
    state.usecase.verify_business(json_body(payload)).await?;

    Ok(Json(SuccessResponse::message("Business verified successfully")))
}

/// POST /request_verification
pub async fn request_verification(
    State(state): State<Arc<VerificationState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, FunctionError> {
    state.usecase.request_verification(json_body(payload)).await?;

    Ok(Json(SuccessResponse::message(
        "Verification requested successfully",
    )))
}

/// POST /check_admin
pub async fn check_admin(
    State(state): State<Arc<VerificationState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, FunctionError> {
    let is_admin = state.usecase.check_admin(json_body(payload)).await?;

    Ok(Json(SuccessResponse::data(AdminCheck { is_admin })))
}
