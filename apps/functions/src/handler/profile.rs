//! # プロフィールハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /add_user_profile` - ユーザープロフィールの書き込み
//! - `POST /add_business_profile` - ビジネスプロフィールの書き込み（`verified` は除去）

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use stintboard_domain::profile::ProfileKind;
use stintboard_shared::{FailureResponse, SuccessResponse};

use super::json_body;
use crate::{
    error::FunctionError,
    usecase::{ProfileUseCaseImpl, ProfileWriteOutcome},
};

/// プロフィール API の共有状態
pub struct ProfileState {
    pub usecase: ProfileUseCaseImpl,
}

/// POST /add_user_profile
pub async fn add_user_profile(
    State(state): State<Arc<ProfileState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, FunctionError> {
    write_profile(&state, ProfileKind::User, json_body(payload)).await
}

/// POST /add_business_profile
pub async fn add_business_profile(
    State(state): State<Arc<ProfileState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, FunctionError> {
    write_profile(&state, ProfileKind::Business, json_body(payload)).await
}

async fn write_profile(
    state: &ProfileState,
    kind: ProfileKind,
    payload: Value,
) -> Result<Response, FunctionError> {
    let response = match state.usecase.write_profile(kind, payload).await? {
        ProfileWriteOutcome::Written { message } => {
            (StatusCode::OK, Json(SuccessResponse::message(message))).into_response()
        }
        ProfileWriteOutcome::Failed { error } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(FailureResponse::new(error)),
        )
            .into_response(),
    };
    Ok(response)
}
