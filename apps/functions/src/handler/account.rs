//! # アカウントデータ消去ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /delete_user_data` - 全ストアからのアカウントデータ消去
//!
//! 検証を通過すれば、個別ステップが失敗しても `success: true` を返す。
//! 失敗したステップは `failedSteps` に列挙される。
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "User data deleted successfully",
//!   "erased": { "blobs:cvs/": 1, "documents:users": 1 },
//!   "failedSteps": ["identity:account"]
//! }
//! ```

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use stintboard_infra::ErasureReport;
use stintboard_shared::SuccessResponse;

use super::json_body;
use crate::{error::FunctionError, usecase::AccountUseCaseImpl};

/// アカウント API の共有状態
pub struct AccountState {
    pub usecase: AccountUseCaseImpl,
}

/// 消去レポートの要約
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErasureSummary {
    /// 成功したステップ名 → 消去件数
    pub erased:       BTreeMap<&'static str, u64>,
    pub failed_steps: Vec<&'static str>,
}

impl From<&ErasureReport> for ErasureSummary {
    fn from(report: &ErasureReport) -> Self {
        Self {
            erased:       report.deleted_counts().into_iter().collect(),
            failed_steps: report.failed_steps(),
        }
    }
}

/// POST /delete_user_data
pub async fn delete_user_data(
    State(state): State<Arc<AccountState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, FunctionError> {
    let report = state.usecase.delete_user_data(json_body(payload)).await?;

    Ok(Json(SuccessResponse::with(
        "User data deleted successfully",
        ErasureSummary::from(&report),
    )))
}
