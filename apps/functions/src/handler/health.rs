//! # ヘルスチェックハンドラ
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready`: Readiness Check（ドキュメントストアへの疎通を確認）
//!
//! レスポンス型は [`stintboard_shared::HealthResponse`] / [`stintboard_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use stintboard_infra::DocumentStore;
use stintboard_shared::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub documents: Arc<dyn DocumentStore>,
}

/// Readiness Check エンドポイント
///
/// 全チェック OK → 200、1 つでも失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let mut checks = HashMap::new();
    checks.insert(
        "dynamodb".to_string(),
        check_documents(state.documents.as_ref()).await,
    );

    let response = ReadinessResponse::from_checks(checks);
    let http_status = match response.status {
        ReadinessStatus::Ready => StatusCode::OK,
        ReadinessStatus::NotReady => StatusCode::SERVICE_UNAVAILABLE,
    };

    (http_status, Json(response))
}

/// ドキュメントストアへの疎通を確認する（タイムアウト: 5 秒）
async fn check_documents(documents: &dyn DocumentStore) -> CheckStatus {
    match tokio::time::timeout(Duration::from_secs(5), documents.ping()).await {
        Ok(Ok(())) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: document store ping failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: document store check timed out");
            CheckStatus::Error
        }
    }
}
