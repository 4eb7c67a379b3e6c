//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証とストア操作はユースケース層に委譲
//!
//! ## ボディの受け取り
//!
//! ボディは `serde_json::Value` として受け取る。JSON として解釈できないボディは
//! `null` として扱い、ユースケース側の検証でエンドポイントごとの 400 メッセージを返す。

pub mod account;
pub mod application;
pub mod health;
pub mod profile;
pub mod stint;
pub mod verification;

pub use account::{AccountState, delete_user_data};
pub use application::{ApplicationState, handle_application};
use axum::{Json, extract::rejection::JsonRejection};
pub use health::{ReadinessState, health_check, readiness_check};
pub use profile::{ProfileState, add_business_profile, add_user_profile};
use serde_json::Value;
pub use stint::{StintState, add_stint_posting};
pub use verification::{VerificationState, check_admin, request_verification, verify_business};

/// 受信したボディを JSON 値として取り出す
fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Value {
    match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "JSON ボディを解釈できません");
            Value::Null
        }
    }
}
