//! # Stintboard 共有ユーティリティ
//!
//! Functions アプリとインフラ層の両方から使われる、ビジネスロジックを含まない
//! 共通型を提供する。
//!
//! - [`function_response`] - `{ "success": bool, ... }` 形式のレスポンスエンベロープ
//! - [`health`] - ヘルスチェック / Readiness のレスポンス型
//! - [`observability`] - トレーシング初期化

pub mod function_response;
pub mod health;
pub mod observability;

pub use function_response::{FailureResponse, SuccessResponse};
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
