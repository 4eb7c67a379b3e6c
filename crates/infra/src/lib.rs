//! # Stintboard インフラ層
//!
//! マネージドサービス（DynamoDB / S3 / 認証サービス）との通信を担当する。
//!
//! ## 設計方針
//!
//! 各ストアはトレイト（[`DocumentStore`], [`BlobStore`], [`IdentityProvider`]）の
//! 背後に置き、ユースケース層は `Arc<dyn Trait>` で受け取る。
//! すべての操作は `Result<_, InfraError>` を返し、失敗経路をシグネチャに明示する。
//!
//! ## モジュール構成
//!
//! - [`document_store`] - ドキュメントストア（DynamoDB 実装）
//! - [`dynamodb`] - DynamoDB クライアント生成とテーブル作成
//! - [`blob_store`] - ファイルストア（S3 実装）
//! - [`identity`] - 認証サービスのアカウント削除
//! - [`erasure`] - アカウントデータの一括消去
//! - [`error`] - インフラ層エラー定義
//! - `mock` - テスト用インメモリ実装（`test-utils` feature）

pub mod blob_store;
pub mod document_store;
pub mod dynamodb;
pub mod erasure;
pub mod error;
pub mod identity;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use blob_store::{BlobStore, S3BlobStore};
pub use document_store::{DocumentStore, DynamoDbDocumentStore};
pub use erasure::{AccountEraser, ErasureReport, Outcome};
pub use error::{InfraError, InfraErrorKind};
pub use identity::{HttpIdentityProvider, IdentityProvider};
