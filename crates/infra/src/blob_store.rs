//! # ファイルストア（S3 / MinIO）
//!
//! 応募書類（`cvs/`）やアップロードファイル（`uploads/`）を格納するバケットへの
//! 一覧取得と削除を提供する。
//!
//! ## 設計方針
//!
//! - **ローカル開発**: MinIO を使用（`S3_ENDPOINT_URL` で接続先を指定）
//! - **本番環境**: IAM ロールによる認証で Amazon S3 に接続（`S3_ENDPOINT_URL` 未設定）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use stintboard_infra::blob_store::{self, S3BlobStore};
//!
//! async fn setup() {
//!     // ローカル（MinIO）
//!     let client = blob_store::create_client(Some("http://localhost:19000"), "ap-northeast-1").await;
//!     let blobs = S3BlobStore::new(client, "stintboard-dev-files");
//! }
//! ```

use async_trait::async_trait;
use aws_sdk_s3::Client;

use crate::InfraError;

/// ファイルストアのインターフェース
///
/// テスト時は [`crate::mock::InMemoryBlobStore`] に差し替える。
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// プレフィックスに一致するオブジェクト名をすべて返す
    async fn list_names(&self, prefix: &str) -> Result<Vec<String>, InfraError>;

    /// オブジェクトを削除する。存在しなくてもエラーにしない
    async fn delete(&self, name: &str) -> Result<(), InfraError>;
}

/// S3 実装
#[derive(Clone)]
pub struct S3BlobStore {
    client:      Client,
    bucket_name: String,
}

impl S3BlobStore {
    pub fn new(client: Client, bucket_name: impl Into<String>) -> Self {
        Self {
            client,
            bucket_name: bucket_name.into(),
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    #[tracing::instrument(skip_all, level = "debug", fields(%prefix))]
    async fn list_names(&self, prefix: &str) -> Result<Vec<String>, InfraError> {
        let mut names = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let output = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket_name)
                .prefix(prefix)
                .set_continuation_token(continuation_token.take())
                .send()
                .await
                .map_err(|e| InfraError::s3(format!("ListObjectsV2 失敗: {e}")))?;

            names.extend(
                output
                    .contents()
                    .iter()
                    .filter_map(|object| object.key().map(str::to_string)),
            );

            match output.next_continuation_token() {
                Some(token) if output.is_truncated().unwrap_or(false) => {
                    continuation_token = Some(token.to_string());
                }
                _ => break,
            }
        }

        Ok(names)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%name))]
    async fn delete(&self, name: &str) -> Result<(), InfraError> {
        self.client
            .delete_object()
            .bucket(&self.bucket_name)
            .key(name)
            .send()
            .await
            .map_err(|e| InfraError::s3(format!("DeleteObject 失敗 ({name}): {e}")))?;

        Ok(())
    }
}

/// S3 クライアントを作成する
///
/// `endpoint` が `Some` の場合は MinIO 等のカスタムエンドポイントに接続する。
/// `None` の場合は AWS S3 のデフォルトエンドポイントを使用する。
///
/// 認証情報は SDK のデフォルト認証チェーンで解決する:
/// - ローカル: 環境変数 `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`（`.env` で設定）
/// - 本番: IAM ロール
pub async fn create_client(endpoint: Option<&str>, region: &str) -> Client {
    let mut config_builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    if let Some(endpoint_url) = endpoint {
        config_builder = config_builder.endpoint_url(endpoint_url);
    }

    let config = config_builder.load().await;

    // MinIO はパススタイルが必要
    let s3_config = aws_sdk_s3::config::Builder::from(&config)
        .force_path_style(endpoint.is_some())
        .build();

    Client::from_conf(s3_config)
}
