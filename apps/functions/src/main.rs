//! # Functions サーバー
//!
//! クライアントアプリから直接呼ばれる HTTP 関数群を提供する。
//!
//! ## 役割
//!
//! - **プロフィール**: ユーザー / ビジネスのプロフィール書き込み
//! - **募集・応募**: 認証済みビジネスの募集作成と応募の記録
//! - **ビジネス認証**: 管理者による認証、認証申請、管理者判定
//! - **アカウント消去**: ドキュメント・ファイル・認証アカウントの一括消去
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `FUNCTIONS_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `FUNCTIONS_PORT` | **Yes** | ポート番号 |
//! | `AWS_REGION` | No | AWS リージョン（デフォルト: `ap-northeast-1`） |
//! | `DYNAMODB_ENDPOINT` | No | DynamoDB Local のエンドポイント |
//! | `DYNAMODB_TABLE_NAME` | No | ドキュメントテーブル名（デフォルト: `stintboard_documents`） |
//! | `S3_ENDPOINT_URL` | No | MinIO などのエンドポイント |
//! | `S3_BUCKET_NAME` | **Yes** | ファイル用バケット名 |
//! | `IDENTITY_SERVICE_URL` | **Yes** | 認証サービスのベース URL |
//! | `LOG_FORMAT` | No | `json` で JSON ログ（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! FUNCTIONS_PORT=8080 S3_BUCKET_NAME=stintboard IDENTITY_SERVICE_URL=http://localhost:9099 \
//!     cargo run -p stintboard-functions
//! ```

use std::{net::SocketAddr, sync::Arc};

use stintboard_domain::clock::SystemClock;
use stintboard_functions::{
    app::{AppDependencies, build_router},
    config::FunctionsConfig,
};
use stintboard_infra::{
    DynamoDbDocumentStore,
    HttpIdentityProvider,
    S3BlobStore,
    blob_store,
    dynamodb,
};
use stintboard_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Functions サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("stintboard-functions");
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = FunctionsConfig::from_env()?;

    tracing::info!(
        "Functions サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // ドキュメントストア
    let dynamodb_client =
        dynamodb::create_client(config.dynamodb_endpoint.as_deref(), &config.aws_region).await;
    dynamodb::ensure_document_table(&dynamodb_client, &config.dynamodb_table_name).await?;
    tracing::info!(table = %config.dynamodb_table_name, "DynamoDB に接続しました");

    // ファイルストア
    let s3_client =
        blob_store::create_client(config.s3_endpoint_url.as_deref(), &config.aws_region).await;

    let deps = AppDependencies {
        documents: Arc::new(DynamoDbDocumentStore::new(
            dynamodb_client,
            config.dynamodb_table_name.clone(),
        )),
        blobs:     Arc::new(S3BlobStore::new(s3_client, config.s3_bucket_name.clone())),
        identity:  Arc::new(HttpIdentityProvider::new(&config.identity_service_url)?),
        clock:     Arc::new(SystemClock),
    };

    let app = build_router(deps);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Functions サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
