//! # Functions アプリケーション構築
//!
//! DI（ストア・State）の初期化とルーター構築を担当する。
//! `main.rs` はクライアント初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use stintboard_domain::clock::Clock;
use stintboard_infra::{AccountEraser, BlobStore, DocumentStore, IdentityProvider};
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        AccountState,
        ApplicationState,
        ProfileState,
        ReadinessState,
        StintState,
        VerificationState,
        add_business_profile,
        add_stint_posting,
        add_user_profile,
        check_admin,
        delete_user_data,
        handle_application,
        health_check,
        readiness_check,
        request_verification,
        verify_business,
    },
    usecase::{
        AccountUseCaseImpl,
        ApplicationUseCaseImpl,
        ProfileUseCaseImpl,
        StintUseCaseImpl,
        VerificationUseCaseImpl,
    },
};

/// ルーターが依存する外部コンポーネント
///
/// 本番では DynamoDB / S3 / 認証サービスの実装、テストではインメモリ実装を渡す。
#[derive(Clone)]
pub struct AppDependencies {
    pub documents: Arc<dyn DocumentStore>,
    pub blobs:     Arc<dyn BlobStore>,
    pub identity:  Arc<dyn IdentityProvider>,
    pub clock:     Arc<dyn Clock>,
}

/// 全エンドポイントを持つルーターを構築する
pub fn build_router(deps: AppDependencies) -> Router {
    let profile_state = Arc::new(ProfileState {
        usecase: ProfileUseCaseImpl::new(deps.documents.clone()),
    });
    let stint_state = Arc::new(StintState {
        usecase: StintUseCaseImpl::new(deps.documents.clone()),
    });
    let application_state = Arc::new(ApplicationState {
        usecase: ApplicationUseCaseImpl::new(deps.documents.clone()),
    });
    let verification_state = Arc::new(VerificationState {
        usecase: VerificationUseCaseImpl::new(deps.documents.clone(), deps.clock.clone()),
    });
    let account_state = Arc::new(AccountState {
        usecase: AccountUseCaseImpl::new(AccountEraser::with_all_erasers(
            deps.documents.clone(),
            deps.blobs.clone(),
            deps.identity.clone(),
        )),
    });
    let readiness_state = Arc::new(ReadinessState {
        documents: deps.documents.clone(),
    });

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        // プロフィール
        .merge(
            Router::new()
                .route("/add_user_profile", post(add_user_profile))
                .route("/add_business_profile", post(add_business_profile))
                .with_state(profile_state),
        )
        // 募集・応募
        .merge(
            Router::new()
                .route("/add_stint_posting", post(add_stint_posting))
                .with_state(stint_state),
        )
        .merge(
            Router::new()
                .route("/handle_application", post(handle_application))
                .with_state(application_state),
        )
        // ビジネス認証
        .merge(
            Router::new()
                .route("/verify_business", post(verify_business))
                .route("/request_verification", post(request_verification))
                .route("/check_admin", post(check_admin))
                .with_state(verification_state),
        )
        // アカウントデータ消去
        .merge(
            Router::new()
                .route("/delete_user_data", post(delete_user_data))
                .with_state(account_state),
        )
        .layer(TraceLayer::new_for_http())
}
