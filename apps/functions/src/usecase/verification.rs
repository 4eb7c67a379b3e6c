//! ビジネス認証ユースケース
//!
//! ## 管理者判定
//!
//! `admins/{id}` にドキュメントが存在すれば管理者とみなす（[`AdminGate`]）。
//! 判定に使う ID はリクエストボディに含まれる値をそのまま信頼する。
//! 署名やセッションによる本人確認は行わないため、管理者 ID を知っていれば
//! 誰でも認証操作を実行できる。

use std::sync::Arc;

use serde_json::Value;
use stintboard_domain::{
    DomainError,
    business::{verification_fields, verification_request_fields},
    clock::Clock,
    document::{Collection, fields},
    validation::RequestValidator,
};
use stintboard_infra::DocumentStore;

use crate::error::FunctionError;

const VERIFY_BUSINESS: RequestValidator =
    RequestValidator::new("Invalid request data", &[fields::BUSINESS_ID, fields::ADMIN_ID]);
const REQUEST_VERIFICATION: RequestValidator =
    RequestValidator::new("Invalid request data", &[fields::BUSINESS_ID]);
const CHECK_ADMIN: RequestValidator =
    RequestValidator::new("Invalid request data", &[fields::USER_ID]);

/// 管理者ゲートの判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminGate {
    Authorized,
    Unauthorized,
}

impl AdminGate {
    pub fn is_authorized(self) -> bool {
        self == Self::Authorized
    }

    pub fn into_result(self) -> Result<(), DomainError> {
        match self {
            Self::Authorized => Ok(()),
            Self::Unauthorized => Err(DomainError::Forbidden(
                "Unauthorized: Not an admin".to_string(),
            )),
        }
    }
}

/// ビジネス認証ユースケース
pub struct VerificationUseCaseImpl {
    documents: Arc<dyn DocumentStore>,
    clock:     Arc<dyn Clock>,
}

impl VerificationUseCaseImpl {
    pub fn new(documents: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { documents, clock }
    }

    /// 管理者レジストリに ID が存在するかを判定する
    pub async fn authorize(&self, admin_id: &str) -> Result<AdminGate, FunctionError> {
        let admin = self.documents.get(Collection::Admins, admin_id).await?;
        Ok(match admin {
            Some(_) => AdminGate::Authorized,
            None => AdminGate::Unauthorized,
        })
    }

    /// 管理者がビジネスを認証する
    ///
    /// `verified`, `verifiedAt`, `verifiedBy` をマージする。同じ管理者が繰り返しても
    /// `verified` は `true` のまま変わらない。ビジネスが存在しなければストアエラー。
    pub async fn verify_business(&self, payload: Value) -> Result<(), FunctionError> {
        let document = VERIFY_BUSINESS.validate(payload)?;
        let business_id = VERIFY_BUSINESS.string_field(&document, fields::BUSINESS_ID)?;
        let admin_id = VERIFY_BUSINESS.string_field(&document, fields::ADMIN_ID)?;

        self.authorize(admin_id).await?.into_result()?;

        self.documents
            .update(
                Collection::Businesses,
                business_id,
                verification_fields(admin_id, self.clock.timestamp()),
            )
            .await?;

        tracing::info!(business_id, admin_id, "ビジネスを認証");
        Ok(())
    }

    /// ビジネスが認証を申請する
    pub async fn request_verification(&self, payload: Value) -> Result<(), FunctionError> {
        let document = REQUEST_VERIFICATION.validate(payload)?;
        let business_id = REQUEST_VERIFICATION.string_field(&document, fields::BUSINESS_ID)?;

        self.documents
            .update(
                Collection::Businesses,
                business_id,
                verification_request_fields(self.clock.timestamp()),
            )
            .await?;

        Ok(())
    }

    /// `userId` が管理者かどうかを返す
    pub async fn check_admin(&self, payload: Value) -> Result<bool, FunctionError> {
        let document = CHECK_ADMIN.validate(payload)?;
        let user_id = CHECK_ADMIN.string_field(&document, fields::USER_ID)?;

        Ok(self.authorize(user_id).await?.is_authorized())
    }
}
