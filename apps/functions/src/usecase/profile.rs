//! プロフィール書き込みユースケース
//!
//! ユーザー / ビジネスのプロフィールを `uid` をキーに丸ごと書き込む。
//! 同じ入力で何度呼んでも保存結果は変わらない。

use std::sync::Arc;

use serde_json::Value;
use stintboard_domain::{
    document::fields,
    profile::ProfileKind,
    validation::RequestValidator,
};
use stintboard_infra::DocumentStore;

use crate::error::FunctionError;

const USER_PROFILE: RequestValidator = RequestValidator::new("Invalid user data", &[fields::UID]);
const BUSINESS_PROFILE: RequestValidator =
    RequestValidator::new("Invalid business data", &[fields::UID]);

/// プロフィール書き込みの結果
///
/// ストアの失敗はエラーとして伝播させず、この値に変換する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileWriteOutcome {
    Written { message: String },
    Failed { error: String },
}

/// プロフィール書き込みユースケース
pub struct ProfileUseCaseImpl {
    documents: Arc<dyn DocumentStore>,
}

impl ProfileUseCaseImpl {
    pub fn new(documents: Arc<dyn DocumentStore>) -> Self {
        Self { documents }
    }

    /// プロフィールを書き込む
    ///
    /// 1. 必須フィールド（`uid`）を検証（失敗は `BadRequest`）
    /// 2. ビジネスの場合は保護フィールドを除去
    /// 3. `{collection}/{uid}` に丸ごと書き込む
    pub async fn write_profile(
        &self,
        kind: ProfileKind,
        payload: Value,
    ) -> Result<ProfileWriteOutcome, FunctionError> {
        let validator = match kind {
            ProfileKind::User => USER_PROFILE,
            ProfileKind::Business => BUSINESS_PROFILE,
        };
        let document = validator.validate(payload)?;
        let uid = validator.string_field(&document, fields::UID)?.to_string();

        let collection = kind.collection();
        let document = kind.strip_protected(document);

        match self.documents.set(collection, &uid, document).await {
            Ok(()) => Ok(ProfileWriteOutcome::Written {
                message: format!("Data added successfully to {collection}"),
            }),
            Err(error) => {
                tracing::error!(
                    %collection,
                    uid = %uid,
                    error = %error,
                    "プロフィールの書き込みに失敗"
                );
                Ok(ProfileWriteOutcome::Failed {
                    error: error.to_string(),
                })
            }
        }
    }
}
