//! 募集作成ユースケース
//!
//! 募集は認証済みビジネスのみ作成できる。認証状態の確認と作成の間に
//! ロックはなく、確認直後に認証が取り消されても作成は進む。

use std::sync::Arc;

use serde_json::Value;
use stintboard_domain::{
    business::VerificationGate,
    document::{Collection, fields},
    ids::StintId,
    validation::RequestValidator,
};
use stintboard_infra::DocumentStore;

use crate::error::FunctionError;

const STINT: RequestValidator = RequestValidator::new("Invalid stint data", &[fields::BUSINESS_ID]);

/// 募集作成ユースケース
pub struct StintUseCaseImpl {
    documents: Arc<dyn DocumentStore>,
}

impl StintUseCaseImpl {
    pub fn new(documents: Arc<dyn DocumentStore>) -> Self {
        Self { documents }
    }

    /// 募集を作成し、採番した ID を返す
    ///
    /// - ビジネスプロフィールがない: `NotFound`
    /// - `verified` が `true` でない: `Forbidden`
    pub async fn create_stint(&self, payload: Value) -> Result<StintId, FunctionError> {
        let mut document = STINT.validate(payload)?;
        let business_id = STINT.string_field(&document, fields::BUSINESS_ID)?;

        let business = self.documents.get(Collection::Businesses, business_id).await?;
        VerificationGate::evaluate(business.as_ref()).into_result(business_id)?;

        let stint_id = StintId::generate();
        document.insert(
            fields::STINT_ID.to_string(),
            Value::String(stint_id.to_string()),
        );
        self.documents
            .set(Collection::Stints, stint_id.as_str(), document)
            .await?;

        tracing::info!(stint_id = %stint_id, "募集を作成");
        Ok(stint_id)
    }
}
