//! 応募ユースケース
//!
//! `userId` / `stintId` の参照先が存在するかは確認しない。

use std::sync::Arc;

use serde_json::Value;
use stintboard_domain::{
    document::{Collection, fields},
    ids::ApplicationId,
    validation::RequestValidator,
};
use stintboard_infra::DocumentStore;

use crate::error::FunctionError;

const APPLICATION: RequestValidator = RequestValidator::new(
    "Invalid application data",
    &[fields::USER_ID, fields::STINT_ID],
);

/// 応募ユースケース
pub struct ApplicationUseCaseImpl {
    documents: Arc<dyn DocumentStore>,
}

impl ApplicationUseCaseImpl {
    pub fn new(documents: Arc<dyn DocumentStore>) -> Self {
        Self { documents }
    }

    /// 応募を保存し、採番した ID を返す
    pub async fn submit_application(&self, payload: Value) -> Result<ApplicationId, FunctionError> {
        let mut document = APPLICATION.validate(payload)?;

        let application_id = ApplicationId::generate();
        document.insert(
            fields::APPLICATION_ID.to_string(),
            Value::String(application_id.to_string()),
        );
        self.documents
            .set(Collection::Applications, application_id.as_str(), document)
            .await?;

        Ok(application_id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use stintboard_infra::mock::{InMemoryDocumentStore, StoreOperation};

    use super::*;

    #[tokio::test]
    async fn test_応募が採番されて保存される() {
        let store = InMemoryDocumentStore::new();
        let sut = ApplicationUseCaseImpl::new(Arc::new(store.clone()));

        let id = sut
            .submit_application(json!({ "userId": "user-1", "stintId": "missing-stint" }))
            .await
            .unwrap();

        let stored = store.document(Collection::Applications, id.as_str()).unwrap();
        assert_eq!(stored.get("applicationId"), Some(&json!(id.as_str())));
        assert_eq!(stored.get("stintId"), Some(&json!("missing-stint")));
    }

    #[tokio::test]
    async fn test_stint_idがなければ書き込まない() {
        let store = InMemoryDocumentStore::new();
        let sut = ApplicationUseCaseImpl::new(Arc::new(store.clone()));

        let result = sut.submit_application(json!({ "userId": "user-1" })).await;

        assert!(
            matches!(result, Err(FunctionError::BadRequest(msg)) if msg == "Invalid application data")
        );
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_ストア失敗はstoreエラーになる() {
        let store = InMemoryDocumentStore::new();
        store.fail_on(StoreOperation::Set, Collection::Applications);
        let sut = ApplicationUseCaseImpl::new(Arc::new(store));

        let result = sut
            .submit_application(json!({ "userId": "user-1", "stintId": "s-1" }))
            .await;

        assert!(matches!(result, Err(FunctionError::Store(_))));
    }
}
