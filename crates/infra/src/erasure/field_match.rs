//! # FieldMatchEraser
//!
//! フィールドがアカウント ID と等しいドキュメントを検索し、1 件ずつ消去する
//! （`applications.userId`, `stints.businessId`）。
//!
//! 途中の削除に失敗した場合はそこでステップを打ち切り、エラーを返す。
//! それまでに消した件数はログに残す。

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use stintboard_domain::document::Collection;

use super::{AccountDataEraser, ErasureResult, document_step_name};
use crate::{DocumentStore, error::InfraError};

/// フィールド一致のドキュメント Eraser
pub struct FieldMatchEraser {
    store:      Arc<dyn DocumentStore>,
    collection: Collection,
    field:      &'static str,
}

impl FieldMatchEraser {
    pub fn new(store: Arc<dyn DocumentStore>, collection: Collection, field: &'static str) -> Self {
        Self {
            store,
            collection,
            field,
        }
    }
}

#[async_trait]
impl AccountDataEraser for FieldMatchEraser {
    fn name(&self) -> &'static str {
        document_step_name(self.collection)
    }

    async fn erase(&self, account_id: &str) -> Result<ErasureResult, InfraError> {
        let ids = self
            .store
            .find_ids_by_field(
                self.collection,
                self.field,
                &Value::String(account_id.to_string()),
            )
            .await?;

        let mut deleted_count: u64 = 0;
        for id in &ids {
            if let Err(error) = self.store.delete(self.collection, id).await {
                tracing::warn!(
                    collection = %self.collection,
                    document_id = %id,
                    deleted_count,
                    matched = ids.len(),
                    "一致したドキュメントの削除が途中で失敗"
                );
                return Err(error);
            }
            deleted_count += 1;
        }

        Ok(ErasureResult { deleted_count })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::mock::{InMemoryDocumentStore, StoreOperation};

    fn seeded_store() -> InMemoryDocumentStore {
        let store = InMemoryDocumentStore::new();
        store.insert(
            Collection::Applications,
            "app-1",
            json!({ "userId": "user-1", "stintId": "stint-1" }),
        );
        store.insert(
            Collection::Applications,
            "app-2",
            json!({ "userId": "user-1", "stintId": "stint-2" }),
        );
        store.insert(
            Collection::Applications,
            "app-3",
            json!({ "userId": "user-2", "stintId": "stint-1" }),
        );
        store
    }

    #[tokio::test]
    async fn test_一致するドキュメントだけを消去する() {
        let store = seeded_store();
        let sut = FieldMatchEraser::new(Arc::new(store.clone()), Collection::Applications, "userId");

        let result = sut.erase("user-1").await.unwrap();

        assert_eq!(result.deleted_count, 2);
        assert_eq!(store.ids(Collection::Applications), vec!["app-3"]);
    }

    #[tokio::test]
    async fn test_一致なしは0件で成功する() {
        let store = seeded_store();
        let sut = FieldMatchEraser::new(Arc::new(store.clone()), Collection::Applications, "userId");

        let result = sut.erase("user-9").await.unwrap();

        assert_eq!(result.deleted_count, 0);
        assert_eq!(store.ids(Collection::Applications).len(), 3);
    }

    #[tokio::test]
    async fn test_検索失敗はエラーを返す() {
        let store = seeded_store();
        store.fail_on(StoreOperation::Find, Collection::Applications);
        let sut = FieldMatchEraser::new(Arc::new(store.clone()), Collection::Applications, "userId");

        assert!(sut.erase("user-1").await.is_err());
        assert_eq!(store.ids(Collection::Applications).len(), 3);
    }

    #[tokio::test]
    async fn test_削除失敗でステップが打ち切られる() {
        let store = seeded_store();
        store.fail_on(StoreOperation::Delete, Collection::Applications);
        let sut = FieldMatchEraser::new(Arc::new(store.clone()), Collection::Applications, "userId");

        assert!(sut.erase("user-1").await.is_err());
        assert_eq!(store.ids(Collection::Applications).len(), 3);
    }

    #[test]
    fn test_nameがコレクションのステップ名を返す() {
        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());

        assert_eq!(
            FieldMatchEraser::new(store, Collection::Stints, "businessId").name(),
            "documents:stints"
        );
    }
}
