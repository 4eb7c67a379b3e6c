//! # DocumentEraser
//!
//! アカウント ID をキーとするドキュメント（`users/{id}`, `businesses/{id}`）を消去する。
//!
//! 件数の報告のために事前に存在を確認するが、この確認は削除の前提条件ではない。
//! 確認に失敗しても削除は必ず試みる。

use std::sync::Arc;

use async_trait::async_trait;
use stintboard_domain::document::Collection;

use super::{AccountDataEraser, ErasureResult, document_step_name};
use crate::{DocumentStore, error::InfraError};

/// キー指定のドキュメント Eraser
pub struct DocumentEraser {
    store:      Arc<dyn DocumentStore>,
    collection: Collection,
}

impl DocumentEraser {
    pub fn new(store: Arc<dyn DocumentStore>, collection: Collection) -> Self {
        Self { store, collection }
    }
}

#[async_trait]
impl AccountDataEraser for DocumentEraser {
    fn name(&self) -> &'static str {
        document_step_name(self.collection)
    }

    async fn erase(&self, account_id: &str) -> Result<ErasureResult, InfraError> {
        let existed = match self.store.get(self.collection, account_id).await {
            Ok(None) => return Ok(ErasureResult { deleted_count: 0 }),
            Ok(Some(_)) => true,
            Err(error) => {
                tracing::warn!(
                    collection = %self.collection,
                    error = %error,
                    "存在確認に失敗したため削除のみ実行"
                );
                false
            }
        };

        self.store.delete(self.collection, account_id).await?;

        // 存在を確認できなかった場合は件数に含めない
        Ok(ErasureResult {
            deleted_count: u64::from(existed),
        })
    }
}
