//! # BlobPrefixEraser
//!
//! プレフィックス配下のファイルを列挙し、名前にアカウント ID を含むものを消去する。
//!
//! ## 所有判定
//!
//! 所有者は [`blob_belongs_to`] による部分一致で推定する。別アカウントの
//! ファイル名に ID が偶然含まれていれば、それも消える。

use std::sync::Arc;

use async_trait::async_trait;
use stintboard_domain::account::{BlobPrefix, blob_belongs_to};

use super::{AccountDataEraser, ErasureResult};
use crate::{BlobStore, error::InfraError};

/// プレフィックス単位のファイル Eraser
pub struct BlobPrefixEraser {
    store:  Arc<dyn BlobStore>,
    prefix: BlobPrefix,
}

impl BlobPrefixEraser {
    pub fn new(store: Arc<dyn BlobStore>, prefix: BlobPrefix) -> Self {
        Self { store, prefix }
    }
}

#[async_trait]
impl AccountDataEraser for BlobPrefixEraser {
    fn name(&self) -> &'static str {
        match self.prefix {
            BlobPrefix::Cvs => "blobs:cvs/",
            BlobPrefix::Uploads => "blobs:uploads/",
        }
    }

    async fn erase(&self, account_id: &str) -> Result<ErasureResult, InfraError> {
        let names = self.store.list_names(self.prefix.as_str()).await?;

        let mut deleted_count: u64 = 0;
        for name in names.iter().filter(|name| blob_belongs_to(name, account_id)) {
            if let Err(error) = self.store.delete(name).await {
                tracing::warn!(
                    prefix = self.prefix.as_str(),
                    blob = %name,
                    deleted_count,
                    "ファイルの削除が途中で失敗"
                );
                return Err(error);
            }
            deleted_count += 1;
        }

        Ok(ErasureResult { deleted_count })
    }
}
