//! # IdentityAccountEraser
//!
//! 認証サービス上のアカウントを削除する。

use std::sync::Arc;

use async_trait::async_trait;

use super::{AccountDataEraser, ErasureResult};
use crate::{IdentityProvider, error::InfraError};

/// 認証アカウント Eraser
pub struct IdentityAccountEraser {
    provider: Arc<dyn IdentityProvider>,
}

impl IdentityAccountEraser {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AccountDataEraser for IdentityAccountEraser {
    fn name(&self) -> &'static str {
        "identity:account"
    }

    async fn erase(&self, account_id: &str) -> Result<ErasureResult, InfraError> {
        self.provider.delete_account(account_id).await?;
        Ok(ErasureResult { deleted_count: 1 })
    }
}
