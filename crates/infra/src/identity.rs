//! # 認証サービスクライアント
//!
//! マネージド認証サービス上のアカウントを削除する。
//!
//! ## エンドポイント
//!
//! - `DELETE /internal/accounts/{uid}` - アカウント削除

use async_trait::async_trait;
use reqwest::Url;

use crate::InfraError;

/// 認証サービスのインターフェース
///
/// テスト時は [`crate::mock::InMemoryIdentityProvider`] に差し替える。
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// アカウントを削除する
    async fn delete_account(&self, uid: &str) -> Result<(), InfraError>;
}

/// HTTP 実装
pub struct HttpIdentityProvider {
    base_url: Url,
    client:   reqwest::Client,
}

impl HttpIdentityProvider {
    /// 新しい HttpIdentityProvider を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: 認証サービスのベース URL（例: `http://localhost:19099`）
    pub fn new(base_url: &str) -> Result<Self, InfraError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| InfraError::identity(format!("ベース URL が不正です ({base_url}): {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(InfraError::identity(format!(
                "ベース URL にパスを付与できません: {base_url}"
            )));
        }

        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
        })
    }

    /// アカウント削除の URL を組み立てる（uid はパスセグメントとしてエンコードされる）
    fn account_url(&self, uid: &str) -> Result<Url, InfraError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| InfraError::identity("ベース URL にパスを付与できません"))?
            .pop_if_empty()
            .extend(["internal", "accounts", uid]);
        Ok(url)
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    #[tracing::instrument(skip_all, level = "debug", fields(%uid))]
    async fn delete_account(&self, uid: &str) -> Result<(), InfraError> {
        let url = self.account_url(uid)?;

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| InfraError::identity(format!("リクエスト送信失敗: {e}")))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(InfraError::identity(format!(
                    "予期しないステータス {status}: {body}"
                )))
            }
        }
    }
}
