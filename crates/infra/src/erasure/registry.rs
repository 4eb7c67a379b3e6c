//! # AccountEraser
//!
//! 全ストアの [`AccountDataEraser`] を集約し、アカウントデータの一括消去を提供する。

use std::sync::Arc;

use stintboard_domain::{
    account::BlobPrefix,
    document::{Collection, fields},
};

use super::{
    AccountDataEraser,
    BlobPrefixEraser,
    DocumentEraser,
    ErasureReport,
    FieldMatchEraser,
    IdentityAccountEraser,
    Outcome,
};
use crate::{BlobStore, DocumentStore, IdentityProvider};

/// アカウントデータ消去レジストリ
///
/// 登録順にステップを逐次実行する。
pub struct AccountEraser {
    erasers: Vec<Box<dyn AccountDataEraser>>,
}

impl Default for AccountEraser {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountEraser {
    /// 空のレジストリを生成する
    pub fn new() -> Self {
        Self {
            erasers: Vec::new(),
        }
    }

    /// Eraser を登録する
    pub fn register(&mut self, eraser: Box<dyn AccountDataEraser>) {
        self.erasers.push(eraser);
    }

    /// 全ストアの Eraser を登録済みのレジストリを生成する
    pub fn with_all_erasers(
        documents: Arc<dyn DocumentStore>,
        blobs: Arc<dyn BlobStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let mut eraser = Self::new();
        eraser.register(Box::new(DocumentEraser::new(
            documents.clone(),
            Collection::Users,
        )));
        eraser.register(Box::new(DocumentEraser::new(
            documents.clone(),
            Collection::Businesses,
        )));
        eraser.register(Box::new(FieldMatchEraser::new(
            documents.clone(),
            Collection::Applications,
            fields::USER_ID,
        )));
        eraser.register(Box::new(FieldMatchEraser::new(
            documents,
            Collection::Stints,
            fields::BUSINESS_ID,
        )));
        for prefix in BlobPrefix::ALL {
            eraser.register(Box::new(BlobPrefixEraser::new(blobs.clone(), prefix)));
        }
        // 認証アカウントは最後に消す
        eraser.register(Box::new(IdentityAccountEraser::new(identity)));
        eraser
    }

    /// 期待されるステップ名の一覧を返す（登録漏れ検出テスト用）
    pub fn expected_eraser_names() -> Vec<&'static str> {
        vec![
            "documents:users",
            "documents:businesses",
            "documents:applications",
            "documents:stints",
            "blobs:cvs/",
            "blobs:uploads/",
            "identity:account",
        ]
    }

    /// 登録済みステップの名前一覧を返す
    pub fn registered_names(&self) -> Vec<&'static str> {
        self.erasers.iter().map(|e| e.name()).collect()
    }

    /// 全ステップでアカウントデータを消去する
    ///
    /// 個別のステップがエラーを返しても、残りのステップは実行を継続する。
    /// 結果は実行順に [`ErasureReport`] で返す。
    #[tracing::instrument(skip_all, fields(account_id = %account_id))]
    pub async fn erase_all(&self, account_id: &str) -> ErasureReport {
        let mut report = ErasureReport::default();

        for eraser in &self.erasers {
            let outcome = match eraser.erase(account_id).await {
                Ok(result) => {
                    tracing::info!(
                        eraser = eraser.name(),
                        deleted = result.deleted_count,
                        "アカウントデータを消去"
                    );
                    Outcome::Succeeded {
                        deleted: result.deleted_count,
                    }
                }
                Err(error) => {
                    tracing::error!(
                        eraser = eraser.name(),
                        error = %error,
                        "アカウントデータの消去に失敗"
                    );
                    Outcome::Failed { error }
                }
            };
            report.steps.push((eraser.name(), outcome));
        }

        if report.has_failures() {
            tracing::warn!(
                blobs_deleted = report.blobs_deleted(),
                failed_steps = ?report.failed_steps(),
                "アカウントデータ消去が一部失敗したまま完了"
            );
        } else {
            tracing::info!(
                blobs_deleted = report.blobs_deleted(),
                "アカウントデータ消去が完了"
            );
        }

        report
    }
}
