//! # アカウントデータ消去基盤
//!
//! アカウント削除時に、ドキュメントストア・ファイルストア・認証サービスに
//! 散らばったデータをベストエフォートで消去する。
//!
//! ## 概要
//!
//! 各ストアに対応する [`AccountDataEraser`] 実装を [`AccountEraser`] に登録し、
//! 登録順に逐次実行する。あるステップが失敗しても後続のステップは必ず実行され、
//! 各ステップの結果は [`ErasureReport`] に [`Outcome`] として集約される。
//!
//! ストアをまたぐトランザクション、リトライ、ロールバックは行わない。

mod blob;
mod document;
mod field_match;
mod identity;
mod registry;

use async_trait::async_trait;
pub use blob::BlobPrefixEraser;
pub use document::DocumentEraser;
pub use field_match::FieldMatchEraser;
pub use identity::IdentityAccountEraser;
pub use registry::AccountEraser;
use stintboard_domain::document::Collection;

use crate::error::InfraError;

/// ファイルストアのステップ名の接頭辞
pub const BLOB_STEP_PREFIX: &str = "blobs:";

/// 1 ステップの消去結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErasureResult {
    /// 消去された件数
    pub deleted_count: u64,
}

/// 1 ステップの実行結果
#[derive(Debug)]
pub enum Outcome {
    Succeeded { deleted: u64 },
    Failed { error: InfraError },
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// 消去件数。失敗したステップは 0 とみなす
    pub fn deleted(&self) -> u64 {
        match self {
            Self::Succeeded { deleted } => *deleted,
            Self::Failed { .. } => 0,
        }
    }
}

/// アカウントデータ一括消去の結果レポート
///
/// ステップ名と結果を実行順に保持する。
#[derive(Debug, Default)]
pub struct ErasureReport {
    pub steps: Vec<(&'static str, Outcome)>,
}

impl ErasureReport {
    /// いずれかのステップが失敗したかどうか
    pub fn has_failures(&self) -> bool {
        self.steps.iter().any(|(_, outcome)| outcome.is_failed())
    }

    /// 失敗したステップ名（実行順）
    pub fn failed_steps(&self) -> Vec<&'static str> {
        self.steps
            .iter()
            .filter(|(_, outcome)| outcome.is_failed())
            .map(|(name, _)| *name)
            .collect()
    }

    /// 指定ステップの結果
    pub fn outcome(&self, step: &str) -> Option<&Outcome> {
        self.steps
            .iter()
            .find(|(name, _)| *name == step)
            .map(|(_, outcome)| outcome)
    }

    /// 成功したステップの消去件数（実行順）
    pub fn deleted_counts(&self) -> Vec<(&'static str, u64)> {
        self.steps
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                Outcome::Succeeded { deleted } => Some((*name, *deleted)),
                Outcome::Failed { .. } => None,
            })
            .collect()
    }

    /// ファイルストアの全プレフィックスを合計した消去件数
    pub fn blobs_deleted(&self) -> u64 {
        self.steps
            .iter()
            .filter(|(name, _)| name.starts_with(BLOB_STEP_PREFIX))
            .map(|(_, outcome)| outcome.deleted())
            .sum()
    }
}

/// アカウントデータ消去トレイト
///
/// 各ストアがこのトレイトを実装し、1 アカウント分のデータ消去を提供する。
#[async_trait]
pub trait AccountDataEraser: Send + Sync {
    /// このステップの名前（例: `"documents:users"`）
    fn name(&self) -> &'static str;

    /// 指定アカウントのデータを消去する
    async fn erase(&self, account_id: &str) -> Result<ErasureResult, InfraError>;
}

/// ドキュメントストアのステップ名
fn document_step_name(collection: Collection) -> &'static str {
    match collection {
        Collection::Users => "documents:users",
        Collection::Businesses => "documents:businesses",
        Collection::Stints => "documents:stints",
        Collection::Applications => "documents:applications",
        // 管理者レジストリは消去対象に登録しない。網羅性のためだけの分岐
        Collection::Admins => "documents:admins",
    }
}
