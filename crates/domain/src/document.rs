//! # ドキュメントとコレクション
//!
//! ストア上のエンティティはすべてスキーマを持たない JSON オブジェクトとして扱う。
//! フィールド名は呼び出し元が送ってきたもの（camelCase）をそのまま保存する。

use serde_json::{Map, Value};
use strum::{Display, EnumIter};

/// スキーマレスなドキュメント
pub type Document = Map<String, Value>;

/// ドキュメントストアのコレクション
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    /// ユーザープロフィール（キー: `uid`）
    Users,
    /// ビジネスプロフィール（キー: `uid`）
    Businesses,
    /// 募集（キー: `stintId`）
    Stints,
    /// 応募（キー: `applicationId`）
    Applications,
    /// 管理者レジストリ（存在のみが意味を持つ）
    Admins,
}

/// ドキュメントのフィールド名
pub mod fields {
    pub const UID: &str = "uid";
    pub const USER_ID: &str = "userId";
    pub const BUSINESS_ID: &str = "businessId";
    pub const ADMIN_ID: &str = "adminId";
    pub const STINT_ID: &str = "stintId";
    pub const APPLICATION_ID: &str = "applicationId";
    pub const VERIFIED: &str = "verified";
    pub const VERIFIED_AT: &str = "verifiedAt";
    pub const VERIFIED_BY: &str = "verifiedBy";
    pub const VERIFICATION_REQUESTED: &str = "verificationRequested";
    pub const VERIFICATION_REQUESTED_AT: &str = "verificationRequestedAt";
}
