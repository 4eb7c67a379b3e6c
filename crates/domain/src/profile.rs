//! # プロフィール
//!
//! ユーザー / ビジネスのプロフィールは呼び出し元が送ったフィールドを
//! そのまま保存する。キーは `uid`。
//!
//! ## 保護フィールド
//!
//! ビジネスの認証状態（`verified`, `verifiedAt`, `verifiedBy`）は管理者の
//! 認証操作でのみ設定される。プロフィール書き込み経由で自己認証できないよう、
//! 書き込み前にペイロードから取り除く。

use crate::document::{Collection, Document, fields};

/// ビジネスプロフィール書き込みで取り除くフィールド
pub const PROTECTED_BUSINESS_FIELDS: &[&str] =
    &[fields::VERIFIED, fields::VERIFIED_AT, fields::VERIFIED_BY];

/// プロフィールの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    User,
    Business,
}

impl ProfileKind {
    /// 保存先コレクション
    pub fn collection(self) -> Collection {
        match self {
            Self::User => Collection::Users,
            Self::Business => Collection::Businesses,
        }
    }

    /// 保護フィールドを取り除いたドキュメントを返す
    ///
    /// ユーザープロフィールには保護フィールドがないため、そのまま返す。
    pub fn strip_protected(self, mut document: Document) -> Document {
        if self == Self::Business {
            for field in PROTECTED_BUSINESS_FIELDS {
                document.remove(*field);
            }
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("テストデータはオブジェクト"),
        }
    }

    #[test]
    fn test_ビジネスのverifiedは取り除かれる() {
        let payload = document(json!({
            "uid": "biz-1",
            "name": "Cafe",
            "verified": true,
            "verifiedAt": "2025-01-01T00:00:00Z",
            "verifiedBy": "self"
        }));

        let stripped = ProfileKind::Business.strip_protected(payload);

        assert_eq!(stripped, document(json!({ "uid": "biz-1", "name": "Cafe" })));
    }

    #[test]
    fn test_ユーザーのペイロードは変更されない() {
        let payload = document(json!({ "uid": "u-1", "verified": true }));

        let result = ProfileKind::User.strip_protected(payload.clone());

        assert_eq!(result, payload);
    }

    #[test]
    fn test_verificationrequestedは保護対象ではない() {
        let payload = document(json!({ "uid": "biz-1", "verificationRequested": true }));

        let stripped = ProfileKind::Business.strip_protected(payload.clone());

        assert_eq!(stripped, payload);
    }

    #[test]
    fn test_種類ごとの保存先コレクション() {
        assert_eq!(ProfileKind::User.collection(), Collection::Users);
        assert_eq!(ProfileKind::Business.collection(), Collection::Businesses);
    }
}
