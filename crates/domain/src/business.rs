//! # ビジネス認証
//!
//! 募集の作成可否はビジネスプロフィールの `verified` フラグで決まる。
//! 判定（[`VerificationGate`]）と書き込み内容の組み立てはここで行い、
//! ドキュメントの取得・更新はユースケース層が担う。
//!
//! 判定と作成の間にロックはない。判定後に認証が取り消されても、
//! その間に作成された募集はそのまま残る。

use serde_json::Value;

use crate::{
    DomainError,
    document::{Document, fields},
};

/// `verified` が真偽値の `true` のときのみ認証済みとみなす
///
/// `"true"` や `1` は認証済みとして扱わない。
pub fn is_verified(business: &Document) -> bool {
    matches!(business.get(fields::VERIFIED), Some(Value::Bool(true)))
}

/// 認証ゲートの判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationGate {
    /// ビジネスプロフィールが存在しない
    NotFound,
    /// 存在するが未認証
    Unverified,
    /// 認証済み。後続の作成操作を許可する
    Permitted,
}

impl VerificationGate {
    /// 取得したビジネスプロフィールから判定する
    pub fn evaluate(business: Option<&Document>) -> Self {
        match business {
            None => Self::NotFound,
            Some(doc) if is_verified(doc) => Self::Permitted,
            Some(_) => Self::Unverified,
        }
    }

    /// 許可されなかった場合は対応するドメインエラーに変換する
    pub fn into_result(self, business_id: &str) -> Result<(), DomainError> {
        match self {
            Self::Permitted => Ok(()),
            Self::NotFound => Err(DomainError::NotFound {
                entity_type: "Business",
                id:          business_id.to_string(),
            }),
            Self::Unverified => Err(DomainError::Forbidden(
                "Business is not verified".to_string(),
            )),
        }
    }
}

/// 管理者による認証で書き込むフィールド
pub fn verification_fields(admin_id: &str, verified_at: String) -> Document {
    let mut document = Document::new();
    document.insert(fields::VERIFIED.to_string(), Value::Bool(true));
    document.insert(fields::VERIFIED_AT.to_string(), Value::String(verified_at));
    document.insert(
        fields::VERIFIED_BY.to_string(),
        Value::String(admin_id.to_string()),
    );
    document
}

/// 認証申請で書き込むフィールド
pub fn verification_request_fields(requested_at: String) -> Document {
    let mut document = Document::new();
    document.insert(fields::VERIFICATION_REQUESTED.to_string(), Value::Bool(true));
    document.insert(
        fields::VERIFICATION_REQUESTED_AT.to_string(),
        Value::String(requested_at),
    );
    document
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn business(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("テストデータはオブジェクト"),
        }
    }

    #[test]
    fn test_プロフィールがなければnot_found() {
        assert_eq!(VerificationGate::evaluate(None), VerificationGate::NotFound);
    }

    #[rstest]
    #[case::フィールドなし(json!({ "uid": "b" }))]
    #[case::false値(json!({ "uid": "b", "verified": false }))]
    #[case::文字列のtrue(json!({ "uid": "b", "verified": "true" }))]
    #[case::数値の1(json!({ "uid": "b", "verified": 1 }))]
    fn test_真偽値のtrue以外はunverified(#[case] value: Value) {
        let doc = business(value);

        assert_eq!(
            VerificationGate::evaluate(Some(&doc)),
            VerificationGate::Unverified
        );
    }

    #[test]
    fn test_verified_trueならpermitted() {
        let doc = business(json!({ "uid": "b", "verified": true }));

        assert_eq!(
            VerificationGate::evaluate(Some(&doc)),
            VerificationGate::Permitted
        );
    }

    #[test]
    fn test_into_resultがゲート結果をドメインエラーに変換する() {
        assert!(VerificationGate::Permitted.into_result("b").is_ok());
        assert!(matches!(
            VerificationGate::NotFound.into_result("b"),
            Err(DomainError::NotFound { id, .. }) if id == "b"
        ));
        assert_eq!(
            VerificationGate::Unverified.into_result("b"),
            Err(DomainError::Forbidden("Business is not verified".to_string()))
        );
    }

    #[test]
    fn test_verification_fieldsは3フィールドを持つ() {
        let fields = verification_fields("admin-1", "2025-04-01T00:00:00.000Z".to_string());

        assert_eq!(
            Value::Object(fields),
            json!({
                "verified": true,
                "verifiedAt": "2025-04-01T00:00:00.000Z",
                "verifiedBy": "admin-1"
            })
        );
    }

    #[test]
    fn test_verification_request_fieldsは申請フラグと日時を持つ() {
        let fields = verification_request_fields("2025-04-01T00:00:00.000Z".to_string());

        assert_eq!(
            Value::Object(fields),
            json!({
                "verificationRequested": true,
                "verificationRequestedAt": "2025-04-01T00:00:00.000Z"
            })
        );
    }
}
