//! # サーバー採番 ID
//!
//! 作成時にサーバーが採番し、ドキュメントキーとペイロード内フィールドの
//! 両方に書き込まれる識別子。

define_document_id! {
    /// 募集（stint）の ID。`stints` コレクションのキー。
    pub struct StintId;
}

define_document_id! {
    /// 応募の ID。`applications` コレクションのキー。
    pub struct ApplicationId;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generateは毎回異なるidを返す() {
        let ids: HashSet<StintId> = (0..100).map(|_| StintId::generate()).collect();

        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_serializeは素の文字列になる() {
        let id = ApplicationId::generate();

        assert_eq!(
            serde_json::to_value(&id).unwrap(),
            serde_json::Value::String(id.as_str().to_string())
        );
    }
}
