//! # ドキュメントストア
//!
//! コレクション + ドキュメント ID で位置付けられるスキーマレスな JSON
//! ドキュメントの読み書きを提供する。
//!
//! ## 設計方針
//!
//! - **スキーマレス**: ドキュメントは [`Document`]（JSON オブジェクト）として扱う
//! - **単一テーブル**: 全コレクションを 1 テーブルに格納する（[`crate::dynamodb`] 参照）
//! - **トランザクションなし**: 各操作は独立している。check-then-act の競合は呼び出し側で許容する

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use serde_json::{Number, Value};
use stintboard_domain::document::{Collection, Document};

use crate::{
    InfraError,
    dynamodb::{BODY_ATTR, COLLECTION_ATTR, ID_ATTR},
};

/// ドキュメントストアのインターフェース
///
/// テスト時は [`crate::mock::InMemoryDocumentStore`] に差し替える。
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// ドキュメントを取得する。存在しなければ `None`
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, InfraError>;

    /// ドキュメントを丸ごと書き込む（存在すれば置き換え）
    async fn set(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), InfraError>;

    /// 既存ドキュメントにフィールドをマージする
    ///
    /// ドキュメントが存在しない場合は `InfraErrorKind::DocumentNotFound` を返す。
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<(), InfraError>;

    /// ドキュメントを削除する。存在しなくてもエラーにしない
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), InfraError>;

    /// 指定フィールドが値と等しいドキュメントの ID を返す
    async fn find_ids_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<String>, InfraError>;

    /// ストアへの疎通を確認する（Readiness Check 用）
    async fn ping(&self) -> Result<(), InfraError>;
}

/// DynamoDB 実装
#[derive(Clone)]
pub struct DynamoDbDocumentStore {
    client:     Client,
    table_name: String,
}

impl DynamoDbDocumentStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    fn key(collection: Collection, id: &str) -> HashMap<String, AttributeValue> {
        HashMap::from([
            (
                COLLECTION_ATTR.to_string(),
                AttributeValue::S(collection.to_string()),
            ),
            (ID_ATTR.to_string(), AttributeValue::S(id.to_string())),
        ])
    }
}

#[async_trait]
impl DocumentStore for DynamoDbDocumentStore {
    #[tracing::instrument(skip_all, level = "debug", fields(%collection, %id))]
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, InfraError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(collection, id)))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("GetItem 失敗: {e}")))?;

        output.item().map(body_from_item).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%collection, %id))]
    async fn set(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), InfraError> {
        let mut item = Self::key(collection, id);
        item.insert(BODY_ATTR.to_string(), document_to_attribute(document));

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("PutItem 失敗: {e}")))?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%collection, %id))]
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<(), InfraError> {
        if fields.is_empty() {
            return match self.get(collection, id).await? {
                Some(_) => Ok(()),
                None => Err(InfraError::document_not_found(collection.to_string(), id)),
            };
        }

        let mut names = HashMap::from([("#body".to_string(), BODY_ATTR.to_string())]);
        let mut values = HashMap::new();
        let mut assignments = Vec::with_capacity(fields.len());

        for (index, (field, value)) in fields.into_iter().enumerate() {
            names.insert(format!("#f{index}"), field);
            values.insert(format!(":v{index}"), json_to_attribute(value));
            assignments.push(format!("#body.#f{index} = :v{index}"));
        }

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(collection, id)))
            .update_expression(format!("SET {}", assignments.join(", ")))
            .condition_expression(format!("attribute_exists({ID_ATTR})"))
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_conditional_check_failed_exception()) =>
            {
                Err(InfraError::document_not_found(collection.to_string(), id))
            }
            Err(err) => Err(InfraError::dynamo_db(format!("UpdateItem 失敗: {err}"))),
        }
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%collection, %id))]
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), InfraError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(collection, id)))
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("DeleteItem 失敗: {e}")))?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%collection, %field))]
    async fn find_ids_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<String>, InfraError> {
        let mut ids = Vec::new();
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#c = :c")
                .filter_expression("#body.#field = :value")
                .expression_attribute_names("#c", COLLECTION_ATTR)
                .expression_attribute_names("#body", BODY_ATTR)
                .expression_attribute_names("#field", field)
                .expression_attribute_values(":c", AttributeValue::S(collection.to_string()))
                .expression_attribute_values(":value", json_to_attribute(value.clone()))
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(|e| InfraError::dynamo_db(format!("Query 失敗: {e}")))?;

            for item in output.items() {
                match item.get(ID_ATTR) {
                    Some(AttributeValue::S(id)) => ids.push(id.clone()),
                    _ => {
                        return Err(InfraError::invalid_document(format!(
                            "{collection} の項目に文字列の id がありません"
                        )));
                    }
                }
            }

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }

        Ok(ids)
    }

    async fn ping(&self) -> Result<(), InfraError> {
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("DescribeTable 失敗: {e}")))?;

        Ok(())
    }
}

// ===== JSON <-> AttributeValue 変換 =====

fn body_from_item(item: &HashMap<String, AttributeValue>) -> Result<Document, InfraError> {
    match item.get(BODY_ATTR) {
        Some(AttributeValue::M(map)) => map
            .iter()
            .map(|(k, v)| attribute_to_json(v).map(|json| (k.clone(), json)))
            .collect(),
        Some(_) => Err(InfraError::invalid_document("body が Map ではありません")),
        None => Ok(Document::new()),
    }
}

fn document_to_attribute(document: Document) -> AttributeValue {
    AttributeValue::M(
        document
            .into_iter()
            .map(|(k, v)| (k, json_to_attribute(v)))
            .collect(),
    )
}

/// JSON 値を DynamoDB の属性値に変換する
///
/// 数値は JSON の表記のまま N 型に格納する（精度を落とさない）。
pub(crate) fn json_to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(items) => {
            AttributeValue::L(items.into_iter().map(json_to_attribute).collect())
        }
        Value::Object(map) => document_to_attribute(map),
    }
}

/// DynamoDB の属性値を JSON 値に変換する
///
/// このストアが書き込まない型（SS, NS, B など）は変換エラーとする。
pub(crate) fn attribute_to_json(attribute: &AttributeValue) -> Result<Value, InfraError> {
    match attribute {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => serde_json::from_str::<Number>(n)
            .map(Value::Number)
            .map_err(|e| InfraError::invalid_document(format!("数値 '{n}' を解釈できません: {e}"))),
        AttributeValue::L(items) => items
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| attribute_to_json(v).map(|json| (k.clone(), json)))
            .collect::<Result<Document, InfraError>>()
            .map(Value::Object),
        other => Err(InfraError::invalid_document(format!(
            "未対応の属性型です: {other:?}"
        ))),
    }
}
