//! # DynamoDB 接続管理
//!
//! ## 設計方針
//!
//! - **ローカル開発**: DynamoDB Local を使用（`DYNAMODB_ENDPOINT` で接続先を指定）
//! - **本番環境**: IAM ロールによる認証で Amazon DynamoDB に接続
//! - **テーブル自動作成**: 起動時にドキュメントテーブルが存在しなければ作成（冪等）
//!
//! ## テーブルスキーマ
//!
//! すべてのコレクションを 1 テーブルに格納する:
//! - PK: `collection` (String): コレクション名（`users`, `stints` など）
//! - SK: `id` (String): ドキュメント ID
//! - `body` (Map): ドキュメント本体

use aws_sdk_dynamodb::{
    Client,
    types::{AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType},
};

use crate::InfraError;

/// パーティションキー属性名
pub const COLLECTION_ATTR: &str = "collection";
/// ソートキー属性名
pub const ID_ATTR: &str = "id";
/// ドキュメント本体の属性名
pub const BODY_ATTR: &str = "body";

/// DynamoDB クライアントを作成する
///
/// `endpoint` が `Some` の場合は DynamoDB Local に接続し、ダミーの認証情報を使う
/// （DynamoDB Local は認証情報を検証しないが、SDK はプロバイダを必要とする）。
/// `None` の場合は SDK のデフォルト認証チェーンで解決する。
pub async fn create_client(endpoint: Option<&str>, region: &str) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    if let Some(endpoint_url) = endpoint {
        loader = loader
            .endpoint_url(endpoint_url)
            .credentials_provider(aws_sdk_dynamodb::config::Credentials::new(
                "local", "local", None, None, "local",
            ));
    }

    Client::new(&loader.load().await)
}

/// ドキュメントテーブルが存在しなければ作成する（冪等）
pub async fn ensure_document_table(client: &Client, table_name: &str) -> Result<(), InfraError> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(_) => {
            tracing::debug!("テーブル '{}' は既に存在します", table_name);
            return Ok(());
        }
        Err(err) => {
            // ResourceNotFoundException の場合のみテーブル作成に進む
            let not_found = err
                .as_service_error()
                .map(|e| e.is_resource_not_found_exception())
                .unwrap_or(false);
            if !not_found {
                return Err(InfraError::dynamo_db(format!(
                    "テーブル '{table_name}' の確認に失敗: {err}"
                )));
            }
        }
    }

    tracing::info!("テーブル '{}' を作成します", table_name);

    let result = client
        .create_table()
        .table_name(table_name)
        .key_schema(key_schema(COLLECTION_ATTR, KeyType::Hash)?)
        .key_schema(key_schema(ID_ATTR, KeyType::Range)?)
        .attribute_definitions(string_attribute(COLLECTION_ATTR)?)
        .attribute_definitions(string_attribute(ID_ATTR)?)
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await;

    if let Err(err) = result {
        // ResourceInUseException は並行起動時に発生しうる（テーブル作成中）
        let in_use = err
            .as_service_error()
            .map(|e| e.is_resource_in_use_exception())
            .unwrap_or(false);
        if !in_use {
            return Err(InfraError::dynamo_db(format!(
                "テーブル '{table_name}' の作成に失敗: {err}"
            )));
        }
        tracing::debug!(
            "テーブル '{}' は既に作成中または存在します（ResourceInUseException）",
            table_name
        );
        return Ok(());
    }

    tracing::info!("テーブル '{}' を作成しました", table_name);
    Ok(())
}

fn key_schema(name: &str, key_type: KeyType) -> Result<KeySchemaElement, InfraError> {
    KeySchemaElement::builder()
        .attribute_name(name)
        .key_type(key_type)
        .build()
        .map_err(|e| InfraError::dynamo_db(format!("KeySchema 構築エラー: {e}")))
}

fn string_attribute(name: &str) -> Result<AttributeDefinition, InfraError> {
    AttributeDefinition::builder()
        .attribute_name(name)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| InfraError::dynamo_db(format!("AttributeDefinition 構築エラー: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_キースキーマが構築できる() {
        let hash = key_schema(COLLECTION_ATTR, KeyType::Hash).unwrap();
        let range = key_schema(ID_ATTR, KeyType::Range).unwrap();

        assert_eq!(hash.attribute_name(), "collection");
        assert_eq!(hash.key_type(), &KeyType::Hash);
        assert_eq!(range.attribute_name(), "id");
    }

    #[test]
    fn test_属性定義は文字列型になる() {
        let attr = string_attribute(ID_ATTR).unwrap();

        assert_eq!(attr.attribute_type(), &ScalarAttributeType::S);
    }
}
