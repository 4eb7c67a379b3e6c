//! # Functions 設定
//!
//! 環境変数から Functions サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} が設定されていません（.env を確認してください）")]
    Missing(&'static str),

    #[error("{name} の値が不正です: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Functions サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionsConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// AWS リージョン
    pub aws_region: String,
    /// DynamoDB エンドポイント（DynamoDB Local 使用時に設定）
    pub dynamodb_endpoint: Option<String>,
    /// ドキュメントテーブル名
    pub dynamodb_table_name: String,
    /// S3 エンドポイント URL（MinIO 使用時に設定、未設定で AWS S3 デフォルト）
    pub s3_endpoint_url: Option<String>,
    /// S3 バケット名
    pub s3_bucket_name: String,
    /// 認証サービスのベース URL
    pub identity_service_url: String,
}

impl FunctionsConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let port_value = required("FUNCTIONS_PORT")?;
        let port = port_value.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name:  "FUNCTIONS_PORT",
            value: port_value.clone(),
        })?;

        Ok(Self {
            host: lookup("FUNCTIONS_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| "ap-northeast-1".to_string()),
            dynamodb_endpoint: lookup("DYNAMODB_ENDPOINT"),
            dynamodb_table_name: lookup("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|| "stintboard_documents".to_string()),
            s3_endpoint_url: lookup("S3_ENDPOINT_URL"),
            s3_bucket_name: required("S3_BUCKET_NAME")?,
            identity_service_url: required("IDENTITY_SERVICE_URL")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("FUNCTIONS_PORT", "13010"),
        ("S3_BUCKET_NAME", "stintboard-dev-files"),
        ("IDENTITY_SERVICE_URL", "http://localhost:19099"),
    ];

    #[test]
    fn test_必須項目のみでデフォルト値が補われる() {
        let config = FunctionsConfig::from_lookup(lookup_from(REQUIRED)).unwrap();

        assert_eq!(
            config,
            FunctionsConfig {
                host: "0.0.0.0".to_string(),
                port: 13010,
                aws_region: "ap-northeast-1".to_string(),
                dynamodb_endpoint: None,
                dynamodb_table_name: "stintboard_documents".to_string(),
                s3_endpoint_url: None,
                s3_bucket_name: "stintboard-dev-files".to_string(),
                identity_service_url: "http://localhost:19099".to_string(),
            }
        );
    }

    #[test]
    fn test_任意項目が設定されていれば使われる() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("DYNAMODB_ENDPOINT", "http://localhost:18000"));
        vars.push(("DYNAMODB_TABLE_NAME", "docs"));

        let config = FunctionsConfig::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(
            config.dynamodb_endpoint.as_deref(),
            Some("http://localhost:18000")
        );
        assert_eq!(config.dynamodb_table_name, "docs");
    }

    #[test]
    fn test_必須項目が欠けるとmissingになる() {
        let vars: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "S3_BUCKET_NAME")
            .collect();

        let result = FunctionsConfig::from_lookup(lookup_from(&vars));

        assert_eq!(result, Err(ConfigError::Missing("S3_BUCKET_NAME")));
    }

    #[test]
    fn test_ポート番号が数値でなければinvalidになる() {
        let mut vars: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "FUNCTIONS_PORT")
            .collect();
        vars.push(("FUNCTIONS_PORT", "http"));

        let result = FunctionsConfig::from_lookup(lookup_from(&vars));

        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                name:  "FUNCTIONS_PORT",
                value: "http".to_string(),
            })
        );
    }
}
