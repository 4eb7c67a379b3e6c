//! アカウントデータ消去ユースケース
//!
//! 検証を通過した後は、個別ステップの失敗にかかわらず成功として扱う。
//! 各ステップの結果は [`ErasureReport`] として呼び出し元に返す。

use serde_json::Value;
use stintboard_domain::{document::fields, validation::RequestValidator};
use stintboard_infra::{AccountEraser, ErasureReport};

use crate::error::FunctionError;

const DELETE_USER_DATA: RequestValidator =
    RequestValidator::new("Invalid request data", &[fields::USER_ID]);

/// アカウントデータ消去ユースケース
pub struct AccountUseCaseImpl {
    eraser: AccountEraser,
}

impl AccountUseCaseImpl {
    pub fn new(eraser: AccountEraser) -> Self {
        Self { eraser }
    }

    /// `userId` に紐づくデータを全ストアから消去する
    pub async fn delete_user_data(&self, payload: Value) -> Result<ErasureReport, FunctionError> {
        let document = DELETE_USER_DATA.validate(payload)?;
        let user_id = DELETE_USER_DATA.string_field(&document, fields::USER_ID)?;

        Ok(self.eraser.erase_all(user_id).await)
    }
}
