/// 登録成功時のレスポンスドキュメント
use serde::{Deserialize, Serialize};

use super::UserRecord;

/// 登録成功時のメッセージ
pub const REGISTERED_MESSAGE: &str = "User registered";

/// `{"message": "User registered", "user": <record>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub message: String,
    pub user: UserRecord,
}

impl RegistrationResponse {
    /// 登録済みレコードからレスポンスを作成
    pub fn registered(user: UserRecord) -> Self {
        Self {
            message: REGISTERED_MESSAGE.to_string(),
            user,
        }
    }

    /// JSON文字列にシリアライズ
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
