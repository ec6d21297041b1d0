/// 登録リクエストボディのパーサー
///
/// ボディは`{"name": <string>, "email": <string>}`形式のJSON文字列で、
/// すべてのフィールドは省略可能。未知のキーは無視する。
use serde_json::{Map, Value};
use thiserror::Error;

/// リクエストボディのパースエラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RequestParseError {
    /// JSONパースに失敗
    #[error("failed to parse JSON: {0}")]
    InvalidJson(String),

    /// ボディがJSONオブジェクトでない
    #[error("request body must be a JSON object")]
    NotObject,

    /// フィールドが文字列でもnullでもない
    #[error("field `{0}` must be a string or null")]
    InvalidField(String),
}

/// パース済みの登録リクエスト
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationRequest {
    /// ユーザー名（未指定またはnullの場合はNone）
    pub name: Option<String>,
    /// メールアドレス（未指定またはnullの場合はNone）
    pub email: Option<String>,
}

impl RegistrationRequest {
    /// リクエストボディをパース
    ///
    /// # 引数
    /// * `body` - ボディ文字列。`None`の場合は`{}`として扱う
    ///
    /// # 戻り値
    /// * `Ok(RegistrationRequest)` - パース成功時
    /// * `Err(RequestParseError)` - パース失敗時
    pub fn parse(body: Option<&str>) -> Result<Self, RequestParseError> {
        let Some(body) = body else {
            return Ok(Self::default());
        };

        let value: Value = serde_json::from_str(body)
            .map_err(|e| RequestParseError::InvalidJson(e.to_string()))?;

        let object = value.as_object().ok_or(RequestParseError::NotObject)?;

        Ok(Self {
            name: Self::optional_string(object, "name")?,
            email: Self::optional_string(object, "email")?,
        })
    }

    /// 文字列フィールドを取得（欠落とnullはどちらもNone）
    fn optional_string(
        object: &Map<String, Value>,
        key: &str,
    ) -> Result<Option<String>, RequestParseError> {
        match object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(RequestParseError::InvalidField(key.to_string())),
        }
    }
}
