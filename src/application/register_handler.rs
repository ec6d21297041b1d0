/// ユーザー登録ハンドラー
///
/// リクエストボディからユーザーレコードを組み立て、
/// UserRepositoryに一度だけ書き込んでレスポンスを返す。
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{RegistrationRequest, RegistrationResponse, RequestParseError, UserRecord};
use crate::infrastructure::{RepositoryError, UserRepository};

/// 登録ハンドラーのエラー型
///
/// どちらもハンドラー内では回復せず、エントリポイント側で
/// トランスポートレベルのレスポンスに変換する。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegisterHandlerError {
    /// リクエストボディが不正
    #[error("Parse error: {0}")]
    ParseError(String),

    /// テーブルへの書き込みに失敗
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<RequestParseError> for RegisterHandlerError {
    fn from(err: RequestParseError) -> Self {
        RegisterHandlerError::ParseError(err.to_string())
    }
}

impl From<RepositoryError> for RegisterHandlerError {
    fn from(err: RepositoryError) -> Self {
        RegisterHandlerError::StorageError(err.to_string())
    }
}

impl RegisterHandlerError {
    /// 対応するHTTPステータスコード
    pub fn status_code(&self) -> u16 {
        match self {
            RegisterHandlerError::ParseError(_) => 400,
            RegisterHandlerError::StorageError(_) => 500,
        }
    }

    /// 呼び出し元に返すメッセージ（エラー詳細は含めない）
    pub fn public_message(&self) -> &'static str {
        match self {
            RegisterHandlerError::ParseError(_) => "Invalid request body",
            RegisterHandlerError::StorageError(_) => "Internal server error",
        }
    }
}

/// ユーザー登録リクエストを処理するハンドラー
pub struct RegisterHandler<UR>
where
    UR: UserRepository,
{
    /// ユーザーリポジトリ
    user_repo: UR,
}

impl<UR> RegisterHandler<UR>
where
    UR: UserRepository,
{
    /// 新しいRegisterHandlerを作成
    pub fn new(user_repo: UR) -> Self {
        Self { user_repo }
    }

    /// ユーザーリポジトリへの参照を取得
    pub fn repository(&self) -> &UR {
        &self.user_repo
    }

    /// API Gatewayプロキシイベントを処理
    ///
    /// `body`キーが無い、またはnullの場合は空オブジェクトとして扱う。
    pub async fn handle_event(
        &self,
        event: &Value,
    ) -> Result<RegistrationResponse, RegisterHandlerError> {
        let body = match event.get("body") {
            None | Some(Value::Null) => None,
            Some(Value::String(body)) => Some(body.as_str()),
            Some(_) => {
                return Err(RegisterHandlerError::ParseError(
                    "event body must be a string".to_string(),
                ));
            }
        };

        self.handle(body).await
    }

    /// リクエストボディを処理
    ///
    /// # 処理フロー
    /// 1. ボディをパース（`None`は`{}`扱い）
    /// 2. デフォルト値を適用し、新しいUUIDでレコードを作成
    /// 3. UserRepositoryにレコードを書き込み
    /// 4. 書き込んだレコードをそのままレスポンスに含める
    ///
    /// # 戻り値
    /// * 成功時は`Ok(RegistrationResponse)`
    /// * 失敗時は`Err(RegisterHandlerError)`
    pub async fn handle(
        &self,
        body: Option<&str>,
    ) -> Result<RegistrationResponse, RegisterHandlerError> {
        let request = RegistrationRequest::parse(body)?;

        let record = UserRecord::register(request.name, request.email);
        debug!(user_id = %record.id, "ユーザーレコード作成");

        self.user_repo.put(&record).await?;

        info!(user_id = %record.id, "ユーザー登録完了");

        Ok(RegistrationResponse::registered(record))
    }
}
