/// ユーザー登録 Lambdaエントリポイント（API Gatewayプロキシ統合）
///
/// `{"body": "<JSON文字列>"}`形式のイベントを受け取り、
/// ユーザーレコードをDynamoDBに保存してプロキシ統合形式のレスポンスを返す。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::info;
use user_registration::application::{RegisterHandler, proxy_response};
use user_registration::infrastructure::{
    DynamoDbConfig, DynamoUserRepository, UserRepository, init_logging,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // テーブル設定とDynamoDBクライアントはコールドスタート時に一度だけ作成
    let config = DynamoDbConfig::from_env().await?;
    info!(table_name = config.table_name(), "ユーザー登録Lambda関数を初期化");

    let user_repo =
        DynamoUserRepository::new(config.client().clone(), config.table_name().to_string());
    let register_handler = RegisterHandler::new(user_repo);
    let register_handler = &register_handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(register_handler, event).await
    }))
    .await
}

/// Lambda関数のメインハンドラー
///
/// 登録の失敗はエラーとして返さず、400/500のレスポンスに変換する。
async fn handler<UR>(
    register_handler: &RegisterHandler<UR>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error>
where
    UR: UserRepository,
{
    let request_id = event.context.request_id.clone();
    info!(request_id = %request_id, "ユーザー登録リクエスト受信");

    let result = register_handler.handle_event(&event.payload).await;

    Ok(proxy_response(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lambda_runtime::Context;
    use serde_json::json;
    use std::sync::Mutex;
    use user_registration::domain::UserRecord;
    use user_registration::infrastructure::RepositoryError;

    /// 書き込みを記録するだけのテスト用リポジトリ
    #[derive(Default)]
    struct RecordingRepository {
        records: Mutex<Vec<UserRecord>>,
        fail: bool,
    }

    #[async_trait]
    impl UserRepository for RecordingRepository {
        async fn put(&self, record: &UserRecord) -> Result<(), RepositoryError> {
            if self.fail {
                return Err(RepositoryError::WriteError("throttled".to_string()));
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn lambda_event(payload: Value) -> LambdaEvent<Value> {
        LambdaEvent::new(payload, Context::default())
    }

    fn parse_body(response: &Value) -> Value {
        serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_handler_returns_200_with_registered_user() {
        let register_handler = RegisterHandler::new(RecordingRepository::default());
        let event =
            lambda_event(json!({ "body": r#"{"name":"Alice","email":"alice@example.com"}"# }));

        let response = handler(&register_handler, event).await.unwrap();

        assert_eq!(response["statusCode"], 200);
        let body = parse_body(&response);
        assert_eq!(body["message"], "User registered");
        assert_eq!(body["user"]["name"], "Alice");
        assert_eq!(body["user"]["email"], "alice@example.com");
    }

    #[tokio::test]
    async fn test_handler_response_user_matches_persisted_record() {
        let repo = RecordingRepository::default();
        let register_handler = RegisterHandler::new(repo);
        let event = lambda_event(json!({}));

        let response = handler(&register_handler, event).await.unwrap();

        let body = parse_body(&response);
        let user: UserRecord = serde_json::from_value(body["user"].clone()).unwrap();
        let records = register_handler_records(&register_handler);
        assert_eq!(records, vec![user]);
    }

    #[tokio::test]
    async fn test_handler_malformed_body_returns_400() {
        let register_handler = RegisterHandler::new(RecordingRepository::default());
        let event = lambda_event(json!({ "body": "not-json" }));

        let response = handler(&register_handler, event).await.unwrap();

        assert_eq!(response["statusCode"], 400);
        assert!(register_handler_records(&register_handler).is_empty());
    }

    #[tokio::test]
    async fn test_handler_storage_failure_returns_500() {
        let repo = RecordingRepository {
            fail: true,
            ..Default::default()
        };
        let register_handler = RegisterHandler::new(repo);
        let event = lambda_event(json!({ "body": "{}" }));

        let response = handler(&register_handler, event).await.unwrap();

        assert_eq!(response["statusCode"], 500);
        assert_eq!(parse_body(&response)["message"], "Internal server error");
    }

    fn register_handler_records(
        register_handler: &RegisterHandler<RecordingRepository>,
    ) -> Vec<UserRecord> {
        register_handler.repository().records.lock().unwrap().clone()
    }
}
