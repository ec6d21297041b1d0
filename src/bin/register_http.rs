/// ユーザー登録 HTTP Lambdaエントリポイント
///
/// Lambda Function URL / HTTP API経由のリクエストを処理する。
/// Base64エンコードされたボディのデコードはlambda_httpが行う。
use lambda_http::{Body, Error, Request, Response, run, service_fn};
use tracing::info;
use user_registration::application::{RegisterHandler, RegisterHandlerError, http_response};
use user_registration::infrastructure::{
    DynamoDbConfig, DynamoUserRepository, UserRepository, init_logging,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let config = DynamoDbConfig::from_env().await?;
    info!(table_name = config.table_name(), "ユーザー登録HTTP Lambda関数を初期化");

    let user_repo =
        DynamoUserRepository::new(config.client().clone(), config.table_name().to_string());
    let register_handler = RegisterHandler::new(user_repo);
    let register_handler = &register_handler;

    run(service_fn(move |request: Request| async move {
        handler(register_handler, request).await
    }))
    .await
}

/// HTTPリクエストハンドラー
///
/// # Returns
/// 成功時は200、不正なボディは400、書き込み失敗は500のJSONレスポンス
async fn handler<UR>(
    register_handler: &RegisterHandler<UR>,
    request: Request,
) -> Result<Response<Body>, Error>
where
    UR: UserRepository,
{
    info!(method = %request.method(), uri = %request.uri(), "ユーザー登録リクエスト受信");

    let result = match body_text(request.body()) {
        Ok(body) => register_handler.handle(body).await,
        Err(err) => Err(err),
    };

    Ok(http_response(&result)?)
}

/// リクエストボディを文字列として取得（空ボディはNone）
fn body_text(body: &Body) -> Result<Option<&str>, RegisterHandlerError> {
    match body {
        Body::Text(text) => Ok(Some(text.as_str())),
        Body::Binary(bytes) => std::str::from_utf8(bytes)
            .map(Some)
            .map_err(|e| RegisterHandlerError::ParseError(e.to_string())),
        _ => Ok(None),
    }
}
