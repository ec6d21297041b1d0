// 登録結果をトランスポートレベルのレスポンスに変換する
//
// - 成功: 200 + {"message": "User registered", "user": {...}}
// - ParseError: 400 + {"message": "Invalid request body"}
// - StorageError: 500 + {"message": "Internal server error"}

use lambda_http::http::header::{CONTENT_TYPE, HeaderValue};
use lambda_http::{Body, Response};
use serde_json::{Value, json};
use tracing::error;

use super::RegisterHandlerError;
use crate::domain::RegistrationResponse;

/// ハンドラーの処理結果
pub type RegisterResult = Result<RegistrationResponse, RegisterHandlerError>;

const JSON_CONTENT_TYPE: &str = "application/json";

/// 処理結果からステータスコードとJSONボディを決定
///
/// エラー詳細はログにのみ出力し、ボディには含めない。
pub fn status_and_body(result: &RegisterResult) -> (u16, String) {
    let err = match result {
        Ok(response) => match response.to_json() {
            Ok(body) => return (200, body),
            Err(err) => {
                error!(error = %err, "レスポンスのシリアライズに失敗");
                RegisterHandlerError::StorageError(err.to_string())
            }
        },
        Err(err) => {
            error!(error = %err, status = err.status_code(), "ユーザー登録失敗");
            err.clone()
        }
    };

    let body = json!({ "message": err.public_message() }).to_string();
    (err.status_code(), body)
}

/// API Gatewayプロキシ統合形式のレスポンスを構築
pub fn proxy_response(result: &RegisterResult) -> Value {
    let (status, body) = status_and_body(result);

    json!({
        "statusCode": status,
        "headers": { "Content-Type": JSON_CONTENT_TYPE },
        "body": body
    })
}

/// lambda_http用のHTTPレスポンスを構築
pub fn http_response(result: &RegisterResult) -> Result<Response<Body>, lambda_http::http::Error> {
    let (status, body) = status_and_body(result);

    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
        .body(Body::Text(body))
}
