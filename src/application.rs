// アプリケーション層モジュール
pub mod register_handler;
pub mod registration_output;

// 再エクスポート
pub use register_handler::{RegisterHandler, RegisterHandlerError};
pub use registration_output::{RegisterResult, http_response, proxy_response, status_and_body};
