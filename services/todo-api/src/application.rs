// アプリケーション層モジュール
pub mod lambda_adapter;
pub mod todo_api_handler;

// 再エクスポート
pub use lambda_adapter::{into_lambda_response, to_inbound_request};
pub use todo_api_handler::TodoApiHandler;
