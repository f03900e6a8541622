// APIエラー
//
// ルーティング中に発生するすべての失敗を表すドメイン層のエラー型。
// クライアントには `{"error": <message>}` 形式の固定メッセージのみを返し、
// 設定エラーや上流エラーの詳細はログにのみ出力する。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// クライアントに返す汎用メッセージ（5xx系で共通）
const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// APIエラー
///
/// # エラー種別
/// - クライアントエラー: `EmptyBody`, `InvalidJson`, `NotFound`（400/404）
/// - 設定エラー: `Configuration`（500、詳細は返さない）
/// - 上流エラー: `Upstream`（500、詳細は返さない）
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// POSTの本文が欠落、または空白のみ
    #[error("empty body")]
    EmptyBody,

    /// 本文のJSONが不正、または必須フィールドが欠落
    #[error("invalid json")]
    InvalidJson,

    /// 該当するルートが存在しない
    #[error("not found")]
    NotFound,

    /// 外部ストアの接続設定が存在しない
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// 外部ストアの呼び出しに失敗
    #[error("上流エラー: {0}")]
    Upstream(String),
}

impl ApiError {
    /// HTTPステータスコードを取得
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::EmptyBody | ApiError::InvalidJson => 400,
            ApiError::NotFound => 404,
            ApiError::Configuration(_) | ApiError::Upstream(_) => 500,
        }
    }

    /// クライアントに返すメッセージを取得
    ///
    /// サーバー側のエラーは原因を問わず同じメッセージになる。
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::EmptyBody => "empty body",
            ApiError::InvalidJson => "invalid json",
            ApiError::NotFound => "not found",
            ApiError::Configuration(_) | ApiError::Upstream(_) => INTERNAL_ERROR_MESSAGE,
        }
    }

    /// クライアント起因のエラーかどうか
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    /// エラーレスポンスボディを生成
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.public_message().to_string(),
        }
    }
}

/// エラーレスポンスのボディ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// エラーメッセージ
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_status_codes() {
        assert_eq!(ApiError::EmptyBody.status_code(), 400);
        assert_eq!(ApiError::InvalidJson.status_code(), 400);
        assert_eq!(ApiError::NotFound.status_code(), 404);
    }

    #[test]
    fn test_server_error_status_codes() {
        assert_eq!(ApiError::Configuration("x".to_string()).status_code(), 500);
        assert_eq!(ApiError::Upstream("x".to_string()).status_code(), 500);
    }

    #[test]
    fn test_public_messages() {
        assert_eq!(ApiError::EmptyBody.public_message(), "empty body");
        assert_eq!(ApiError::InvalidJson.public_message(), "invalid json");
        assert_eq!(ApiError::NotFound.public_message(), "not found");
    }

    /// 設定エラー・上流エラーの詳細はクライアントに漏れない
    #[test]
    fn test_server_errors_hide_details() {
        let config = ApiError::Configuration("SUPABASE_API_KEY".to_string());
        let upstream = ApiError::Upstream("status=503 body=secret".to_string());

        assert_eq!(config.public_message(), "internal error");
        assert_eq!(upstream.public_message(), "internal error");
        assert_eq!(upstream.to_body().error, "internal error");

        // Displayには詳細が含まれる（ログ用）
        assert!(upstream.to_string().contains("secret"));
    }

    #[test]
    fn test_is_client_error() {
        assert!(ApiError::EmptyBody.is_client_error());
        assert!(ApiError::NotFound.is_client_error());
        assert!(!ApiError::Upstream(String::new()).is_client_error());
    }

    #[test]
    fn test_error_body_serialization() {
        let json = serde_json::to_string(&ApiError::InvalidJson.to_body()).unwrap();
        assert_eq!(json, r#"{"error":"invalid json"}"#);
    }
}
