// 送信レスポンス
//
// 1回の呼び出しにつき必ず1つ生成されるHTTPレスポンスの写し。
// ボディは常にJSONテキストで、Content-Typeは常にapplication/json。

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::error;

use super::api_error::ApiError;

/// JSONレスポンスのContent-Type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content-Typeヘッダー名
const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// シリアライズ失敗時のフォールバックボディ
const FALLBACK_ERROR_BODY: &str = r#"{"error":"internal error"}"#;

/// 送信レスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// JSONボディ
    pub body: String,
    /// レスポンスヘッダー
    pub headers: BTreeMap<String, String>,
}

impl OutboundResponse {
    /// 値をJSONにシリアライズしてレスポンスを作成
    ///
    /// シリアライズに失敗した場合は500エラーレスポンスになる。
    pub fn json<T: Serialize>(status_code: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self::raw_json(status_code, body),
            Err(e) => {
                error!(error = %e, "レスポンスのシリアライズに失敗");
                Self::raw_json(500, FALLBACK_ERROR_BODY.to_string())
            }
        }
    }

    /// JSONテキストをそのままボディにしてレスポンスを作成
    ///
    /// 呼び出し側でJSONとして妥当であることを保証すること。
    pub fn raw_json(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE_JSON.to_string());

        Self {
            status_code,
            body,
            headers,
        }
    }

    /// エラーレスポンスを作成
    pub fn from_error(err: &ApiError) -> Self {
        Self::json(err.status_code(), &err.to_body())
    }

    /// ヘッダー値を取得（名前の大文字小文字は区別しない）
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
