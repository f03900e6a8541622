// PostgRESTログストア設定
//
// 外部ストアのRESTエンドポイントとAPIキーを環境変数から読み込む。
// 起動時に一度だけ読み込み、以後は不変。

use std::fmt;

use thiserror::Error;
use url::Url;

/// 環境変数名: RESTエンドポイント（例: "https://xxx.supabase.co/rest/v1"）
pub const ENV_ENDPOINT: &str = "SUPABASE_URL";

/// 環境変数名: APIキー
pub const ENV_API_KEY: &str = "SUPABASE_API_KEY";

/// ログ一覧の並び順（ts降順、同時刻はid降順）
const LIST_ORDER: &str = "ts.desc,id.desc";

/// ログストア設定エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogStoreConfigError {
    /// 必須の環境変数が設定されていない（空白のみも含む）
    #[error("必須の環境変数が設定されていません: {0}")]
    MissingEnvVar(String),

    /// エンドポイントが絶対URL（http/https）ではない
    #[error("エンドポイントURLが不正です: {0}")]
    InvalidEndpoint(String),
}

/// ログストアの接続設定
///
/// # フィールド
/// - `endpoint`: RESTエンドポイントのベースURL（末尾スラッシュは除去済み）
/// - `api_key`: `apikey`ヘッダーと`Authorization: Bearer`の両方に使用
#[derive(Clone, PartialEq, Eq)]
pub struct LogStoreConfig {
    endpoint: String,
    api_key: String,
}

// APIキーはログに出さない
impl fmt::Debug for LogStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStoreConfig")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl LogStoreConfig {
    /// 新しい設定を作成
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - `SUPABASE_URL`: RESTエンドポイント（必須、http/httpsの絶対URL）
    /// - `SUPABASE_API_KEY`: APIキー（必須）
    pub fn from_env() -> Result<Self, LogStoreConfigError> {
        let endpoint = required_env(ENV_ENDPOINT)?;
        let api_key = required_env(ENV_API_KEY)?;

        validate_endpoint(&endpoint)?;

        Ok(Self::new(endpoint, api_key))
    }

    /// エンドポイントURLを取得
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// APIキーを取得
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// ログ登録URL
    pub fn logs_url(&self) -> String {
        format!("{}/logs", self.endpoint)
    }

    /// ログ一覧取得URL
    ///
    /// 例: `{endpoint}/logs?select=*&order=ts.desc,id.desc&limit=20`
    pub fn list_logs_url(&self, limit: u32) -> String {
        format!("{}?select=*&order={}&limit={}", self.logs_url(), LIST_ORDER, limit)
    }
}

fn required_env(key: &str) -> Result<String, LogStoreConfigError> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| LogStoreConfigError::MissingEnvVar(key.to_string()))
}

fn validate_endpoint(endpoint: &str) -> Result<(), LogStoreConfigError> {
    let url = Url::parse(endpoint)
        .map_err(|e| LogStoreConfigError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(LogStoreConfigError::InvalidEndpoint(format!(
            "{}: 未対応のスキーム {}",
            endpoint, scheme
        ))),
    }
}
