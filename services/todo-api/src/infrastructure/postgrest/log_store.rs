// PostgrestLogStore - LogStore実装
//
// PostgREST互換REST APIの `logs` テーブルに対して登録・一覧取得を行う。
// 再試行はしない。失敗は1回でそのまま呼び出し元に返す。

use super::config::LogStoreConfig;
use crate::domain::LogEntry;
use crate::infrastructure::log_store::{LogStore, LogStoreError, StoreResponse};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// リクエストタイムアウト（秒）
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// 接続タイムアウト（秒）
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// 登録結果を本文で返させるためのPreferヘッダー値
const PREFER_RETURN_REPRESENTATION: &str = "return=representation";

/// PostgRESTログストア
///
/// `apikey`ヘッダーと`Authorization: Bearer`ヘッダーの両方に同じAPIキーを付与する。
#[derive(Clone)]
pub struct PostgrestLogStore {
    /// HTTPクライアント
    client: Client,
    /// 設定
    config: LogStoreConfig,
}

impl std::fmt::Debug for PostgrestLogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgrestLogStore")
            .field("endpoint", &self.config.endpoint())
            .finish_non_exhaustive()
    }
}

impl PostgrestLogStore {
    /// 設定からPostgrestLogStoreを作成
    ///
    /// # 戻り値
    /// * `Ok(PostgrestLogStore)` - 初期化されたストア
    /// * `Err(LogStoreError::ClientBuildError)` - HTTPクライアントの構築に失敗
    pub fn new(config: LogStoreConfig) -> Result<Self, LogStoreError> {
        info!(endpoint = config.endpoint(), "PostgrestLogStoreを初期化");

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LogStoreError::ClientBuildError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// カスタムHTTPクライアントを指定して作成
    pub fn with_client(config: LogStoreConfig, client: Client) -> Self {
        Self { client, config }
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &LogStoreConfig {
        &self.config
    }

    /// 認証ヘッダーを付与
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", self.config.api_key())
            .bearer_auth(self.config.api_key())
    }

    /// リクエストを送信
    async fn send(builder: RequestBuilder) -> Result<Response, LogStoreError> {
        builder.send().await.map_err(|e| {
            error!(error = %e, "ログストアへのリクエスト送信に失敗");
            LogStoreError::NetworkError(e.to_string())
        })
    }

    /// レスポンスを読み取り、2xx以外はエラーにする
    async fn read_response(response: Response) -> Result<StoreResponse, LogStoreError> {
        let status = response.status();

        let body = response.text().await.map_err(|e| {
            error!(status = %status, error = %e, "レスポンスボディの読み取りに失敗");
            LogStoreError::ResponseError(e.to_string())
        })?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "ログストアエラー");
            return Err(LogStoreError::HttpError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(StoreResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl LogStore for PostgrestLogStore {
    /// ログエントリを登録（POST {endpoint}/logs）
    ///
    /// `Prefer: return=representation`により登録された行がJSONで返る。
    #[instrument(skip(self, entry), fields(endpoint = %self.config.endpoint(), log_type = %entry.kind))]
    async fn insert(&self, entry: &LogEntry) -> Result<StoreResponse, LogStoreError> {
        let url = self.config.logs_url();
        debug!(url = %url, "ログエントリを登録");

        let builder = self
            .authorize(self.client.post(&url))
            .header("Prefer", PREFER_RETURN_REPRESENTATION)
            .json(entry);

        let response = Self::read_response(Self::send(builder).await?).await?;

        info!(status = response.status, "ログエントリの登録に成功");
        Ok(response)
    }

    /// 最新ログを取得（GET {endpoint}/logs?select=*&order=ts.desc,id.desc&limit=N）
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint()))]
    async fn list_recent(&self, limit: u32) -> Result<StoreResponse, LogStoreError> {
        let url = self.config.list_logs_url(limit);
        debug!(url = %url, "ログ一覧を取得");

        let builder = self.authorize(self.client.get(&url));

        let response = Self::read_response(Self::send(builder).await?).await?;

        info!(status = response.status, "ログ一覧の取得に成功");
        Ok(response)
    }
}
