/// ログストア
///
/// ログエントリの登録と最新ログの取得を抽象化するトレイトと、
/// 外部ストアの応答をそのまま中継するためのレスポンス型を定義する。
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ApiError, LogEntry};

/// ログストア操作のエラー型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogStoreError {
    /// 2xx以外のステータスが返された
    #[error("HTTPエラー: status={status}, message={message}")]
    HttpError {
        /// HTTPステータスコード
        status: u16,
        /// レスポンスボディ
        message: String,
    },

    /// 接続・タイムアウト等の送信エラー
    #[error("ネットワークエラー: {0}")]
    NetworkError(String),

    /// レスポンスボディの読み取りに失敗
    #[error("レスポンス読み取りエラー: {0}")]
    ResponseError(String),

    /// HTTPクライアントの構築に失敗
    #[error("HTTPクライアント構築エラー: {0}")]
    ClientBuildError(String),
}

impl From<LogStoreError> for ApiError {
    fn from(err: LogStoreError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

/// 外部ストアの成功レスポンス
///
/// ボディは加工せずに呼び出し元へ中継する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreResponse {
    /// HTTPステータスコード（2xx）
    pub status: u16,
    /// レスポンスボディ（JSON）
    pub body: String,
}

/// ログストア用トレイト
///
/// 実際のREST API実装とテスト用モックを差し替え可能にする。
#[async_trait]
pub trait LogStore: Send + Sync {
    /// ログエントリを登録し、登録結果をそのまま返す
    async fn insert(&self, entry: &LogEntry) -> Result<StoreResponse, LogStoreError>;

    /// 新しい順（ts降順、同時刻はid降順）に最大`limit`件のログを取得
    async fn list_recent(&self, limit: u32) -> Result<StoreResponse, LogStoreError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // ==================== モックログストア ====================

    /// ユニットテスト用のモックLogStore
    #[derive(Debug, Clone)]
    pub struct MockLogStore {
        /// insertで受け取ったエントリ
        inserted: Arc<Mutex<Vec<LogEntry>>>,
        /// list_recentで受け取ったlimit
        list_limits: Arc<Mutex<Vec<u32>>>,
        /// insertの応答
        insert_result: Arc<Mutex<Result<StoreResponse, LogStoreError>>>,
        /// list_recentの応答
        list_result: Arc<Mutex<Result<StoreResponse, LogStoreError>>>,
    }

    impl MockLogStore {
        pub fn new() -> Self {
            Self {
                inserted: Arc::new(Mutex::new(Vec::new())),
                list_limits: Arc::new(Mutex::new(Vec::new())),
                insert_result: Arc::new(Mutex::new(Ok(StoreResponse {
                    status: 201,
                    body: "[]".to_string(),
                }))),
                list_result: Arc::new(Mutex::new(Ok(StoreResponse {
                    status: 200,
                    body: "[]".to_string(),
                }))),
            }
        }

        pub fn set_insert_result(&self, result: Result<StoreResponse, LogStoreError>) {
            *self.insert_result.lock().unwrap() = result;
        }

        pub fn set_list_result(&self, result: Result<StoreResponse, LogStoreError>) {
            *self.list_result.lock().unwrap() = result;
        }

        pub fn inserted(&self) -> Vec<LogEntry> {
            self.inserted.lock().unwrap().clone()
        }

        pub fn list_limits(&self) -> Vec<u32> {
            self.list_limits.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LogStore for MockLogStore {
        async fn insert(&self, entry: &LogEntry) -> Result<StoreResponse, LogStoreError> {
            self.inserted.lock().unwrap().push(entry.clone());
            self.insert_result.lock().unwrap().clone()
        }

        async fn list_recent(&self, limit: u32) -> Result<StoreResponse, LogStoreError> {
            self.list_limits.lock().unwrap().push(limit);
            self.list_result.lock().unwrap().clone()
        }
    }

    // ==================== LogStoreError テスト ====================

    #[test]
    fn test_error_display_http_error() {
        let error = LogStoreError::HttpError {
            status: 409,
            message: "duplicate key".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("409"));
        assert!(display.contains("duplicate key"));
    }

    #[test]
    fn test_error_converts_to_upstream_api_error() {
        let api_error: ApiError = LogStoreError::NetworkError("connection refused".to_string()).into();

        assert_eq!(api_error.status_code(), 500);
        assert_eq!(api_error.public_message(), "internal error");
        match api_error {
            ApiError::Upstream(detail) => assert!(detail.contains("connection refused")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    // ==================== MockLogStore テスト ====================

    #[tokio::test]
    async fn test_mock_records_inserted_entries() {
        let store = MockLogStore::new();
        let entry =
            LogEntry::parse(r#"{"ts":"2025-01-01T00:00:00+00:00","type":"info","text":"a"}"#).unwrap();

        let response = store.insert(&entry).await.unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(store.inserted(), vec![entry]);
    }

    #[tokio::test]
    async fn test_mock_returns_configured_error() {
        let store = MockLogStore::new();
        store.set_list_result(Err(LogStoreError::HttpError {
            status: 500,
            message: "boom".to_string(),
        }));

        assert!(store.list_recent(20).await.is_err());
        assert_eq!(store.list_limits(), vec![20]);
    }
}
