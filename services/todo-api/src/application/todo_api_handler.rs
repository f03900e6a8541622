// Todo APIハンドラー
//
// 1回の呼び出しで受け取ったリクエストをルーティングし、
// 必ず1つのJSONレスポンスを返す。失敗はすべてエラーレスポンスに変換し、
// 呼び出し元へ例外として伝播させない。

use serde::de::IgnoredAny;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::{
    ApiError, InboundRequest, LogEntry, OutboundResponse, PostTarget, Route, RoutingPolicy,
    TodoCreate,
};
use crate::infrastructure::{LogStore, StoreResponse, TodoRepository};

/// Todo APIハンドラー
///
/// ログストアが未設定（`None`）の場合は、ルートに関係なく
/// すべてのリクエストに500を返す。
pub struct TodoApiHandler<LS, TR>
where
    LS: LogStore,
    TR: TodoRepository,
{
    /// ログストア（接続設定が無い場合はNone）
    log_store: Option<LS>,
    /// Todoリポジトリ
    todo_repo: TR,
    /// ルーティングポリシー
    policy: RoutingPolicy,
}

impl<LS, TR> TodoApiHandler<LS, TR>
where
    LS: LogStore,
    TR: TodoRepository,
{
    /// デフォルトのポリシーでハンドラーを作成
    pub fn new(log_store: LS, todo_repo: TR) -> Self {
        Self::with_policy(log_store, todo_repo, RoutingPolicy::default())
    }

    /// ポリシーを指定してハンドラーを作成
    pub fn with_policy(log_store: LS, todo_repo: TR, policy: RoutingPolicy) -> Self {
        Self {
            log_store: Some(log_store),
            todo_repo,
            policy,
        }
    }

    /// ログストアの設定が無い状態のハンドラーを作成
    pub fn unconfigured(todo_repo: TR, policy: RoutingPolicy) -> Self {
        Self {
            log_store: None,
            todo_repo,
            policy,
        }
    }

    /// ログストアが設定済みかどうか
    pub fn is_configured(&self) -> bool {
        self.log_store.is_some()
    }

    /// リクエストを処理してレスポンスを生成
    ///
    /// # 処理フロー
    /// 1. ログストア設定の有無を確認（無ければ500）
    /// 2. メソッドとパスからルートを決定
    /// 3. POSTの場合は本文の有無を確認してからパース
    /// 4. 失敗はすべて `{"error": ...}` 形式のレスポンスに変換
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn handle(&self, request: &InboundRequest) -> OutboundResponse {
        info!(
            method = %request.method,
            path = %request.path,
            body_length = request.body_len(),
            "リクエスト受信"
        );

        match self.dispatch(request).await {
            Ok(response) => {
                info!(status = response.status_code, "レスポンス送信");
                response
            }
            Err(err) => {
                if err.is_client_error() {
                    warn!(status = err.status_code(), error = %err, "クライアントエラー");
                } else {
                    error!(status = err.status_code(), error = %err, "リクエスト処理エラー");
                }
                OutboundResponse::from_error(&err)
            }
        }
    }

    async fn dispatch(&self, request: &InboundRequest) -> Result<OutboundResponse, ApiError> {
        let log_store = self
            .log_store
            .as_ref()
            .ok_or_else(|| ApiError::Configuration("ログストアの接続設定がありません".to_string()))?;

        let route = Route::resolve(&request.method, &request.path, self.policy.method_policy);
        debug!(route = ?route, "ルート決定");

        match route {
            Route::ListLogs => self.list_logs(log_store).await,
            Route::ListTodos => self.list_todos().await,
            Route::Post(target) => {
                let body = request.json_body()?;
                match target {
                    PostTarget::Logs => self.create_log(log_store, body).await,
                    PostTarget::Todos => self.create_todo(body).await,
                    PostTarget::Unknown => Err(ApiError::NotFound),
                }
            }
            Route::Unsupported => Err(ApiError::NotFound),
        }
    }

    async fn list_logs(&self, log_store: &LS) -> Result<OutboundResponse, ApiError> {
        let response = log_store.list_recent(self.policy.log_list_limit).await?;
        relay(response)
    }

    async fn list_todos(&self) -> Result<OutboundResponse, ApiError> {
        let todos = self.todo_repo.list().await?;
        Ok(OutboundResponse::json(200, &todos))
    }

    async fn create_log(&self, log_store: &LS, body: &str) -> Result<OutboundResponse, ApiError> {
        let entry = LogEntry::parse(body).map_err(|e| {
            debug!(error = %e, "ログエントリのパースに失敗");
            ApiError::InvalidJson
        })?;

        let response = log_store.insert(&entry).await?;
        relay(response)
    }

    async fn create_todo(&self, body: &str) -> Result<OutboundResponse, ApiError> {
        let create = TodoCreate::parse(body).map_err(|e| {
            debug!(error = %e, "Todoのパースに失敗");
            ApiError::InvalidJson
        })?;

        let todo = self.todo_repo.create(create).await?;
        Ok(OutboundResponse::json(200, &todo))
    }
}

/// ストアの応答をステータス・ボディともにそのまま中継する
///
/// ボディがJSONとして読めない場合は上流エラーとする。
fn relay(response: StoreResponse) -> Result<OutboundResponse, ApiError> {
    if serde_json::from_str::<IgnoredAny>(&response.body).is_err() {
        return Err(ApiError::Upstream(format!(
            "JSONでない応答: status={}, body={}",
            response.status, response.body
        )));
    }

    Ok(OutboundResponse::raw_json(response.status, response.body))
}
