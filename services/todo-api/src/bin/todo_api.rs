/// Todo API HTTP Lambdaエントリポイント
///
/// API Gateway HTTP API (v2) 経由のリクエストを処理し、
/// /todos はサンプルデータ、/logs はPostgRESTログストアへ中継して応答する。
///
/// ログストアの接続設定はコールドスタート時に一度だけ読み込む。
/// 設定が欠落していても関数は起動し、すべてのリクエストに500を返す。
use std::sync::Arc;

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use todo_api::application::{into_lambda_response, to_inbound_request, TodoApiHandler};
use todo_api::domain::RoutingPolicy;
use todo_api::infrastructure::{
    init_logging, LogStore, LogStoreConfig, PostgrestLogStore, SampleTodoRepository,
    TodoRepository,
};
use tracing::{error, info};

/// 本番構成のハンドラー型
type ApiHandler = TodoApiHandler<PostgrestLogStore, SampleTodoRepository>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("Todo API Lambda関数を初期化");

    let handler = Arc::new(build_handler(RoutingPolicy::from_env()));

    run(service_fn(move |request: Request| {
        let handler = Arc::clone(&handler);
        async move { respond(&handler, request).await }
    }))
    .await
}

/// 環境変数からハンドラーを構築
///
/// ログストアの設定読み込み、またはHTTPクライアントの構築に失敗した場合は
/// 未設定状態のハンドラーを返す。
fn build_handler(policy: RoutingPolicy) -> ApiHandler {
    let todo_repo = SampleTodoRepository;

    let config = match LogStoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "ログストア設定の読み込みに失敗");
            return TodoApiHandler::unconfigured(todo_repo, policy);
        }
    };

    match PostgrestLogStore::new(config) {
        Ok(log_store) => {
            info!(endpoint = log_store.config().endpoint(), "ログストアを使用");
            TodoApiHandler::with_policy(log_store, todo_repo, policy)
        }
        Err(err) => {
            error!(error = %err, "ログストアの初期化に失敗");
            TodoApiHandler::unconfigured(todo_repo, policy)
        }
    }
}

/// HTTPリクエストハンドラー
async fn respond<LS, TR>(
    handler: &TodoApiHandler<LS, TR>,
    request: Request,
) -> Result<Response<Body>, Error>
where
    LS: LogStore,
    TR: TodoRepository,
{
    let inbound = to_inbound_request(&request);
    let outbound = handler.handle(&inbound).await;

    Ok(into_lambda_response(outbound)?)
}
