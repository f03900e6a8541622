// ルート解決
//
// メソッドとパスの組から処理対象のルートを決定する。
// パスは末尾一致で判定し、最長一致は行わない。

use super::routing_policy::MethodPolicy;

const LOGS_SUFFIX: &str = "/logs";
const TODOS_SUFFIX: &str = "/todos";

/// POSTリクエストの転送先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostTarget {
    /// ログエントリの登録
    Logs,
    /// Todoの作成
    Todos,
    /// 該当なし（404）
    Unknown,
}

/// ルート
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// GET .../logs: 外部ストアから最新ログを取得
    ListLogs,
    /// GET（/logs以外）: サンプルTodo一覧
    ListTodos,
    /// POST: 本文検証後に転送先へ
    Post(PostTarget),
    /// GET/POST以外（厳格ポリシー時のみ）
    Unsupported,
}

impl Route {
    /// メソッドとパスからルートを決定
    ///
    /// # 判定順
    /// 1. GET かつ "/logs" で終わる → `ListLogs`
    /// 2. GET → `ListTodos`
    /// 3. POST → 末尾が "/logs" / "/todos" / その他 で `Post(..)`
    /// 4. その他のメソッド → ポリシーに従い `ListTodos` または `Unsupported`
    pub fn resolve(method: &str, path: &str, policy: MethodPolicy) -> Self {
        match method {
            "GET" if path.ends_with(LOGS_SUFFIX) => Route::ListLogs,
            "GET" => Route::ListTodos,
            "POST" if path.ends_with(LOGS_SUFFIX) => Route::Post(PostTarget::Logs),
            "POST" if path.ends_with(TODOS_SUFFIX) => Route::Post(PostTarget::Todos),
            "POST" => Route::Post(PostTarget::Unknown),
            _ => match policy {
                MethodPolicy::Fallthrough => Route::ListTodos,
                MethodPolicy::Reject => Route::Unsupported,
            },
        }
    }
}
