// ルーティングポリシー
//
// GET/POST以外のメソッドの扱いと、ログ一覧の取得件数を保持する。
// 起動時に一度だけ環境変数から読み込まれる不変データ。

use tracing::info;

/// ログ一覧の取得件数（デフォルト）
pub const DEFAULT_LOG_LIST_LIMIT: u32 = 20;

/// 環境変数名: 未対応メソッドを404で拒否するか
pub const ENV_REJECT_UNKNOWN_METHODS: &str = "TODO_API_REJECT_UNKNOWN_METHODS";

/// 環境変数名: ログ一覧の取得件数
pub const ENV_LOG_LIST_LIMIT: &str = "TODO_API_LOG_LIST_LIMIT";

/// GET/POST以外のメソッドの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodPolicy {
    /// Todo一覧（GETのデフォルト応答）にフォールスルーする
    #[default]
    Fallthrough,
    /// 404 not foundで拒否する
    Reject,
}

/// ルーティングポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingPolicy {
    /// GET/POST以外のメソッドの扱い
    pub method_policy: MethodPolicy,
    /// GET /logs で取得する最大件数
    pub log_list_limit: u32,
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        Self {
            method_policy: MethodPolicy::default(),
            log_list_limit: DEFAULT_LOG_LIST_LIMIT,
        }
    }
}

impl RoutingPolicy {
    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - `TODO_API_REJECT_UNKNOWN_METHODS`: "true" または "1" で未対応メソッドを拒否
    /// - `TODO_API_LOG_LIST_LIMIT`: ログ一覧の取得件数（未設定・不正値・0はデフォルト）
    pub fn from_env() -> Self {
        let method_policy = match std::env::var(ENV_REJECT_UNKNOWN_METHODS) {
            Ok(v) if is_truthy(&v) => MethodPolicy::Reject,
            _ => MethodPolicy::Fallthrough,
        };

        let log_list_limit = std::env::var(ENV_LOG_LIST_LIMIT)
            .ok()
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|&limit| limit > 0)
            .unwrap_or(DEFAULT_LOG_LIST_LIMIT);

        let policy = Self {
            method_policy,
            log_list_limit,
        };

        info!(
            method_policy = ?policy.method_policy,
            log_list_limit = policy.log_list_limit,
            "ルーティングポリシーを読み込み"
        );

        policy
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1")
}
