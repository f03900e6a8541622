// Todo

use serde::{Deserialize, Serialize};

/// 作成されたTodoに付与する仮ID（永続化しないため固定）
pub const PLACEHOLDER_TODO_ID: i64 = 999;

/// Todoレコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub completed: bool,
    pub title: String,
}

/// Todo作成リクエスト
///
/// `completed`は省略時false。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCreate {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoCreate {
    /// JSON文字列からパース
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
