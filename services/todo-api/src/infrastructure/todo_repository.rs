/// Todoリポジトリ
///
/// Todoは永続化しないため、固定データを返すスタブ実装のみを持つ。
/// 実ストアに置き換える場合はこのトレイトを実装すればルーティングは変更不要。
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ApiError, Todo, TodoCreate, PLACEHOLDER_TODO_ID};

/// Todoリポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoRepositoryError {
    /// Todoストアを利用できない
    #[error("Todoストアを利用できません: {0}")]
    Unavailable(String),
}

impl From<TodoRepositoryError> for ApiError {
    fn from(err: TodoRepositoryError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

/// Todo管理用トレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Todo一覧を取得
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Todoを作成し、作成されたレコードを返す
    async fn create(&self, todo: TodoCreate) -> Result<Todo, TodoRepositoryError>;
}

/// 固定データを返すTodoリポジトリ
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleTodoRepository;

impl SampleTodoRepository {
    /// サンプルTodo一覧（id 1, 2）
    pub fn sample_todos() -> Vec<Todo> {
        vec![
            Todo {
                id: 1,
                completed: false,
                title: "sample todo".to_string(),
            },
            Todo {
                id: 2,
                completed: true,
                title: "second todo".to_string(),
            },
        ]
    }
}

#[async_trait]
impl TodoRepository for SampleTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        Ok(Self::sample_todos())
    }

    async fn create(&self, todo: TodoCreate) -> Result<Todo, TodoRepositoryError> {
        // 保存はしない。IDは固定の仮値
        Ok(Todo {
            id: PLACEHOLDER_TODO_ID,
            completed: todo.completed,
            title: todo.title,
        })
    }
}
