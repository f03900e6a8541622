// PostgRESTログストアモジュール
//
// Supabase等のPostgREST互換REST APIにログエントリを登録・取得する。

mod config;
mod log_store;

pub use config::{LogStoreConfig, LogStoreConfigError, ENV_API_KEY, ENV_ENDPOINT};
pub use log_store::PostgrestLogStore;
