// ログエントリ
//
// POST /logs の本文として受け取り、外部ストアへそのまま転送する。

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// ログエントリ
///
/// 外部ストアへは `{ts, type, text}` の形でシリアライズされる。
/// タイムスタンプはRFC 3339形式で、受信時のオフセットを保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// 記録日時
    pub ts: DateTime<FixedOffset>,
    /// ログ種別
    #[serde(rename = "type")]
    pub kind: String,
    /// ログ本文
    pub text: String,
}

impl LogEntry {
    /// JSON文字列からパース
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
