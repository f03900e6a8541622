// 受信リクエスト
//
// プラットフォームから1回の呼び出しごとに渡されるHTTPリクエストの写し。
// lambda_httpの型に依存しない形で保持し、ルーティングのテストを容易にする。

use std::collections::HashMap;

use super::ApiError;

/// 受信リクエスト
///
/// 呼び出し単位で生成され、以後変更されない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundRequest {
    /// HTTPメソッド（例: "GET"）
    pub method: String,
    /// リクエストパス（クエリ文字列を含まない）
    pub path: String,
    /// リクエストボディ（存在しない場合はNone）
    pub body: Option<String>,
    /// リクエストヘッダー（ヘッダー名は小文字）
    pub headers: HashMap<String, String>,
    /// ボディがUTF-8として不正なバイト列だった場合にtrue
    ///
    /// このとき`body`には置換文字を含む写しが入り、ログ用途にのみ使う。
    pub body_not_utf8: bool,
}

impl InboundRequest {
    /// メソッドとパスを指定して作成
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body: None,
            headers: HashMap::new(),
            body_not_utf8: false,
        }
    }

    /// ボディを設定
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.body_not_utf8 = false;
        self
    }

    /// UTF-8として解釈できないボディを設定
    pub fn with_undecodable_body(mut self, bytes: &[u8]) -> Self {
        self.body = Some(String::from_utf8_lossy(bytes).into_owned());
        self.body_not_utf8 = true;
        self
    }

    /// ヘッダーを追加
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// ボディのバイト長（ログ用）
    pub fn body_len(&self) -> usize {
        self.body.as_deref().map_or(0, str::len)
    }

    /// 空白以外の文字を含むボディを取得
    ///
    /// ボディが存在しない、または空白のみの場合はNoneを返す。
    pub fn non_blank_body(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.trim().is_empty())
    }

    /// JSONとして解析するボディを取得
    ///
    /// 空または空白のみのボディは`EmptyBody`、UTF-8として不正なボディは
    /// `InvalidJson`とする。判定はこの順に行う。
    pub fn json_body(&self) -> Result<&str, ApiError> {
        let body = self.non_blank_body().ok_or(ApiError::EmptyBody)?;
        if self.body_not_utf8 {
            return Err(ApiError::InvalidJson);
        }
        Ok(body)
    }
}
