// lambda_httpアダプター
//
// API Gateway HTTP API (v2) / Lambda Function URLのリクエストを
// InboundRequestに変換し、OutboundResponseをlambda_httpのレスポンスに戻す。

use lambda_http::http::header::{HeaderName, HeaderValue};
use lambda_http::http::{self, StatusCode};
use lambda_http::{Body, Request, Response};
use tracing::warn;

use crate::domain::{InboundRequest, OutboundResponse};

/// lambda_httpのリクエストをInboundRequestに変換
///
/// - パスはクエリ文字列を含まない
/// - `Body::Empty`はボディなし、`Body::Binary`はUTF-8として解釈
/// - UTF-8として不正なボディは`body_not_utf8`を立て、JSON解析の対象にしない
/// - 文字列として読めないヘッダー値は無視
pub fn to_inbound_request(request: &Request) -> InboundRequest {
    let (body, body_not_utf8) = match request.body() {
        Body::Empty => (None, false),
        Body::Text(text) => (Some(text.clone()), false),
        Body::Binary(bytes) => match String::from_utf8(bytes.clone()) {
            Ok(text) => (Some(text), false),
            Err(err) => {
                warn!(valid_up_to = err.utf8_error().valid_up_to(), "UTF-8として不正なボディ");
                (Some(String::from_utf8_lossy(err.as_bytes()).into_owned()), true)
            }
        },
        _ => (None, false),
    };

    let headers = request
        .headers()
        .iter()
        .filter_map(|(name, value)| match value.to_str() {
            Ok(v) => Some((name.as_str().to_string(), v.to_string())),
            Err(_) => {
                warn!(header = %name, "文字列として読めないヘッダーを無視");
                None
            }
        })
        .collect();

    InboundRequest {
        method: request.method().as_str().to_string(),
        path: request.uri().path().to_string(),
        body,
        headers,
        body_not_utf8,
    }
}

/// OutboundResponseをlambda_httpのレスポンスに変換
///
/// # 戻り値
/// * `Ok(Response<Body>)` - 変換済みレスポンス
/// * `Err(http::Error)` - ステータスコードまたはヘッダーが不正
pub fn into_lambda_response(response: OutboundResponse) -> Result<Response<Body>, http::Error> {
    let status = StatusCode::from_u16(response.status_code)?;

    let mut builder = Response::builder().status(status);
    for (name, value) in &response.headers {
        builder = builder.header(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }

    builder.body(Body::Text(response.body))
}
