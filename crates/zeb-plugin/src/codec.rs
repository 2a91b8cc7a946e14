// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JSON method codec.
//
// Calls are `{"method": <string>, "args": <any>}`. Replies are envelopes:
//   success          [<result>]
//   error            [<code>, <message|null>, <details|null>]
//   not implemented  empty (zero bytes)
//
// Error details of `None` and `Some(Null)` share one encoding and both decode
// to `None`.

use serde_json::{Value, json};

use zeb_core::error::{Result, ZebError};
use zeb_core::{MethodCall, MethodResponse};

pub fn encode_call(call: &MethodCall) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(call)?)
}

/// Decode a method call. `args` may be absent; `method` must be a string.
pub fn decode_call(message: &[u8]) -> Result<MethodCall> {
    let value: Value =
        serde_json::from_slice(message).map_err(|e| ZebError::Codec(e.to_string()))?;
    let Value::Object(mut fields) = value else {
        return Err(ZebError::MalformedCall("expected a JSON object".into()));
    };
    let method = match fields.remove("method") {
        Some(Value::String(method)) => method,
        Some(other) => {
            return Err(ZebError::MalformedCall(format!(
                "'method' must be a string, got {other}"
            )));
        }
        None => return Err(ZebError::MalformedCall("missing 'method'".into())),
    };
    let args = fields.remove("args").unwrap_or(Value::Null);
    Ok(MethodCall { method, args })
}

pub fn encode_response(response: &MethodResponse) -> Result<Vec<u8>> {
    match response {
        MethodResponse::Success(result) => Ok(serde_json::to_vec(&json!([result]))?),
        MethodResponse::Error {
            code,
            message,
            details,
        } => Ok(serde_json::to_vec(&json!([code, message, details]))?),
        MethodResponse::NotImplemented => Ok(Vec::new()),
    }
}

/// Turn a reply envelope back into a [`MethodResponse`].
pub fn decode_envelope(envelope: &[u8]) -> Result<MethodResponse> {
    if envelope.is_empty() {
        return Ok(MethodResponse::NotImplemented);
    }
    let value: Value =
        serde_json::from_slice(envelope).map_err(|e| ZebError::Codec(e.to_string()))?;
    let Value::Array(mut items) = value else {
        return Err(ZebError::Codec("envelope is not a JSON array".into()));
    };
    match items.len() {
        1 => Ok(MethodResponse::Success(items.remove(0))),
        3 => {
            let details = items.pop().unwrap_or(Value::Null);
            let message = match items.pop() {
                Some(Value::String(message)) => Some(message),
                Some(Value::Null) | None => None,
                Some(other) => {
                    return Err(ZebError::Codec(format!(
                        "error message must be a string, got {other}"
                    )));
                }
            };
            let Some(Value::String(code)) = items.pop() else {
                return Err(ZebError::Codec("error code must be a string".into()));
            };
            Ok(MethodResponse::error_with_details(code, message, details))
        }
        n => Err(ZebError::Codec(format!("unexpected envelope length {n}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_call_with_args() {
        let call = decode_call(br#"{"method":"setBrightness","args":{"level":0.5}}"#)
            .expect("decode");
        assert_eq!(call.method, "setBrightness");
        assert_eq!(call.args, json!({ "level": 0.5 }));
    }

    #[test]
    fn decode_call_without_args_gives_null() {
        let call = decode_call(br#"{"method":"getPlatformVersion"}"#).expect("decode");
        assert_eq!(call, MethodCall::new("getPlatformVersion"));
    }

    #[test]
    fn decode_call_rejects_bad_input() {
        assert!(matches!(decode_call(b"not json"), Err(ZebError::Codec(_))));
        assert!(matches!(decode_call(b"[1,2]"), Err(ZebError::MalformedCall(_))));
        assert!(matches!(
            decode_call(br#"{"method":42}"#),
            Err(ZebError::MalformedCall(_))
        ));
        assert!(matches!(
            decode_call(br#"{"args":null}"#),
            Err(ZebError::MalformedCall(_))
        ));
    }

    #[test]
    fn encode_call_is_decodable() {
        let call = MethodCall::with_args("getPlatformVersion", json!({ "verbose": true }));
        let bytes = encode_call(&call).expect("encode");
        assert_eq!(decode_call(&bytes).expect("decode"), call);
    }

    #[test]
    fn success_envelope() {
        let bytes = encode_response(&MethodResponse::success("iOS 17.0")).expect("encode");
        assert_eq!(bytes, br#"["iOS 17.0"]"#);
    }

    #[test]
    fn error_envelope_uses_nulls_for_missing_parts() {
        let response = MethodResponse::Error {
            code: "UNAVAILABLE".into(),
            message: None,
            details: None,
        };
        let bytes = encode_response(&response).expect("encode");
        assert_eq!(bytes, br#"["UNAVAILABLE",null,null]"#);
        assert_eq!(decode_envelope(&bytes).expect("decode"), response);
    }

    #[test]
    fn not_implemented_is_an_empty_reply() {
        let bytes = encode_response(&MethodResponse::NotImplemented).expect("encode");
        assert!(bytes.is_empty());
        assert_eq!(
            decode_envelope(&bytes).expect("decode"),
            MethodResponse::NotImplemented
        );
    }

    #[test]
    fn null_details_decode_to_none() {
        let response = MethodResponse::Error {
            code: "X".into(),
            message: None,
            details: Some(Value::Null),
        };
        let bytes = encode_response(&response).expect("encode");
        assert_eq!(bytes, br#"["X",null,null]"#);
        assert_eq!(
            decode_envelope(&bytes).expect("decode"),
            MethodResponse::error_with_details("X", None, Value::Null)
        );
    }

    #[test]
    fn decode_error_envelope_with_details() {
        let response =
            decode_envelope(br#"["UNAVAILABLE","no version",{"os":"x"}]"#).expect("decode");
        assert_eq!(
            response,
            MethodResponse::Error {
                code: "UNAVAILABLE".into(),
                message: Some("no version".into()),
                details: Some(json!({ "os": "x" })),
            }
        );
    }

    #[test]
    fn decode_envelope_rejects_unknown_shapes() {
        assert!(decode_envelope(b"{}").is_err());
        assert!(decode_envelope(b"[1,2]").is_err());
        assert!(decode_envelope(br#"[1,"m",null]"#).is_err());
        assert!(decode_envelope(b"garbage").is_err());
    }
}
