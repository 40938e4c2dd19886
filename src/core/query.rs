use crate::utils::error::{MergeError, Result};
use serde::Serialize;
use serde_json::Value;

/// 將參數結構攤平為查詢字串。
///
/// 未設定的值（`null`）與空陣列直接略過，不會送出空字串。
/// 陣列以逗號串接，例如 `expand=account,contact`。
pub fn to_pairs<Q: Serialize + ?Sized>(params: &Q) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params)?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(MergeError::QueryError {
                message: format!("query parameters must be an object, got {}", other),
            })
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        if let Some(encoded) = encode_value(&key, value)? {
            pairs.push((key, encoded));
        }
    }
    Ok(pairs)
}

fn encode_value(key: &str, value: Value) -> Result<Option<String>> {
    let encoded = match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Null => {}
                    Value::String(s) => parts.push(s),
                    Value::Bool(b) => parts.push(b.to_string()),
                    Value::Number(n) => parts.push(n.to_string()),
                    other => {
                        return Err(MergeError::QueryError {
                            message: format!("unsupported list item for '{}': {}", key, other),
                        })
                    }
                }
            }
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(","))
            }
        }
        Value::Object(obj) => Some(Value::Object(obj).to_string()),
    };
    Ok(encoded)
}

/// 路徑中的 id 需要跳脫
pub fn encode_path_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
