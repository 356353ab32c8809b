use serde_json::Value;

use crate::model::oracle_io::{HopVerdict, SeedPair};

/// Removes a surrounding ```json / ``` fence, if any.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Decode `{"start": .., "end": ..}` into a lowercased pair.
pub fn decode_seed_pair(raw: &str) -> Result<SeedPair, String> {
    let value: Value = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| format!("Invalid seed pair: {}", e))?;

    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
    };

    match (field("start"), field("end")) {
        (Some(start), Some(end)) => Ok(SeedPair { start, end }),
        _ => Err("Seed pair must contain non-empty \"start\" and \"end\"".to_string()),
    }
}

/// Decode `{"valid": bool, "explanation": ".."}`.
///
/// Answers that are not JSON are judged by whether they say "yes" or "true".
pub fn decode_verdict(raw: &str) -> HopVerdict {
    let body = strip_code_fence(raw);

    match serde_json::from_str::<Value>(body) {
        Ok(value) => {
            let valid = value.get("valid").and_then(Value::as_bool) == Some(true);
            let explanation = value
                .get("explanation")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or("No explanation provided")
                .to_string();
            HopVerdict { valid, explanation }
        }
        Err(_) => {
            let lower = body.to_lowercase();
            let valid = lower.contains("yes") || lower.contains("true");
            let explanation = if valid {
                "Connection accepted"
            } else {
                "No clear connection found"
            };
            HopVerdict {
                valid,
                explanation: explanation.to_string(),
            }
        }
    }
}

/// First word of the answer, letters only.
pub fn decode_hint(raw: &str) -> Result<String, String> {
    let first = raw.trim().split_whitespace().next().unwrap_or("");
    let hint: String = first
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect::<String>()
        .to_lowercase();

    if hint.is_empty() {
        Err(format!("Invalid hint received: {:?}", raw.trim()))
    } else {
        Ok(hint)
    }
}

/// Decode a JSON array of words. Length is not checked here.
pub fn decode_chain(raw: &str) -> Result<Vec<String>, String> {
    let value: Value = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| format!("Invalid JSON chain: {}", e))?;

    let Value::Array(items) = value else {
        return Err("Chain must be a JSON array".to_string());
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(word) => Ok(word),
            other => Err(format!("Chain entries must be strings, got {}", other)),
        })
        .collect()
}
