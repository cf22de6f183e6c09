//! Lenient deserializers for fields the REST services send either as JSON
//! numbers or as strings (`"wattage": 340` vs `"wattage": "340"`).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Renders a JSON scalar as the string a user would type into a filter.
///
/// Integral floats lose their fraction (`340.0` → `"340"`), empty strings
/// and `null` become `None`.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    Some(format!("{}", f as i64))
                } else {
                    Some(f.to_string())
                }
            } else {
                Some(n.to_string())
            }
        }
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string))
}

/// Quantities occasionally arrive as `"12"`; anything unparsable counts as zero.
pub fn u32_lenient<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .map(|v| v.min(u32::MAX as u64) as u32)
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u32))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_string_or_number")]
        wattage: Option<String>,
        #[serde(default, deserialize_with = "u32_lenient")]
        quantity: u32,
    }

    #[test]
    fn test_scalar_to_string() {
        assert_eq!(scalar_to_string(&json!(340)), Some("340".to_string()));
        assert_eq!(scalar_to_string(&json!(340.0)), Some("340".to_string()));
        assert_eq!(scalar_to_string(&json!(12.5)), Some("12.5".to_string()));
        assert_eq!(scalar_to_string(&json!(" Mono Perc ")), Some("Mono Perc".to_string()));
        assert_eq!(scalar_to_string(&json!("")), None);
        assert_eq!(scalar_to_string(&json!(null)), None);
    }

    #[test]
    fn test_lenient_fields() {
        let p: Probe = serde_json::from_str(r#"{"wattage": 330, "quantity": "7"}"#).unwrap();
        assert_eq!(p.wattage.as_deref(), Some("330"));
        assert_eq!(p.quantity, 7);

        let p: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(p.wattage, None);
        assert_eq!(p.quantity, 0);

        let p: Probe = serde_json::from_str(r#"{"wattage": null, "quantity": "n/a"}"#).unwrap();
        assert_eq!(p.wattage, None);
        assert_eq!(p.quantity, 0);
    }
}
