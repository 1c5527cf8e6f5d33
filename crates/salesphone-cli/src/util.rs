use anyhow::{anyhow, Result};
use serde_json::Value;

pub fn cell_text(value: Option<&Value>) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(Value::Array(_)) | Some(Value::Object(_)) => {
            Err(anyhow!("expected a string, number or null"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::cell_text;
    use serde_json::json;

    #[test]
    fn cell_text_renders_scalars() {
        assert_eq!(cell_text(None).expect("none"), None);
        assert_eq!(cell_text(Some(&json!(null))).expect("null"), None);
        assert_eq!(
            cell_text(Some(&json!("+1 212"))).expect("string").as_deref(),
            Some("+1 212")
        );
        assert_eq!(
            cell_text(Some(&json!(2125551234u64))).expect("number").as_deref(),
            Some("2125551234")
        );
    }

    #[test]
    fn cell_text_rejects_nested_values() {
        assert!(cell_text(Some(&json!(["212"]))).is_err());
        assert!(cell_text(Some(&json!({ "phone": "212" }))).is_err());
    }
}
