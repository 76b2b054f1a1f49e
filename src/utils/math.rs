use serde_json::Value;

/// The provider reports numeric fields as either JSON numbers or strings
pub fn lenient_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_lenient_f64() {
        assert_eq!(lenient_f64(&json!(2.85)), Some(2.85));
        assert_eq!(lenient_f64(&json!(3)), Some(3.0));
        assert_eq!(lenient_f64(&json!("2.85")), Some(2.85));
        assert_eq!(lenient_f64(&json!(" 2.85 ")), Some(2.85));
        assert_eq!(lenient_f64(&json!("-1.0")), Some(-1.0));
        assert_eq!(lenient_f64(&json!("")), None);
        assert_eq!(lenient_f64(&json!("n/a")), None);
        assert_eq!(lenient_f64(&json!(null)), None);
        assert_eq!(lenient_f64(&json!([1.0])), None);
        assert_eq!(lenient_f64(&json!("inf")), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 3.0, 4.0]), Some(3.0));
        assert_eq!(mean(&[1.5]), Some(1.5));
    }
}
