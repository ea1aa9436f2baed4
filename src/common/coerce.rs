// src/common/coerce.rs

use serde_json::Value;

// Conversões "tolerantes": as linhas de relatório chegam com números como string,
// número, null ou simplesmente ausentes. Nada aqui falha, o pior caso é 0.

/// Converte um valor solto em `f64`. Strings usam o prefixo numérico mais longo
/// ("12.5kg" -> 12.5). Qualquer outra coisa, ou resultado não finito, vira 0.
pub fn coerce_f64(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_float(s),
        _ => None,
    };

    parsed.map(finite_or_zero).unwrap_or(0.0)
}

/// Somas podem estourar mesmo com parcelas finitas; `inf`/`NaN` viram 0 para
/// o JSON continuar numérico.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Converte um valor solto em inteiro. Números fracionários são truncados e
/// strings usam apenas o prefixo inteiro ("5.7" -> 5).
pub fn coerce_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|v| v.is_finite()).map(|v| v.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => leading_integer(s).unwrap_or(0),
        _ => 0,
    }
}

/// Rótulo de agrupamento. `None` para ausente, vazio ou composto (quem chama
/// decide o sentinela, ex: "Uncategorized").
pub fn coerce_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        // 5.0 vira "5", como o front-end exibe
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => Some(f.to_string()),
            _ => Some(n.to_string()),
        },
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = sign_len(bytes);
    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        digits += frac_end - (end + 1);
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let exp_start = end + 1 + sign_len(&bytes[end + 1..]);
        let exp_end = skip_digits(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn leading_integer(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let start = sign_len(bytes);
    let end = skip_digits(bytes, start);
    if end == start {
        return None;
    }

    s[..end].parse::<i64>().ok()
}

fn sign_len(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    }
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn float_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_f64(&json!(12.5)), 12.5);
        assert_eq!(coerce_f64(&json!("100")), 100.0);
        assert_eq!(coerce_f64(&json!("  -3.25")), -3.25);
        assert_eq!(coerce_f64(&json!(".5")), 0.5);
        assert_eq!(coerce_f64(&json!("1e3")), 1000.0);
    }

    #[test]
    fn float_uses_leading_numeric_prefix() {
        assert_eq!(coerce_f64(&json!("19.99 USD")), 19.99);
        assert_eq!(coerce_f64(&json!("7.")), 7.0);
        assert_eq!(coerce_f64(&json!("2e")), 2.0);
    }

    #[test]
    fn float_defaults_to_zero() {
        assert_eq!(coerce_f64(&json!("abc")), 0.0);
        assert_eq!(coerce_f64(&json!("")), 0.0);
        assert_eq!(coerce_f64(&json!("-")), 0.0);
        assert_eq!(coerce_f64(&Value::Null), 0.0);
        assert_eq!(coerce_f64(&json!(true)), 0.0);
        assert_eq!(coerce_f64(&json!([1, 2])), 0.0);
        assert_eq!(coerce_f64(&json!("1e400")), 0.0);
    }

    #[test]
    fn integer_truncates_and_defaults() {
        assert_eq!(coerce_i64(&json!("5")), 5);
        assert_eq!(coerce_i64(&json!("5.7")), 5);
        assert_eq!(coerce_i64(&json!(" -2")), -2);
        assert_eq!(coerce_i64(&json!(9.9)), 9);
        assert_eq!(coerce_i64(&json!("late")), 0);
        assert_eq!(coerce_i64(&Value::Null), 0);
    }

    #[test]
    fn label_rejects_empty_and_composite_values() {
        assert_eq!(coerce_label(&json!("Mug")), Some("Mug".to_string()));
        assert_eq!(coerce_label(&json!(42)), Some("42".to_string()));
        assert_eq!(coerce_label(&json!("")), None);
        assert_eq!(coerce_label(&Value::Null), None);
        assert_eq!(coerce_label(&json!({"a": 1})), None);
    }

    #[test]
    fn label_renders_whole_floats_without_fraction() {
        assert_eq!(coerce_label(&json!(5.0)), Some("5".to_string()));
        assert_eq!(coerce_label(&json!(2.5)), Some("2.5".to_string()));
        assert_eq!(coerce_label(&json!(-3.0)), Some("-3".to_string()));
        assert_eq!(coerce_label(&json!(7)), Some("7".to_string()));
    }

    #[test]
    fn finite_or_zero_drops_overflow() {
        assert_eq!(finite_or_zero(1e308 + 1e308), 0.0);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(-4.5), -4.5);
    }
}
