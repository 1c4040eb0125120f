//! Texto de un número JSON a partir de su literal original.
//!
//! - Literales enteros (sin `.` ni exponente): dígitos exactos, sin límite de
//!   tamaño. `-0` se escribe `0`.
//! - Literales con `.` o exponente: se leen como `f64` y se escriben con los
//!   dígitos más cortos que identifican al valor, siempre con al menos un
//!   decimal. Si `1e-3 <= |x| < 1e7` en notación plana (`3.5`, `100.0`,
//!   `0.001`); si no, con mantisa y `E` mayúscula (`1.0E10`, `1.5E-7`).
//!   Infinitos: `Infinity` / `-Infinity`.

/// Convierte el literal de un número JSON (tal como aparece en el documento).
pub fn number_text(literal: &str) -> String {
    if literal.contains(['.', 'e', 'E']) {
        match literal.parse::<f64>() {
            Ok(x) => float_text(x),
            Err(_) => literal.to_string(),
        }
    } else {
        integer_text(literal)
    }
}

fn integer_text(literal: &str) -> String {
    match literal.strip_prefix('-') {
        Some(digits) if digits.bytes().all(|b| b == b'0') => "0".to_string(),
        _ => literal.to_string(),
    }
}

/// Texto de un `f64` con dígitos mínimos y al menos un decimal.
pub fn float_text(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    let sign = if x.is_sign_negative() { "-" } else { "" };
    if x.is_infinite() {
        return format!("{sign}Infinity");
    }
    if x == 0.0 {
        return format!("{sign}0.0");
    }

    let (digits, exp) = shortest_digits(x.abs());
    let abs = x.abs();
    if (1e-3..1e7).contains(&abs) {
        format!("{sign}{}", plain(&digits, exp))
    } else {
        let (head, tail) = digits.split_at(1);
        let tail = if tail.is_empty() { "0" } else { tail };
        format!("{sign}{head}.{tail}E{exp}")
    }
}

/// Dígitos significativos (sin ceros finales) y exponente decimal de `x > 0`.
///
/// Cuando basta un dígito se elige el decimal de dos dígitos más cercano a
/// `x`, que puede diferir del de un dígito (p. ej. `4.9E-324`).
fn shortest_digits(x: f64) -> (String, i32) {
    let mut sci = format!("{x:e}");
    if !sci.contains('.') {
        sci = format!("{x:.1e}");
    }
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    (digits, exp)
}

/// Notación plana para `-3 <= exp <= 6`.
fn plain(digits: &str, exp: i32) -> String {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("0.{zeros}{digits}");
    }
    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{digits}{zeros}.0")
    } else {
        let (int, frac) = digits.split_at(int_len);
        format!("{int}.{frac}")
    }
}
