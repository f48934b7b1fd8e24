/// Normalizes a raw column name for pattern matching.
///
/// Lowercases, replaces every non-alphanumeric run with a single space, and
/// trims. `"PRICE (EGP)"` becomes `"price egp"`.
pub fn normalize_text(value: &str) -> String {
    let mut lowered = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            lowered.extend(ch.to_lowercase());
        } else {
            lowered.push(' ');
        }
    }
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::normalize_text;

    #[test]
    fn normalizes_case_and_punctuation() {
        assert_eq!(normalize_text("Unit-Code"), "unit code");
        assert_eq!(normalize_text("PRICE (EGP)"), "price egp");
        assert_eq!(normalize_text("  Area   m2 "), "area m2");
        assert_eq!(normalize_text("___"), "");
    }
}
