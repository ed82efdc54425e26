/// `true` only when the trimmed, lower-cased value is exactly `yes`.
pub fn parse_yes_flag(value: &str) -> bool {
    value.trim().to_lowercase() == "yes"
}

#[cfg(test)]
mod tests {
    use super::parse_yes_flag;

    #[test]
    fn test_yes_variants() {
        assert!(parse_yes_flag("yes"));
        assert!(parse_yes_flag(" YES "));
        assert!(parse_yes_flag("Yes"));
    }

    #[test]
    fn test_other_values_are_false() {
        for v in ["", "no", "y", "true", "1", "yes please", "on"] {
            assert!(!parse_yes_flag(v), "value: {:?}", v);
        }
    }
}
