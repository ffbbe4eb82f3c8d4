use anyhow::bail;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a rupee amount such as `1299`, `1299.5` or `1,299.50` into paise.
pub fn parse_rupees(raw: &str) -> anyhow::Result<i64> {
    let cleaned = raw.trim().trim_start_matches('₹').replace(',', "");
    let (whole, fraction) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));

    if whole.is_empty() || !whole.chars().all(|ch| ch.is_ascii_digit()) {
        bail!("invalid price '{raw}': expected rupees like 1299.50");
    }
    if fraction.len() > 2 || !fraction.chars().all(|ch| ch.is_ascii_digit()) {
        bail!("invalid price '{raw}': at most two decimal places");
    }

    let rupees: i64 = whole
        .parse()
        .map_err(|error| anyhow::anyhow!("invalid price '{raw}': {error}"))?;
    let paise = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>()? * 10,
        _ => fraction.parse::<i64>()?,
    };

    rupees
        .checked_mul(100)
        .and_then(|value| value.checked_add(paise))
        .ok_or_else(|| anyhow::anyhow!("invalid price '{raw}': too large"))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use skin_core::enums::{CartAction, SkinType};

    use super::{parse_date, parse_enum, parse_rupees};

    #[test]
    fn parses_snake_case_enum() {
        let skin_type: SkinType = parse_enum("combination", "skin type").expect("should parse");
        assert_eq!(skin_type, SkinType::Combination);
    }

    #[test]
    fn parse_enum_ignores_case() {
        let action: CartAction = parse_enum("Decrease", "action").expect("should parse");
        assert_eq!(action, CartAction::Decrease);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<CartAction>("double", "action").expect_err("should fail");
        assert!(err.to_string().contains("invalid action 'double'"));
    }

    #[test]
    fn parses_rupee_amounts() {
        assert_eq!(parse_rupees("1299").unwrap(), 129_900);
        assert_eq!(parse_rupees("1299.5").unwrap(), 129_950);
        assert_eq!(parse_rupees("1,299.05").unwrap(), 129_905);
        assert_eq!(parse_rupees("₹799").unwrap(), 79_900);
        assert_eq!(parse_rupees("0.99").unwrap(), 99);
    }

    #[test]
    fn rejects_bad_rupee_amounts() {
        for raw in ["", "-5", "12.345", "abc", ".50", "1.2x"] {
            assert!(parse_rupees(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2026-04-02", "date").unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, 2).unwrap()
        );
        let err = parse_date("02/04/2026", "date").expect_err("should fail");
        assert!(err.to_string().contains("invalid date '02/04/2026'"));
    }
}
