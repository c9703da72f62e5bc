//! TeX dimensions
//!
//! The parser never converts sizes; it only checks that the unit is one TeX
//! knows and passes the measurement through.

/// A number with a unit, e.g. `1.5em`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Measurement<T>
where
    T: AsRef<str>,
{
    /// Signed value.
    pub number: f64,
    /// Two-letter unit such as `em`, `pt` or `mu`.
    pub unit: T,
}

/// Measurement with an owned unit, as parsed from input.
pub type MeasurementOwned = Measurement<String>;

/// Points per unit for the absolute units.
fn pt_per_unit(unit: &str) -> Option<f64> {
    match unit {
        "pt" => Some(1.0),
        "mm" => Some(7227.0 / 2540.0),
        "cm" => Some(7227.0 / 254.0),
        "in" => Some(72.27),
        "bp" | "px" => Some(803.0 / 800.0),
        "pc" => Some(12.0),
        "dd" => Some(1238.0 / 1157.0),
        "cc" => Some(14856.0 / 1157.0),
        "nd" => Some(685.0 / 642.0),
        "nc" => Some(1370.0 / 107.0),
        "sp" => Some(1.0 / 65536.0),
        _ => None,
    }
}

/// Whether `unit` is an absolute unit or one of the font-relative `em`,
/// `ex` and `mu`.
pub fn valid_unit_str<T>(unit: T) -> bool
where
    T: AsRef<str>,
{
    pt_per_unit(unit.as_ref()).is_some() || matches!(unit.as_ref(), "ex" | "em" | "mu")
}

/// Whether the unit of `measurement` is valid.
pub fn valid_unit<T>(measurement: &Measurement<T>) -> bool
where
    T: AsRef<str>,
{
    valid_unit_str(&measurement.unit)
}

/// Splits a size such as `-1.5 em` into sign, magnitude and unit.
///
/// Accepts an optional sign, digits with an optional fraction (or a bare
/// fraction like `.5`), optional spaces, then exactly two letters. The whole
/// string must match, apart from surrounding spaces. Returns `None` when it
/// does not.
#[must_use]
pub fn parse_measurement(text: &str) -> Option<MeasurementOwned> {
    let s = text.trim_matches(' ');
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let rest = rest.trim_start_matches(' ');

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let mut num_len = int_len;
    if rest.as_bytes().get(num_len) == Some(&b'.') {
        let frac_len = rest[num_len + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if int_len == 0 && frac_len == 0 {
            return None;
        }
        num_len += 1 + frac_len;
    } else if int_len == 0 {
        return None;
    }

    let unit = rest[num_len..].trim_start_matches(' ');
    if unit.len() != 2 || !unit.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }

    let magnitude: f64 = rest[..num_len].parse().ok()?;
    Some(Measurement {
        number: if negative { -magnitude } else { magnitude },
        unit: unit.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_units() {
        for unit in ["pt", "mm", "cm", "in", "bp", "px", "pc", "dd", "cc", "nd", "nc", "sp", "em", "ex", "mu"] {
            assert!(valid_unit_str(unit), "{unit}");
        }
        assert!(!valid_unit_str("xx"));
        assert!(!valid_unit(&Measurement {
            number: 1.0,
            unit: "km",
        }));
    }

    #[test]
    fn test_parse_measurement() {
        assert_eq!(
            parse_measurement("-1.5em"),
            Some(Measurement {
                number: -1.5,
                unit: "em".to_owned()
            })
        );
        assert_eq!(parse_measurement(" + .5 ex ").map(|m| m.number), Some(0.5));
        assert_eq!(parse_measurement("3.pt").map(|m| m.number), Some(3.0));
        assert_eq!(parse_measurement("12 mu").map(|m| m.unit), Some("mu".to_owned()));
    }

    #[test]
    fn test_parse_measurement_rejects() {
        assert_eq!(parse_measurement("em"), None);
        assert_eq!(parse_measurement("."), None);
        assert_eq!(parse_measurement("1e"), None);
        assert_eq!(parse_measurement("1emm"), None);
        assert_eq!(parse_measurement("1EM"), None);
    }
}
