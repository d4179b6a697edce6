//! Number formatting for table cells.

/// Format a real as its shortest round-tripping decimal, always with a decimal point.
pub fn format_real(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

/// Round to `digits` fractional digits, half away from zero, on the shortest decimal
/// representation of `value`.
///
/// Rounding the decimal text rather than the binary value makes `0.0012345` round to
/// `0.001235`, as a reader of the report would expect.
pub fn round_half_up(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // f64 Display never uses exponent notation.
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part.as_bytes().get(digits).is_some_and(|&b| b >= b'5');
    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value.is_sign_negative() && kept.iter().any(|&d| d != 0) {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|d| char::from(b'0' + d)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(10.5), "10.5");
        assert_eq!(format_real(13.0), "13.0");
        assert_eq!(format_real(0.0012), "0.0012");
        assert_eq!(format_real(-120000.0), "-120000.0");
    }

    #[test]
    fn test_round_half_up_area_precision() {
        assert_eq!(round_half_up(10.12345, 3), "10.123");
        assert_eq!(round_half_up(13.75, 3), "13.750");
        assert_eq!(round_half_up(2.0005, 3), "2.001");
        assert_eq!(round_half_up(123.4567, 3), "123.457");
    }

    #[test]
    fn test_round_half_up_power_precision() {
        assert_eq!(round_half_up(0.0012345, 6), "0.001235");
        assert_eq!(round_half_up(0.0012, 6), "0.001200");
        assert_eq!(round_half_up(12.4, 6), "12.400000");
        assert_eq!(round_half_up(0.00000015, 6), "0.000000");
    }

    #[test]
    fn test_round_half_up_carries() {
        assert_eq!(round_half_up(9.9995, 3), "10.000");
        assert_eq!(round_half_up(0.9999995, 6), "1.000000");
        assert_eq!(round_half_up(99.5, 0), "100");
    }

    #[test]
    fn test_round_half_up_negative() {
        assert_eq!(round_half_up(-1.2345, 3), "-1.235");
        assert_eq!(round_half_up(-0.0001, 3), "0.000");
    }
}
