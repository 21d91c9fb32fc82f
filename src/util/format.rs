/// `1234567.891` -> `"1,234,567.89"`. Negative values keep their sign in front.
pub fn grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    let is_zero = formatted.chars().all(|ch| ch == '0' || ch == '.');
    if value.is_sign_negative() && !is_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn money(value: f64, currency: &str) -> String {
    format!("{} {currency}", grouped(value, 2))
}

pub fn money_per_tonne(value: f64, currency: &str) -> String {
    format!("{} {currency}/t", grouped(value, 2))
}

pub fn tonnes(value: f64) -> String {
    format!("{} t", grouped(value, 2))
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(grouped(999.0, 0), "999");
        assert_eq!(grouped(1000.0, 0), "1,000");
        assert_eq!(grouped(0.5, 2), "0.50");
    }

    #[test]
    fn keeps_sign_but_not_on_rounded_zero() {
        assert_eq!(grouped(-1346.0122, 2), "-1,346.01");
        assert_eq!(grouped(-0.001, 2), "0.00");
    }

    #[test]
    fn unit_suffixes() {
        assert_eq!(money(11831.0122, "€"), "11,831.01 €");
        assert_eq!(money_per_tonne(-5.7769, "€"), "-5.78 €/t");
        assert_eq!(tonnes(233.0), "233.00 t");
        assert_eq!(percent(-12.837), "-12.8%");
    }
}
