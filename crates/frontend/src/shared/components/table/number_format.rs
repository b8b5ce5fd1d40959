//! Утилиты форматирования чисел для таблиц

use rust_decimal::{Decimal, RoundingStrategy};

/// Форматирует число с разделителем тысяч (запятая) и двумя знаками после точки
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_thousands;
/// assert_eq!(format_thousands("1234567.89"), "1,234,567.89");
/// ```
pub fn format_thousands(plain: &str) -> String {
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (integer_part, decimal_part) = match digits.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (digits, None),
    };

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Цена с двумя знаками без валюты и разделителей, например `12.50`
pub fn price_text(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Цена для отображения: `$1,234.50`
pub fn format_price(value: Decimal) -> String {
    let text = price_text(value);
    match text.strip_prefix('-') {
        Some(abs) => format!("-${}", format_thousands(abs)),
        None => format!("${}", format_thousands(&text)),
    }
}

/// Фильтр колонки "Precio": сравнивает с текстом цены, `$` в начале игнорируется
pub fn price_matches(value: Decimal, filter: &str) -> bool {
    let filter = filter.trim();
    let filter = filter.strip_prefix('$').unwrap_or(filter).trim();
    filter.is_empty() || price_text(value).contains(filter)
}

/// Фильтр колонки "Stock"
pub fn stock_matches(stock: i32, filter: &str) -> bool {
    let filter = filter.trim();
    filter.is_empty() || stock.to_string().contains(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(dec("12.5")), "$12.50");
        assert_eq!(format_price(dec("1234.5")), "$1,234.50");
        assert_eq!(format_price(dec("1234567.891")), "$1,234,567.89");
        assert_eq!(format_price(dec("0")), "$0.00");
        assert_eq!(format_price(dec("-1234.5")), "-$1,234.50");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands("123"), "123");
        assert_eq!(format_thousands("1234"), "1,234");
        assert_eq!(format_thousands("-123456.7"), "-123,456.7");
    }

    #[test]
    fn test_price_filter_accepts_optional_dollar() {
        let price = dec("12.5");
        assert!(price_matches(price, "$12.50"));
        assert!(price_matches(price, "12.50"));
        assert!(price_matches(price, " $12 "));
        assert!(price_matches(price, ""));
        assert!(!price_matches(price, "$13"));
    }

    #[test]
    fn test_stock_filter() {
        assert!(stock_matches(120, "12"));
        assert!(stock_matches(120, ""));
        assert!(!stock_matches(7, "8"));
    }
}
