/// Currency symbol followed by the shortest decimal form of the amount:
/// `20.0` prints as `₹20`, `9.5` as `₹9.5`.
pub fn format_price(currency: &str, amount: f64) -> String {
    format!("{}{}", currency, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts_have_no_decimals() {
        assert_eq!(format_price("₹", 20.0), "₹20");
        assert_eq!(format_price("$", 9.5), "$9.5");
        assert_eq!(format_price("", 0.0), "0");
    }
}
