/// Keeps only the decimal digits of `text`, in order.
pub fn extract_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}
