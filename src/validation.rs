use once_cell::sync::Lazy;
use regex::Regex;

// user@domain.tld where both sides allow word chars, dots and hyphens
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email regex compiles"));

// 10 to 15 chars of digits, spaces, hyphens, parentheses
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9 \-()]{10,15}$").expect("phone regex compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}
