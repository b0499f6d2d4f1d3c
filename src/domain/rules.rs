//! Format rules for usernames, passwords and cell phone numbers

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Characters accepted as the "special character" of a password
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{};:'\",.<>/?\\|`~";

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// `+` followed by country code and subscriber number, 12 characters in total
static CELL_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{11}$").expect("cell phone pattern compiles"));

/// A username is 2 to 5 characters with exactly one underscore after a non-empty prefix.
pub fn check_username(username: &str) -> bool {
    let len = username.chars().count();
    if !(2..=5).contains(&len) {
        return false;
    }

    match username.split_once('_') {
        Some((prefix, suffix)) => !prefix.is_empty() && !suffix.contains('_'),
        None => false,
    }
}

/// A password needs 8+ characters, an uppercase letter, a digit and a special character.
pub fn check_password_complexity(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

pub fn check_cell_phone_number(cellphone: &str) -> bool {
    CELL_PHONE.is_match(cellphone)
}
