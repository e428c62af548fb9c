// Built-in patterns

use crate::ParameterError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern used by `email()` checks
pub const EMAIL: &str = "[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?";

/// Pattern used by `url()` checks
pub const URL: &str = r"^((ftp|http|https):\/\/)?(\S+(:\S*)?@)?((([1-9]\d?|1\d\d|2[01]\d|22[0-3])(\.(1?\d{1,2}|2[0-4]\d|25[0-5])){2}(?:\.([0-9]\d?|1\d\d|2[0-4]\d|25[0-4]))|((www\.)?)?(([a-z\x{00a1}-\x{ffff}0-9]+-?-?_?)*[a-z\x{00a1}-\x{ffff}0-9]+)(?:\.([a-z\x{00a1}-\x{ffff}]{2,}))?)|localhost)(:(\d{1,5}))?((\/|\?|#)[^\s]*)?$";

pub(crate) static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL).expect("email pattern compiles"));

pub(crate) static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(URL).expect("url pattern compiles"));

/// Compile a caller-supplied pattern.
pub fn compile(pattern: &str) -> Result<Regex, ParameterError> {
    Regex::new(pattern).map_err(|source| ParameterError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
