use std::sync::LazyLock;

use regex::Regex;

use crate::macros::nutype_string;

/// Matches the addresses an HTML5 `<input type="email">` accepts.
pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+",
        r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    ))
    .unwrap()
});

nutype_string!(EmailAddress(validate(regex = EMAIL_ADDRESS_REGEX)));
