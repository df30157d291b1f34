//! Format validators shared by the domain modules.

/// Checks that a string looks like an email address.
///
/// Structural check only: one `@`, non-empty local part, and a domain
/// containing a dot that is neither its first nor last character. Full
/// RFC 5322 parsing is deliberately out of scope; the mail provider is
/// the final arbiter.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some(dot) = domain.find('.') else {
        return false;
    };

    dot > 0 && dot < domain.len() - 1
}

/// Checks that a string is a plausible phone number.
///
/// Accepts an optional leading `+` followed by 7 to 15 digits.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);

    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alice@example.com", true)]
    #[case("a.b+tag@sub.example.org", true)]
    #[case("no-at-sign.example.com", false)]
    #[case("@example.com", false)]
    #[case("alice@", false)]
    #[case("alice@nodot", false)]
    #[case("alice@.com", false)]
    #[case("alice@example.", false)]
    #[case("ali ce@example.com", false)]
    fn email_validation(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(input), expected);
    }

    #[rstest]
    #[case("0412345678", true)]
    #[case("+61412345678", true)]
    #[case("1234567", true)]
    #[case("123456789012345", true)]
    #[case("123456", false)]
    #[case("1234567890123456", false)]
    #[case("+", false)]
    #[case("04-1234-5678", false)]
    #[case("phone", false)]
    fn phone_validation(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_phone(input), expected);
    }
}
