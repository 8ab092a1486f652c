pub mod admin;
pub mod cart;
pub mod members;

/// Collapse runs of whitespace and strip control characters from a
/// single-line field.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Strip control characters (newlines excepted) from a multi-line field.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|ch| !ch.is_control() || *ch == '\n')
        .collect()
}

/// Derive a URL slug from a display name: lowercase ASCII alphanumerics with
/// single dashes between words.
pub(crate) fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut previous_dash = false;

    for ch in value.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            previous_dash = false;
        } else if !previous_dash && !slug.is_empty() {
            slug.push('-');
            previous_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Parse a decimal price string (`"2.50"`, `"3"`, `".5"`) into integer cents.
/// Rejects negatives, more than two fractional digits and anything
/// non-numeric instead of letting a NaN-equivalent through.
pub(crate) fn parse_price_cents(value: &str) -> Option<i32> {
    let trimmed = value.trim();

    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return None;
    }

    if !whole.chars().all(|ch| ch.is_ascii_digit()) || !frac.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }

    let whole_cents = if whole.is_empty() {
        0i32
    } else {
        whole.parse::<i32>().ok()?.checked_mul(100)?
    };

    let frac_cents = match frac.len() {
        0 => 0,
        1 => frac.parse::<i32>().ok()? * 10,
        2 => frac.parse::<i32>().ok()?,
        _ => return None,
    };

    whole_cents.checked_add(frac_cents)
}

/// Parse a non-negative integer quantity from a text input.
pub(crate) fn parse_non_negative_int(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok().filter(|parsed| *parsed >= 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_cents_accepts_common_shapes() {
        assert_eq!(parse_price_cents("2.50"), Some(250));
        assert_eq!(parse_price_cents("3"), Some(300));
        assert_eq!(parse_price_cents("0.05"), Some(5));
        assert_eq!(parse_price_cents(".5"), Some(50));
        assert_eq!(parse_price_cents(" 12.99 "), Some(1299));
    }

    #[test]
    fn parse_price_cents_rejects_garbage() {
        assert_eq!(parse_price_cents(""), None);
        assert_eq!(parse_price_cents("."), None);
        assert_eq!(parse_price_cents("abc"), None);
        assert_eq!(parse_price_cents("-1"), None);
        assert_eq!(parse_price_cents("1.999"), None);
        assert_eq!(parse_price_cents("2,50"), None);
        assert_eq!(parse_price_cents("1e3"), None);
    }

    #[test]
    fn parse_non_negative_int_rejects_negatives_and_garbage() {
        assert_eq!(parse_non_negative_int("10"), Some(10));
        assert_eq!(parse_non_negative_int(" 0 "), Some(0));
        assert_eq!(parse_non_negative_int("-3"), None);
        assert_eq!(parse_non_negative_int("ten"), None);
        assert_eq!(parse_non_negative_int("2.5"), None);
    }

    #[test]
    fn slugify_produces_url_safe_names() {
        assert_eq!(slugify("Choco Bar"), "choco-bar");
        assert_eq!(slugify("  Sour  Worms! "), "sour-worms");
        assert_eq!(slugify("Liquorice & Co."), "liquorice-co");
    }

    #[test]
    fn sanitize_inline_text_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  Choco \t Bar \n"), "Choco Bar");
        assert_eq!(sanitize_inline_text("\u{7}plain"), "plain");
    }
}
