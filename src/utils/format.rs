/// Format a USD amount the way the dashboard has always shown it: a `$`
/// prefix and the shortest decimal form of the number (`100`, `95.5`, `-5`).
///
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent form
/// with an explicit exponent sign (`1e+21`, `1.5e-7`).
pub fn format_usd(amount: f64) -> String {
    // Avoid printing "-0" for a negative zero
    let amount = if amount == 0.0 { 0.0 } else { amount };
    let magnitude = amount.abs();

    if magnitude.is_finite() && (magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6)) {
        let formatted = format!("{:e}", amount);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("${}e+{}", mantissa, exponent)
            }
            _ => format!("${}", formatted),
        };
    }

    format!("${}", amount)
}

/// Shorten an identifier to its first `len` characters followed by `...`
///
/// Purely cosmetic: two ids sharing a prefix produce the same label.
pub fn truncate_id(id: &str, len: usize) -> String {
    let prefix: String = id.chars().take(len).collect();
    format!("{}...", prefix)
}

/// Escape text for use in HTML element content and quoted attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Turn a free-form label into a single CSS class token
pub fn css_token(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(100.0), "$100");
        assert_eq!(format_usd(95.5), "$95.5");
        assert_eq!(format_usd(-5.0), "$-5");
        assert_eq!(format_usd(-0.0), "$0");
        assert_eq!(format_usd(0.1 + 0.2), "$0.30000000000000004");
    }

    #[test]
    fn test_format_usd_exponent_range() {
        assert_eq!(format_usd(1e21), "$1e+21");
        assert_eq!(format_usd(-2e22), "$-2e+22");
        assert_eq!(format_usd(1.5e-7), "$1.5e-7");
        assert_eq!(format_usd(123456789012345680000.0), "$123456789012345680000");
        assert_eq!(format_usd(0.000001), "$0.000001");
    }

    #[test]
    fn test_truncate_id() {
        assert_eq!(truncate_id("abcdef1234567890", 8), "abcdef12...");
        assert_eq!(truncate_id("abc", 8), "abc...");
        assert_eq!(truncate_id("ééééééééé", 8), "éééééééé...");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<img src=x onerror="alert('1')">&"#),
            "&lt;img src=x onerror=&quot;alert(&#39;1&#39;)&quot;&gt;&amp;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_css_token() {
        assert_eq!(css_token("completed"), "completed");
        assert_eq!(css_token("in progress\"><b"), "in-progress---b");
    }
}
