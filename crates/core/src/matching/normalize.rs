//! Canonical text form for vehicle name comparison

/// Canonicalize a free-text name for comparison.
///
/// Lower-cases the input, drops every character that is not an ASCII letter,
/// digit, or whitespace, collapses whitespace runs to a single space, and
/// trims the ends. Case, punctuation, and spacing differences therefore never
/// affect matching.
///
/// # Examples
///
/// ```
/// use roadquest_core::matching::normalize::normalize;
///
/// assert_eq!(normalize("  RAV4  Hybrid-XLE! "), "rav4 hybridxle");
/// assert_eq!(normalize("Camry   SE"), "camry se");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let filtered: String = input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("GR-Supra 3.0!"), "grsupra 30");
        assert_eq!(normalize("Corolla (Hatchback)"), "corolla hatchback");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize("  Land\t Cruiser   1958  "), "land cruiser 1958");
    }

    #[test]
    fn is_idempotent() {
        for input in ["RAV4 Hybrid XLE", "  4Runner: TRD-Pro  ", "", "é à ü", "123 %$#"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(normalize("Café Racer"), "caf racer");
    }

    #[test]
    fn empty_and_symbol_only_inputs_become_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!@#$%"), "");
    }
}
