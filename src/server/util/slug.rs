//! URL slug normalisation.

/// Converts free text into a URL-safe slug.
///
/// The text is lowercased and `&` is spelled out as `and`. Combining marks are dropped so
/// they do not split a word. Every run of characters outside
/// `[a-z0-9_]` (whitespace, punctuation, non-ASCII letters) becomes a single hyphen, and
/// hyphens at either end are removed. The result is a fixed point: slugifying a slug
/// returns it unchanged.
///
/// ```
/// use wayfarer::server::util::slug::slugify;
///
/// assert_eq!(slugify("Mt. Kilimanjaro & Beyond!"), "mt-kilimanjaro-and-beyond");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase().replace('&', "-and-");

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.chars() {
        // Combining marks, like the dot left by lowercasing `İ`, stay with their letter
        if ('\u{300}'..='\u{36f}').contains(&c) {
            continue;
        }
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spells_out_ampersands() {
        assert_eq!(slugify("Mt. Kilimanjaro & Beyond!"), "mt-kilimanjaro-and-beyond");
        assert_eq!(slugify("Bed&Breakfast"), "bed-and-breakfast");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(slugify("  Serengeti -- Migration   Safari  "), "serengeti-migration-safari");
        assert_eq!(slugify("a---b"), "a-b");
    }

    #[test]
    fn keeps_underscores_and_digits() {
        assert_eq!(slugify("Day_1: Arusha (2025)"), "day_1-arusha-2025");
    }

    #[test]
    fn drops_non_ascii_characters() {
        assert_eq!(slugify("Zanzibar Café"), "zanzibar-caf");
        assert_eq!(slugify("Ñandú"), "and");
    }

    #[test]
    fn drops_combining_marks_without_splitting_words() {
        assert_eq!(slugify("İstanbul stopover"), "istanbul-stopover");
        assert_eq!(slugify("Cafe\u{301} Tour"), "cafe-tour");
        assert_eq!(slugify("Lodge \u{301}Spa"), "lodge-spa");
    }

    #[test]
    fn empty_and_separator_only_input_yield_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("  !!  "), "");
        assert_eq!(slugify("&"), "and");
    }

    #[test]
    fn output_is_a_fixed_point() {
        let inputs = [
            "Mt. Kilimanjaro & Beyond!",
            "  --spaced-- ",
            "Über Lodge & Spa",
            "snake_case_title",
            "İstanbul stopover",
            "",
        ];

        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "input {input:?}");
        }
    }
}
