//! Plural-form selection.
//!
//! Different languages select among a different number of plural-form
//! templates, and the meaning of each positional index is specific to the
//! language family's rule. Polish and Russian share the same numeric
//! structure but conceptually distinct linguistic categories, so no
//! cross-language category enum is exposed; indices are documented per rule
//! below.
//!
//! The two Slavic rules exclude the 10..=19 band of `n % 100` from the 2-4
//! form: 22 takes the second form while 12 does not. Remainders use
//! `rem_euclid` so negative counts land in the same branches as the
//! non-negative arithmetic this table was written against.

/// Select the plural-form template for a count in a given language.
///
/// Returns `""` when `forms` is empty. A `forms` list shorter than the
/// language's rule requires degrades to `forms[0]`.
///
/// # Examples
///
/// ```
/// use lokal::select_form;
///
/// let en: Vec<String> = vec!["apple".into(), "apples".into()];
/// assert_eq!(select_form("en", 1, &en), "apple");
/// assert_eq!(select_form("en", 5, &en), "apples");
///
/// // Russian: counts ending in 1 (except 11) take the first form.
/// let ru: Vec<String> = vec!["яблоко".into(), "яблока".into(), "яблок".into()];
/// assert_eq!(select_form("ru", 21, &ru), "яблоко");
/// assert_eq!(select_form("ru", 11, &ru), "яблок");
/// ```
pub fn select_form<'a>(language: &str, n: i64, forms: &'a [String]) -> &'a str {
    let Some(first) = forms.first() else {
        return "";
    };
    let first = first.as_str();

    match language {
        // Chinese, Japanese, Korean, Turkish: no plural distinction.
        // forms[0] is the only grammatical form.
        "zh" | "ja" | "ko" | "tr" => first,

        // Polish: forms[0] = exactly 1, forms[1] = counts ending in 2-4
        // outside the teens band, forms[2] = everything else (including 0).
        "pl" => {
            if forms.len() < 3 {
                return first;
            }
            if n == 1 {
                forms[0].as_str()
            } else if ends_in_two_to_four(n) {
                forms[1].as_str()
            } else {
                forms[2].as_str()
            }
        }

        // Russian: forms[0] = counts ending in 1 except 11 (1, 21, 31...),
        // forms[1] = counts ending in 2-4 outside the teens band (2-4,
        // 22-24...), forms[2] = everything else (0, 5-20, 25-30...).
        "ru" => {
            if forms.len() < 3 {
                return first;
            }
            if n.rem_euclid(10) == 1 && n.rem_euclid(100) != 11 {
                forms[0].as_str()
            } else if ends_in_two_to_four(n) {
                forms[1].as_str()
            } else {
                forms[2].as_str()
            }
        }

        // French: forms[0] = 0 and 1, forms[1] = everything above.
        "fr" => {
            if n <= 1 {
                first
            } else {
                second_or_first(forms)
            }
        }

        // Everything else (English, German, Spanish, Portuguese...):
        // forms[0] = exactly 1, forms[1] = everything else.
        _ => {
            if n == 1 {
                first
            } else {
                second_or_first(forms)
            }
        }
    }
}

/// Number of plural forms the language's rule selects from.
///
/// Used by validation to flag entries that a count could never fully reach.
pub fn required_form_count(language: &str) -> usize {
    match language {
        "zh" | "ja" | "ko" | "tr" => 1,
        "pl" | "ru" => 3,
        _ => 2,
    }
}

/// The 2-4 band shared by the Polish and Russian rules: last digit 2-4,
/// excluding counts whose last two digits land in 10..=19.
fn ends_in_two_to_four(n: i64) -> bool {
    let last_digit = n.rem_euclid(10);
    let last_two = n.rem_euclid(100);
    (2..=4).contains(&last_digit) && !(10..=19).contains(&last_two)
}

/// Second form where present, first form for single-form lists.
fn second_or_first(forms: &[String]) -> &str {
    forms.get(1).unwrap_or(&forms[0]).as_str()
}
