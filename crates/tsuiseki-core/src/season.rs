//! Season suffix extraction from free-text show titles.

use regex::Regex;
use std::sync::LazyLock;

/// Trailing "Season 2" / "S2" suffix, preceded by whitespace.
static RE_SEASON_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:Season\s+(\d+)|S(\d+))$").unwrap());

/// Split a show title into its base name and a normalized season label.
///
/// `"Attack on Titan Season 2"` and `"Attack on Titan S2"` both split
/// into `("Attack on Titan", "Season 02")`. Titles without a trailing
/// season marker keep their full name and default to `"Season 01"`.
pub fn split_season(title: &str) -> (String, String) {
    let Some(caps) = RE_SEASON_SUFFIX.captures(title) else {
        return (title.to_string(), "Season 01".to_string());
    };

    let whole = caps.get(0).expect("capture 0 always exists");
    let digits = caps
        .get(1)
        .or_else(|| caps.get(2))
        .expect("the suffix always carries a number")
        .as_str();

    let base = title[..whole.start()].trim_end().to_string();
    (base, format!("Season {digits:0>2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_word() {
        assert_eq!(
            split_season("Attack on Titan Season 2"),
            ("Attack on Titan".into(), "Season 02".into())
        );
        assert_eq!(
            split_season("Foo Season 3"),
            ("Foo".into(), "Season 03".into())
        );
    }

    #[test]
    fn test_s_suffix() {
        assert_eq!(split_season("Foo S12"), ("Foo".into(), "Season 12".into()));
        assert_eq!(split_season("Foo s2"), ("Foo".into(), "Season 02".into()));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            split_season("Foo SEASON 4"),
            ("Foo".into(), "Season 04".into())
        );
    }

    #[test]
    fn test_no_suffix_defaults() {
        assert_eq!(split_season("Foo"), ("Foo".into(), "Season 01".into()));
        // "S" glued to the name is not a season marker.
        assert_eq!(
            split_season("FooS2"),
            ("FooS2".into(), "Season 01".into())
        );
    }

    #[test]
    fn test_marker_mid_title_is_ignored() {
        assert_eq!(
            split_season("Season 2 of Something"),
            ("Season 2 of Something".into(), "Season 01".into())
        );
    }

    #[test]
    fn test_padding_keeps_wide_numbers() {
        assert_eq!(
            split_season("Foo Season 12"),
            ("Foo".into(), "Season 12".into())
        );
        assert_eq!(
            split_season("Foo S105"),
            ("Foo".into(), "Season 105".into())
        );
        // Numbers wider than any integer type still come through intact.
        assert_eq!(
            split_season("Foo S99999999999"),
            ("Foo".into(), "Season 99999999999".into())
        );
    }

    #[test]
    fn test_extra_whitespace_is_stripped() {
        assert_eq!(
            split_season("Foo   Season 2"),
            ("Foo".into(), "Season 02".into())
        );
    }
}
