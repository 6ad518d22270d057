// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use moncal_core::{MonthKey, StoreMode};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub fn arg_mode() -> Arg {
    arg!(--mode <MODE> "How days hold events, overrides the config file")
        .value_parser(value_parser!(StoreMode))
}

pub fn get_mode(matches: &ArgMatches) -> Option<StoreMode> {
    matches.get_one("mode").copied()
}

pub fn arg_month() -> Arg {
    arg!(--month <MONTH> "Month to open, as YYYY-MM. Defaults to the current month")
        .value_parser(|s: &str| s.parse::<MonthKey>())
}

pub fn get_month(matches: &ArgMatches) -> Option<MonthKey> {
    matches.get_one("month").copied()
}

/// Number of grapheme clusters in `s`.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Display width of the first `first_n` grapheme clusters of `s`.
pub fn unicode_width_of_slice(s: &str, first_n: usize) -> usize {
    s.graphemes(true).take(first_n).map(UnicodeWidthStr::width).sum()
}

/// Return the byte range of the grapheme cluster at index `g_idx` in `s`.
/// If out of bounds, returns None.
pub fn byte_range_of_grapheme_at(s: &str, g_idx: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(byte_start, g)| byte_start..byte_start + g.len())
}

/// Byte offset where grapheme `g_idx` starts, or the length of `s` past the end.
pub fn byte_index_of_grapheme(s: &str, g_idx: usize) -> usize {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    #[test]
    fn test_parse_mode_and_month_args() {
        let cmd = Command::new("test").arg(arg_mode()).arg(arg_month());
        let matches = cmd
            .try_get_matches_from(["test", "--mode", "single", "--month", "2024-02"])
            .unwrap();
        assert_eq!(get_mode(&matches), Some(StoreMode::Single));
        assert_eq!(get_month(&matches), Some(MonthKey::new(2024, 2).unwrap()));

        let cmd = Command::new("test").arg(arg_mode()).arg(arg_month());
        let matches = cmd.try_get_matches_from(["test"]).unwrap();
        assert_eq!(get_mode(&matches), None);
        assert_eq!(get_month(&matches), None);
    }

    #[test]
    fn test_reject_invalid_month_arg() {
        let cmd = Command::new("test").arg(arg_month());
        assert!(cmd.try_get_matches_from(["test", "--month", "2024-13"]).is_err());
    }

    #[test]
    fn test_unicode_width_ascii_only() {
        let s = "hello world";
        assert_eq!(unicode_width_of_slice(s, 100), 11);
        assert_eq!(unicode_width_of_slice(s, 5), 5);
        assert_eq!(unicode_width_of_slice(s, 0), 0);
    }

    #[test]
    fn test_unicode_width_mixed_english_chinese() {
        let s = "abc中文def";
        // "abc" + "中"
        assert_eq!(unicode_width_of_slice(s, 4), "abc中".width());
        assert_eq!(unicode_width_of_slice(s, 8), s.width());
        assert_eq!(unicode_width_of_slice(s, 9), s.width());
    }

    #[test]
    fn test_unicode_width_emoji() {
        let s = "a😀b";
        assert_eq!(unicode_width_of_slice(s, 2), "a😀".width());
    }

    #[test]
    fn test_byte_range_chinese_multibyte() {
        let s = "a中b";
        // UTF-8: 'a' = 1 byte, '中' = 3 bytes, 'b' = 1 byte
        assert_eq!(byte_range_of_grapheme_at(s, 0), Some(0..1));
        assert_eq!(byte_range_of_grapheme_at(s, 1), Some(1..4));
        assert_eq!(byte_range_of_grapheme_at(s, 2), Some(4..5));
        assert_eq!(byte_range_of_grapheme_at(s, 3), None);
    }

    #[test]
    fn test_byte_range_combining_mark() {
        // 'e' + combining acute accent = 1 grapheme cluster
        let s = "e\u{0301}b";
        assert_eq!(byte_range_of_grapheme_at(s, 0), Some(0..3));
        assert_eq!(byte_range_of_grapheme_at(s, 1), Some(3..4));
        assert_eq!(byte_range_of_grapheme_at(s, 2), None);
        assert_eq!(grapheme_count(s), 2);
    }

    #[test]
    fn test_byte_index_of_grapheme() {
        let s = "a中b";
        assert_eq!(byte_index_of_grapheme(s, 0), 0);
        assert_eq!(byte_index_of_grapheme(s, 2), 4);
        assert_eq!(byte_index_of_grapheme(s, 3), s.len());
        assert_eq!(byte_index_of_grapheme("", 0), 0);
    }
}
