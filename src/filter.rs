//! Row filters used as predicates by checked mutations.

use crate::proto::v1::{
    row_filter::{Chain, Filter},
    RowFilter,
};

/// Escape `literal` so an RE2 pattern matches exactly those bytes.
///
/// ASCII bytes other than `[A-Za-z0-9_]` get a backslash, NUL becomes `\x00`,
/// bytes `>= 0x80` pass through unchanged.
pub fn quote_regex(literal: &[u8]) -> Vec<u8> {
    let mut quoted = Vec::with_capacity(literal.len() * 2);
    for &byte in literal {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => quoted.push(byte),
            0x80..=0xff => quoted.push(byte),
            0x00 => quoted.extend_from_slice(b"\\x00"),
            _ => {
                quoted.push(b'\\');
                quoted.push(byte);
            }
        }
    }
    quoted
}

/// Filter selecting the latest cell of `family:qualifier`, optionally only
/// when its value equals `value`.
pub fn latest_cell_predicate(family: &[u8], qualifier: &[u8], value: Option<&[u8]>) -> RowFilter {
    let mut filters = vec![
        filter(Filter::FamilyNameRegexFilter(quote_regex(family))),
        filter(Filter::ColumnQualifierRegexFilter(quote_regex(qualifier))),
        filter(Filter::CellsPerColumnLimitFilter(1)),
    ];
    if let Some(value) = value {
        filters.push(filter(Filter::ValueRegexFilter(quote_regex(value))));
    }

    filter(Filter::Chain(Chain { filters }))
}

fn filter(inner: Filter) -> RowFilter {
    RowFilter {
        filter: Some(inner),
    }
}

#[cfg(test)]
mod tests {
    use regex::bytes::Regex;

    use super::*;

    fn matches_exactly(literal: &[u8]) -> bool {
        let quoted = String::from_utf8(quote_regex(literal)).expect("ascii pattern");
        let re = Regex::new(&format!("(?-u)^{quoted}$")).expect("valid pattern");
        re.is_match(literal)
    }

    #[test]
    fn word_bytes_are_kept() {
        assert_eq!(quote_regex(b"abc_XYZ_019"), b"abc_XYZ_019".to_vec());
    }

    #[test]
    fn metacharacters_are_escaped() {
        assert_eq!(quote_regex(b"a.b*"), b"a\\.b\\*".to_vec());
        assert_eq!(quote_regex(b"\0"), b"\\x00".to_vec());
        assert_eq!(quote_regex(&[0xc3, 0xa9]), vec![0xc3, 0xa9]);
    }

    #[test]
    fn quoted_literals_match_themselves_only() {
        for literal in [
            &b"plain"[..],
            b"v1.0",
            b"(a|b)+?",
            b"[x]{2}^$",
            b"back\\slash",
            b"nul\0byte",
        ] {
            assert!(matches_exactly(literal), "{literal:?}");
        }

        let quoted = String::from_utf8(quote_regex(b"a.c")).expect("ascii pattern");
        let re = Regex::new(&format!("(?-u)^{quoted}$")).expect("valid pattern");
        assert!(!re.is_match(b"abc"));
    }

    #[test]
    fn predicate_chains_column_and_value() {
        let predicate = latest_cell_predicate(b"f", b"q.1", Some(b"v"));
        let Some(Filter::Chain(chain)) = predicate.filter else {
            panic!("expected chain");
        };
        let filters: Vec<_> = chain.filters.into_iter().filter_map(|f| f.filter).collect();
        assert_eq!(
            filters,
            vec![
                Filter::FamilyNameRegexFilter(b"f".to_vec()),
                Filter::ColumnQualifierRegexFilter(b"q\\.1".to_vec()),
                Filter::CellsPerColumnLimitFilter(1),
                Filter::ValueRegexFilter(b"v".to_vec()),
            ]
        );
    }

    #[test]
    fn absence_predicate_has_no_value_filter() {
        let predicate = latest_cell_predicate(b"f", b"q", None);
        let Some(Filter::Chain(chain)) = predicate.filter else {
            panic!("expected chain");
        };
        assert_eq!(chain.filters.len(), 3);
    }
}
