use crate::error::Error;

/// Builds a clap value parser that accepts exactly the variant names of a
/// `strum` enum.
#[macro_export]
macro_rules! clap_enum_variants {
    ($e: ty) => {{
        use clap::builder::TypedValueParser;
        use strum::VariantNames;
        clap::builder::PossibleValuesParser::new(<$e>::VARIANTS).map(|s| s.parse::<$e>().unwrap())
    }};
}

/// Parses a decimal Fibonacci index, ignoring surrounding whitespace.
pub fn parse_index(text: &str) -> Result<u64, Error> {
    text.trim()
        .parse::<u64>()
        .map_err(|source| Error::InvalidIndex {
            text: text.to_string(),
            source,
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn parses_decimal_indices() {
        assert_eq!(parse_index("0"), Ok(0));
        assert_eq!(parse_index("93"), Ok(93));
        assert_eq!(parse_index(" 20\n"), Ok(20));
        assert_eq!(parse_index("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn rejects_malformed_indices() {
        for text in ["", "abc", "-1", "1.5", "12abc", "18446744073709551616"] {
            let err = parse_index(text).unwrap_err();
            assert!(
                matches!(&err, Error::InvalidIndex { text: t, .. } if t == text),
                "{err:?}"
            );
        }
    }

    #[test]
    fn error_message_names_the_input() {
        let err = parse_index("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid index `abc`: invalid digit found in string"
        );
    }
}
