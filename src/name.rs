/// Which end of a two-line range a `<Name, First>` / `<Name, Last>` entry
/// stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    First,
    Last,
}

/// Parse field 1 of a UCD line.
///
/// UnicodeData.txt lists some large ranges as two entries, one for the start
/// character with the name `<Range Name, First>` and one for the end
/// character with `<Range Name, Last>`. For those, the range name and the
/// marker are returned. Anything else is a plain name.
///
/// Only the beginning of the text has to match; trailing content after the
/// closing bracket is ignored. When the marker appears more than once, the
/// rightmost one wins.
pub fn parse_character_name(s: &str) -> (&str, Option<Marker>) {
    if let Some(rest) = s.strip_prefix('<') {
        for (i, _) in rest.rmatch_indices(", ") {
            let tail = &rest[i + 2..];
            let marker = if tail.starts_with("First>") {
                Marker::First
            } else if tail.starts_with("Last>") {
                Marker::Last
            } else {
                continue;
            };
            return (&rest[..i], Some(marker));
        }
    }
    (s, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        assert_eq!(
            parse_character_name("<CJK Ideograph, First>"),
            ("CJK Ideograph", Some(Marker::First))
        );
        assert_eq!(
            parse_character_name("<Hangul Syllable, Last>"),
            ("Hangul Syllable", Some(Marker::Last))
        );
        assert_eq!(
            parse_character_name("<Plane 15 Private Use, First>;Co"),
            ("Plane 15 Private Use", Some(Marker::First))
        );
        assert_eq!(
            parse_character_name("<a, First>, Last>"),
            ("a, First>", Some(Marker::Last))
        );
        assert_eq!(parse_character_name("<, First>"), ("", Some(Marker::First)));
    }

    #[test]
    fn test_plain_names() {
        assert_eq!(
            parse_character_name("LATIN SMALL LETTER A"),
            ("LATIN SMALL LETTER A", None)
        );
        assert_eq!(parse_character_name("<control>"), ("<control>", None));
        assert_eq!(parse_character_name("<X, Middle>"), ("<X, Middle>", None));
        assert_eq!(parse_character_name("<X,First>"), ("<X,First>", None));
        assert_eq!(parse_character_name("X, First>"), ("X, First>", None));
        assert_eq!(parse_character_name(""), ("", None));
    }
}
