use crate::Error;
use crate::Result;
use serde::ser::SerializeTuple;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::str::FromStr;

pub type CodePoint = u32;

/// The largest value a Unicode code point may take.
pub const MAX_CODE_POINT: CodePoint = 0x10FFFF;

/// A closed, non-empty interval of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePointRange {
    first: CodePoint,
    last: CodePoint,
}

impl CodePointRange {
    /// Create `first..=last`. Fails if the bounds are reversed or out of
    /// the code point space.
    pub fn new(first: CodePoint, last: CodePoint) -> Result<Self> {
        if first > last || last > MAX_CODE_POINT {
            return Err(Error::InvalidRange(format!(
                "{:04X}..{:04X}",
                first, last
            )));
        }
        Ok(Self { first, last })
    }

    pub(crate) fn single(code_point: CodePoint) -> Self {
        Self {
            first: code_point,
            last: code_point,
        }
    }

    pub fn first(&self) -> CodePoint {
        self.first
    }

    pub fn last(&self) -> CodePoint {
        self.last
    }

    /// Number of code points in the range. Never zero.
    pub fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    pub fn is_single(&self) -> bool {
        self.first == self.last
    }

    pub fn contains(&self, code_point: CodePoint) -> bool {
        self.first <= code_point && code_point <= self.last
    }
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{:04X}", self.first)
        } else {
            write!(f, "{:04X}..{:04X}", self.first, self.last)
        }
    }
}

impl FromStr for CodePointRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_code_point_range(s)
    }
}

impl Serialize for CodePointRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.first)?;
        tuple.serialize_element(&self.last)?;
        tuple.end()
    }
}

/// Parse a code point written as 4 to 6 hexadecimal digits.
pub fn parse_code_point(s: &str) -> Result<CodePoint> {
    let invalid = || Error::InvalidCodePoint(s.to_string());
    if s.len() < 4 || s.len() > 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(s, 16).map_err(|_| invalid())?;
    if value > MAX_CODE_POINT {
        return Err(invalid());
    }
    Ok(value)
}

/// Parse either `X` (short for `X..X`) or `X..Y` with `X <= Y`.
pub fn parse_code_point_range(s: &str) -> Result<CodePointRange> {
    let bounds: Vec<&str> = s.split("..").collect();
    match bounds[..] {
        [single] => Ok(CodePointRange::single(parse_code_point(single)?)),
        [first, last] => {
            let first = parse_code_point(first)?;
            let last = parse_code_point(last)?;
            if first > last {
                return Err(Error::InvalidRange(s.to_string()));
            }
            Ok(CodePointRange { first, last })
        }
        _ => Err(Error::InvalidRange(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(first: CodePoint, last: CodePoint) -> CodePointRange {
        CodePointRange::new(first, last).unwrap()
    }

    #[test]
    fn test_parse_code_point() {
        assert_eq!(parse_code_point("0000").unwrap(), 0);
        assert_eq!(parse_code_point("0041").unwrap(), 0x41);
        assert_eq!(parse_code_point("fffd").unwrap(), 0xFFFD);
        assert_eq!(parse_code_point("1F600").unwrap(), 0x1F600);
        assert_eq!(parse_code_point("10FFFF").unwrap(), MAX_CODE_POINT);
        assert_eq!(parse_code_point("00E9").unwrap(), 0xE9);
    }

    #[test]
    fn test_parse_code_point_invalid() {
        for s in &[
            "", "41", "041", "0000041", "110000", "FFFFFF", "00G1", "+041", "-041", " 041",
            "00_41", "é041",
        ] {
            match parse_code_point(s) {
                Err(Error::InvalidCodePoint(t)) => assert_eq!(&t, s),
                other => panic!("{:?} parsed as {:?}", s, other),
            }
        }
    }

    #[test]
    fn test_parse_code_point_range() {
        assert_eq!(parse_code_point_range("0041").unwrap(), range(0x41, 0x41));
        assert_eq!(
            parse_code_point_range("0041..0045").unwrap(),
            range(0x41, 0x45)
        );
        assert_eq!(
            parse_code_point_range("20000..2A6DF").unwrap(),
            range(0x20000, 0x2A6DF)
        );
        assert_eq!(
            parse_code_point_range("0041..0041").unwrap(),
            range(0x41, 0x41)
        );
    }

    #[test]
    fn test_parse_code_point_range_invalid() {
        assert!(matches!(
            parse_code_point_range("0045..0041"),
            Err(Error::InvalidRange(_))
        ));
        assert!(matches!(
            parse_code_point_range("0041..0043..0045"),
            Err(Error::InvalidRange(_))
        ));
        assert!(matches!(
            parse_code_point_range("0041..41"),
            Err(Error::InvalidCodePoint(_))
        ));
        assert!(matches!(
            parse_code_point_range(""),
            Err(Error::InvalidCodePoint(_))
        ));
    }

    #[test]
    fn test_range_accessors() {
        let r = range(0x3400, 0x4DBF);
        assert_eq!(r.len(), 0x4DBF - 0x3400 + 1);
        assert!(r.contains(0x3400));
        assert!(r.contains(0x4DBF));
        assert!(!r.contains(0x4DC0));
        assert!(!r.is_single());
        assert!(CodePointRange::new(0x45, 0x41).is_err());
        assert!(CodePointRange::new(0, 0x110000).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(range(0x41, 0x41).to_string(), "0041");
        assert_eq!(range(0x1F1E6, 0x1F1FF).to_string(), "1F1E6..1F1FF");
        let r: CodePointRange = "00A9..00AE".parse().unwrap();
        assert_eq!(r.to_string(), "00A9..00AE");
    }
}
