use crate::codepoint::CodePoint;
use crate::codepoint::CodePointRange;
use crate::name::Marker;
use crate::Error;
use crate::Result;

/// Pairs `<Name, First>` lines with the `<Name, Last>` line that follows.
#[derive(Debug, Default)]
pub struct Continuation {
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    name: String,
    first: CodePoint,
    line_number: usize,
}

/// What a line turned into after passing through [`Continuation::feed`].
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// The line opened a range. Nothing to emit yet.
    Opened,
    /// The line is complete. `closed` is true if it closed a pending range,
    /// in which case `range` spans both lines.
    Emit { range: CodePointRange, closed: bool },
}

impl Continuation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance the state with one parsed line.
    pub fn feed(
        &mut self,
        range: CodePointRange,
        name: &str,
        marker: Option<Marker>,
        line_number: usize,
    ) -> Result<Step> {
        match self.pending.take() {
            None => match marker {
                None => Ok(Step::Emit {
                    range,
                    closed: false,
                }),
                Some(Marker::First) => {
                    if !range.is_single() {
                        return Err(Error::InvalidFirstLine);
                    }
                    self.pending = Some(Pending {
                        name: name.to_string(),
                        first: range.first(),
                        line_number,
                    });
                    Ok(Step::Opened)
                }
                // Nothing to close.
                Some(Marker::Last) => Err(Error::InvalidLastLine),
            },
            Some(pending) => {
                if marker != Some(Marker::Last)
                    || name != pending.name
                    || !range.is_single()
                    || range.first() < pending.first
                {
                    return Err(Error::InvalidLastLine);
                }
                log::trace!(
                    "<{}, First> on line {} closed at {:04X}",
                    pending.name,
                    pending.line_number,
                    range.last()
                );
                Ok(Step::Emit {
                    range: CodePointRange::new(pending.first, range.last())?,
                    closed: true,
                })
            }
        }
    }

    /// Check that no First line is left open at the end of input. On failure,
    /// returns the error together with the line number of the First line.
    pub fn finish(self) -> std::result::Result<(), (Error, usize)> {
        match self.pending {
            None => Ok(()),
            Some(Pending {
                name, line_number, ..
            }) => Err((Error::UnclosedFirstMarker { name }, line_number)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(code_point: CodePoint) -> CodePointRange {
        CodePointRange::new(code_point, code_point).unwrap()
    }

    #[test]
    fn test_plain_lines_pass_through() {
        let mut c = Continuation::new();
        let r = CodePointRange::new(0x41, 0x5A).unwrap();
        assert_eq!(
            c.feed(r, "Lu", None, 1).unwrap(),
            Step::Emit {
                range: r,
                closed: false
            }
        );
        assert!(!c.is_pending());
        assert!(c.finish().is_ok());
    }

    #[test]
    fn test_first_then_last() {
        let mut c = Continuation::new();
        let step = c
            .feed(single(0xAC00), "Hangul Syllable", Some(Marker::First), 1)
            .unwrap();
        assert_eq!(step, Step::Opened);
        assert!(c.is_pending());
        let step = c
            .feed(single(0xD7A3), "Hangul Syllable", Some(Marker::Last), 2)
            .unwrap();
        assert_eq!(
            step,
            Step::Emit {
                range: CodePointRange::new(0xAC00, 0xD7A3).unwrap(),
                closed: true
            }
        );
        assert!(!c.is_pending());
    }

    #[test]
    fn test_first_last_same_code_point() {
        let mut c = Continuation::new();
        c.feed(single(0x41), "A", Some(Marker::First), 1).unwrap();
        let step = c.feed(single(0x41), "A", Some(Marker::Last), 2).unwrap();
        assert_eq!(
            step,
            Step::Emit {
                range: single(0x41),
                closed: true
            }
        );
    }

    #[test]
    fn test_first_must_be_single() {
        let mut c = Continuation::new();
        let r = CodePointRange::new(0x41, 0x42).unwrap();
        assert!(matches!(
            c.feed(r, "X", Some(Marker::First), 1),
            Err(Error::InvalidFirstLine)
        ));
    }

    #[test]
    fn test_invalid_last() {
        let last = |name: &str, range: CodePointRange, marker: Option<Marker>| {
            let mut c = Continuation::new();
            c.feed(single(0x100), "X", Some(Marker::First), 1).unwrap();
            c.feed(range, name, marker, 2)
        };
        // Wrong name.
        assert!(matches!(
            last("Y", single(0x200), Some(Marker::Last)),
            Err(Error::InvalidLastLine)
        ));
        // Not a Last marker.
        assert!(matches!(
            last("X", single(0x200), None),
            Err(Error::InvalidLastLine)
        ));
        assert!(matches!(
            last("X", single(0x200), Some(Marker::First)),
            Err(Error::InvalidLastLine)
        ));
        // Not a single code point.
        assert!(matches!(
            last("X", CodePointRange::new(0x200, 0x201).unwrap(), Some(Marker::Last)),
            Err(Error::InvalidLastLine)
        ));
        // Before the First code point.
        assert!(matches!(
            last("X", single(0xFF), Some(Marker::Last)),
            Err(Error::InvalidLastLine)
        ));
    }

    #[test]
    fn test_last_without_first() {
        let mut c = Continuation::new();
        assert!(matches!(
            c.feed(single(0x41), "X", Some(Marker::Last), 1),
            Err(Error::InvalidLastLine)
        ));
    }

    #[test]
    fn test_unclosed_first() {
        let mut c = Continuation::new();
        c.feed(single(0x41), "X", Some(Marker::First), 7).unwrap();
        match c.finish() {
            Err((Error::UnclosedFirstMarker { name }, 7)) => assert_eq!(name, "X"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
