//! Reader for the tab-separated regex conformance tests by Glenn Fowler
//! (`basic.dat`, `nullsubexpr.dat`, `repetition.dat`).
//!
//! Each test line holds flags, a pattern, the string to search and the
//! expected submatch offsets:
//!
//! ```text
//! E	a|b		abc	(0,1)
//! E	SAME		xyz	NOMATCH
//! ```
//!
//! Only tests for extended regular expressions (flag `E`) are kept.

use crate::Error;
use crate::Result;
use serde::ser::SerializeStruct;
use serde::Serialize;
use serde::Serializer;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::ops::Range;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FowlerTest {
    pub line_number: usize,
    pub flags: String,
    pub pattern: String,
    pub haystack: String,
    /// Expected offsets of the whole match and each group. `None` for a
    /// group that did not participate. Empty if nothing matches.
    pub submatches: Vec<Option<Range<usize>>>,
}

impl FowlerTest {
    pub fn is_match(&self) -> bool {
        !self.submatches.is_empty()
    }
}

impl Serialize for FowlerTest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("FowlerTest", 5)?;
        s.serialize_field("line_number", &self.line_number)?;
        s.serialize_field("flags", &self.flags)?;
        s.serialize_field("pattern", &self.pattern)?;
        s.serialize_field("haystack", &self.haystack)?;
        s.serialize_field("submatches", &self.submatches)?;
        s.end()
    }
}

pub struct FowlerReader<R> {
    lines: io::Lines<R>,
    source_name: String,
    line_number: usize,
    prev_pattern: Option<String>,
    done: bool,
}

impl FowlerReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::from(e).at(&source_name, 0))?;
        Ok(Self::from_reader(BufReader::new(file), source_name))
    }
}

impl<R: BufRead> FowlerReader<R> {
    pub fn from_reader(reader: R, source_name: impl Into<String>) -> Self {
        Self {
            lines: reader.lines(),
            source_name: source_name.into(),
            line_number: 0,
            prev_pattern: None,
            done: false,
        }
    }

    fn parse_line(&mut self, line: &str) -> Result<Option<FowlerTest>> {
        if line.starts_with('#') {
            return Ok(None);
        }
        // Columns are aligned with runs of tabs.
        let fields: Vec<&str> = line
            .split('\t')
            .filter(|f| !f.is_empty())
            .map(|f| f.trim())
            .take(4)
            .collect();
        let (flags, pattern, haystack, output) = match fields[..] {
            [flags, pattern, haystack, output] => (flags, pattern, haystack, output),
            _ => return Ok(None),
        };

        let pattern = if pattern == "SAME" {
            match &self.prev_pattern {
                Some(p) => p.clone(),
                None => return Err(Error::InvalidTestLine("SAME without a previous pattern".into())),
            }
        } else {
            pattern.to_string()
        };
        self.prev_pattern = Some(pattern.clone());
        if !flags.contains('E') {
            return Ok(None);
        }

        let submatches = if output == "NOMATCH" {
            Vec::new()
        } else {
            parse_submatches(output)?
        };
        Ok(Some(FowlerTest {
            line_number: self.line_number,
            flags: flags.to_string(),
            pattern,
            haystack: haystack.to_string(),
            submatches,
        }))
    }

    fn fail(&mut self, err: Error) -> Option<Result<FowlerTest>> {
        self.done = true;
        Some(Err(err.at(&self.source_name, self.line_number)))
    }
}

impl<R: BufRead> Iterator for FowlerReader<R> {
    type Item = Result<FowlerTest>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let line = self.lines.next()?;
            self.line_number += 1;
            let parsed = line.map_err(Error::from).and_then(|l| self.parse_line(&l));
            match parsed {
                Ok(Some(test)) => return Some(Ok(test)),
                Ok(None) => continue,
                Err(err) => return self.fail(err),
            }
        }
        None
    }
}

impl<R: BufRead> std::iter::FusedIterator for FowlerReader<R> {}

/// Read all extended regex tests from a Fowler data file.
pub fn read_fowler_tests(path: impl AsRef<Path>) -> Result<Vec<FowlerTest>> {
    let path = path.as_ref();
    let tests = FowlerReader::open(path)?.collect::<Result<Vec<_>>>()?;
    log::debug!("read {} tests from {}", tests.len(), path.display());
    Ok(tests)
}

/// Parse `(a,b)(c,d)...`. A `(?,?)` group did not participate in the match.
/// Error codes such as `EPAREN` contain no groups and mean no match.
fn parse_submatches(s: &str) -> Result<Vec<Option<Range<usize>>>> {
    let invalid = || Error::InvalidTestLine(format!("invalid submatches {}", s));
    let offset = |t: &str| t.trim().parse::<usize>().map_err(|_| invalid());

    let mut result = Vec::new();
    let mut rest = s;
    while let Some(open) = rest.find('(') {
        let group = &rest[open + 1..];
        let comma = match group.find(',') {
            Some(i) => i,
            None => break,
        };
        let close = match group[comma + 1..].find(')') {
            Some(i) => comma + 1 + i,
            None => {
                rest = group;
                continue;
            }
        };
        let (start, end) = (&group[..comma], &group[comma + 1..close]);
        if start == "?" && end == "?" {
            result.push(None);
        } else {
            result.push(Some(offset(start)?..offset(end)?));
        }
        rest = &group[close + 1..];
    }
    Ok(result)
}
