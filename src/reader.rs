use crate::codepoint::parse_code_point_range;
use crate::codepoint::CodePointRange;
use crate::continuation::Continuation;
use crate::continuation::Step;
use crate::error::unsupported;
use crate::name::parse_character_name;
use crate::Error;
use crate::Result;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

/// One non-empty line of a UCD data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number. For a range given as First/Last lines, this is
    /// the line of the Last entry.
    pub line_number: usize,
    /// Code points from field 0.
    pub range: CodePointRange,
    /// Field 1 onwards, trimmed. A closed First/Last pair has field 1
    /// replaced by the bare range name.
    pub fields: Vec<String>,
}

impl Record {
    /// Field 1, usually the property value.
    pub fn value(&self) -> &str {
        &self.fields[0]
    }
}

/// Streams [`Record`]s out of a semicolon-separated UCD data file.
///
/// Comments and blank lines are skipped, every line must have exactly the
/// expected number of fields, and `<Name, First>`/`<Name, Last>` pairs are
/// merged into a single record. Errors carry the source name and line
/// number. The iterator stops after the first error.
pub struct UcdReader<R> {
    lines: io::Lines<R>,
    source_name: String,
    expected_field_count: usize,
    line_number: usize,
    continuation: Option<Continuation>,
}

impl UcdReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>, expected_field_count: usize) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::from(e).at(&source_name, 0))?;
        Self::from_reader(BufReader::new(file), source_name, expected_field_count)
    }
}

impl<R: BufRead> UcdReader<R> {
    pub fn from_reader(
        reader: R,
        source_name: impl Into<String>,
        expected_field_count: usize,
    ) -> Result<Self> {
        if expected_field_count < 2 {
            return unsupported("expected field count below 2");
        }
        Ok(Self {
            lines: reader.lines(),
            source_name: source_name.into(),
            expected_field_count,
            line_number: 0,
            continuation: Some(Continuation::new()),
        })
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    fn parse_line(&mut self, line: &str) -> Result<Option<Record>> {
        let line = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let mut fields: Vec<String> = line.split(';').map(|f| f.trim().to_string()).collect();
        if fields.len() != self.expected_field_count {
            return Err(Error::FieldCountMismatch {
                expected: self.expected_field_count,
                actual: fields.len(),
            });
        }

        let range = parse_code_point_range(&fields[0])?;
        let (name, marker) = parse_character_name(&fields[1]);
        let name = name.to_string();
        let continuation = match self.continuation.as_mut() {
            Some(c) => c,
            None => return Ok(None),
        };
        match continuation.feed(range, &name, marker, self.line_number)? {
            Step::Opened => Ok(None),
            Step::Emit { range, closed } => {
                if closed {
                    fields[1] = name;
                }
                fields.remove(0);
                Ok(Some(Record {
                    line_number: self.line_number,
                    range,
                    fields,
                }))
            }
        }
    }

    fn fail(&mut self, err: Error, line_number: usize) -> Option<Result<Record>> {
        self.continuation = None;
        Some(Err(err.at(&self.source_name, line_number)))
    }
}

impl<R: BufRead> Iterator for UcdReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.continuation.as_ref()?;
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    let line_number = self.line_number + 1;
                    return self.fail(e.into(), line_number);
                }
                None => {
                    let continuation = self.continuation.take()?;
                    return match continuation.finish() {
                        Ok(()) => None,
                        Err((err, line_number)) => self.fail(err, line_number),
                    };
                }
            };
            self.line_number += 1;
            match self.parse_line(&line) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(err) => {
                    let line_number = self.line_number;
                    return self.fail(err, line_number);
                }
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for UcdReader<R> {}
