use crate::registry::{SizeEntry, PREFIX};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::path::PathBuf;

/// Writes one `#define` line per entry, in table order. No header, no
/// footer, nothing else.
pub fn write_size_definitions<W: Write>(entries: &[SizeEntry], w: &mut W) -> io::Result<()> {
    for entry in entries {
        writeln!(w, "#define {}_sizeof_{} {}", PREFIX, entry.name, entry.size_bytes)?;
    }
    Ok(())
}

/// Fatal I/O faults of the generator, each carrying the destination path.
#[derive(Debug)]
pub enum GeneratorError {
    Open { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl Display for GeneratorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::Open { path, source } => {
                write!(f, "can't open file '{}' for writing: {}", path.display(), source)
            }
            GeneratorError::Write { path, source } => {
                write!(f, "can't write to file '{}': {}", path.display(), source)
            }
        }
    }
}

impl Error for GeneratorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GeneratorError::Open { source, .. } | GeneratorError::Write { source, .. } => {
                Some(source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::REGISTERED_TYPES;

    #[test]
    fn test_lines_follow_table_order() {
        let entries = [
            SizeEntry {
                name: "Alpha",
                size_bytes: 4,
            },
            SizeEntry {
                name: "Beta",
                size_bytes: 24,
            },
        ];
        let mut out = Vec::new();
        write_size_definitions(&entries, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#define QTCW_sizeof_Alpha 4\n#define QTCW_sizeof_Beta 24\n"
        );
    }

    #[test]
    fn test_empty_table_emits_nothing() {
        let mut out = Vec::new();
        write_size_definitions(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_registered_table_emits_one_line_per_entry() {
        let mut out = Vec::new();
        write_size_definitions(&REGISTERED_TYPES, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), REGISTERED_TYPES.len());
        assert!(text.lines().all(|l| l.starts_with("#define QTCW_sizeof_")));
        assert!(!text.contains("\n\n"));
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_errors_propagate() {
        let err = write_size_definitions(&REGISTERED_TYPES, &mut BrokenSink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
