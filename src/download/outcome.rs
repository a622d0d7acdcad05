use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::catalog::ImageEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Saved { path: PathBuf, bytes: u64 },
    HttpStatus(u16),
    Transport(String),
    Filesystem(String),
}

impl EntryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EntryOutcome::Saved { .. })
    }

    /// Failures below HTTP. These are the ones `ErrorPolicy::Abort` stops on.
    pub fn is_fault(&self) -> bool {
        matches!(self, EntryOutcome::Transport(_) | EntryOutcome::Filesystem(_))
    }
}

impl fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryOutcome::Saved { path, bytes } => {
                write!(f, "saved {} bytes to {}", bytes, path.display())
            }
            EntryOutcome::HttpStatus(code) => write!(f, "HTTP {}", code),
            EntryOutcome::Transport(reason) => write!(f, "request failed ({})", reason),
            EntryOutcome::Filesystem(reason) => write!(f, "write failed ({})", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub entry: ImageEntry,
    pub outcome: EntryOutcome,
}

impl fmt::Display for EntryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.outcome.is_success() {
            write!(f, "Downloaded image: {}", self.entry.filename)
        } else {
            write!(f, "Error downloading {}: {}", self.entry.filename, self.outcome)
        }
    }
}

/// Everything one run produced, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub reports: Vec<EntryReport>,
    /// Set when `ErrorPolicy::Abort` stopped the run early.
    pub aborted: bool,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.succeeded()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn get(&self, filename: &str) -> Option<&EntryOutcome> {
        self.reports
            .iter()
            .find(|r| r.entry.filename == filename)
            .map(|r| &r.outcome)
    }

    /// The entry whose fault stopped the run, if it was stopped.
    pub fn abort_cause(&self) -> Option<&EntryReport> {
        if self.aborted { self.reports.last() } else { None }
    }
}

/// Writes one status line per entry, then the summary once the run is over.
/// A run with no entries writes nothing.
pub struct StatusWriter<W> {
    out: W,
}

impl<W: Write> StatusWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn entry(&mut self, report: &EntryReport) -> io::Result<()> {
        writeln!(self.out, "{report}")
    }

    pub fn finish(mut self, run: &RunReport) -> io::Result<W> {
        if !run.is_empty() {
            writeln!(self.out, "{run}")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} succeeded, {} failed", self.succeeded(), self.failed())?;
        if self.aborted {
            write!(f, ", run aborted")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(filename: &str, outcome: EntryOutcome) -> EntryReport {
        EntryReport {
            entry: ImageEntry::new(filename, format!("http://x/{filename}")),
            outcome,
        }
    }

    #[test]
    fn status_lines_name_the_file() {
        let ok = report(
            "a.jpg",
            EntryOutcome::Saved {
                path: PathBuf::from("a.jpg"),
                bytes: 4,
            },
        );
        assert_eq!(ok.to_string(), "Downloaded image: a.jpg");

        let not_found = report("b.jpg", EntryOutcome::HttpStatus(404));
        assert_eq!(not_found.to_string(), "Error downloading b.jpg: HTTP 404");
    }

    #[test]
    fn summary_counts() {
        let mut run = RunReport {
            reports: vec![
                report(
                    "a.jpg",
                    EntryOutcome::Saved {
                        path: PathBuf::from("a.jpg"),
                        bytes: 4,
                    },
                ),
                report("b.jpg", EntryOutcome::HttpStatus(500)),
                report("c.jpg", EntryOutcome::Transport("dns".into())),
            ],
            aborted: false,
        };
        assert_eq!(run.succeeded(), 1);
        assert_eq!(run.failed(), 2);
        assert_eq!(run.to_string(), "1 succeeded, 2 failed");

        run.aborted = true;
        assert_eq!(run.to_string(), "1 succeeded, 2 failed, run aborted");
    }

    #[test]
    fn only_transport_and_filesystem_are_faults() {
        assert!(!EntryOutcome::HttpStatus(404).is_fault());
        assert!(EntryOutcome::Transport("x".into()).is_fault());
        assert!(EntryOutcome::Filesystem("x".into()).is_fault());
    }

    #[test]
    fn empty_run_writes_nothing() {
        let out = StatusWriter::new(Vec::new())
            .finish(&RunReport::default())
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn entry_lines_come_before_the_summary() {
        let run = RunReport {
            reports: vec![
                report(
                    "a.jpg",
                    EntryOutcome::Saved {
                        path: PathBuf::from("a.jpg"),
                        bytes: 4,
                    },
                ),
                report("b.jpg", EntryOutcome::HttpStatus(404)),
            ],
            aborted: false,
        };

        let mut status = StatusWriter::new(Vec::new());
        for r in &run.reports {
            status.entry(r).unwrap();
        }
        let out = String::from_utf8(status.finish(&run).unwrap()).unwrap();

        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec![
                "Downloaded image: a.jpg",
                "Error downloading b.jpg: HTTP 404",
                "1 succeeded, 1 failed",
            ]
        );
    }

    #[test]
    fn abort_cause_is_the_last_entry_of_an_aborted_run() {
        let mut run = RunReport {
            reports: vec![
                report("a.jpg", EntryOutcome::HttpStatus(404)),
                report("b.jpg", EntryOutcome::Transport("dns".into())),
            ],
            aborted: false,
        };
        assert!(run.abort_cause().is_none());

        run.aborted = true;
        assert_eq!(run.abort_cause().map(|r| r.entry.filename.as_str()), Some("b.jpg"));
    }
}
