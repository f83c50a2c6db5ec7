//! Result presentation.
//!
//! The scan hands every completed result and its weakness flags to a
//! [`Presenter`]. Presenters only format; all interpretation has already happened.
//!
//! - [`ConsolePresenter`]: colored, human-readable report
//! - [`JsonPresenter`]: one JSON object per line, for piping to `jq`

mod console;
mod json;

use std::io::{self, ErrorKind, Write};

use crate::config::OutputFormat;
use crate::error_handling::PresentError;
use crate::models::DomainScanResult;
use crate::policy::WeaknessFlags;
use crate::run::ScanReport;

pub use console::ConsolePresenter;
pub use json::JsonPresenter;

/// Consumer of completed scan results.
pub trait Presenter {
    /// Emits one domain's result.
    fn present(
        &mut self,
        result: &DomainScanResult,
        flags: &WeaknessFlags,
    ) -> Result<(), PresentError>;

    /// Called once after the last domain.
    fn finish(&mut self, _report: &ScanReport) -> Result<(), PresentError> {
        Ok(())
    }
}

/// Builds the stdout presenter for an output format.
///
/// # Arguments
///
/// * `format` - Console or JSON
/// * `verbose` - Show resolution failures (console only)
/// * `color` - Use ANSI colors (console only)
pub fn stdout_presenter(format: OutputFormat, verbose: bool, color: bool) -> Box<dyn Presenter> {
    let out = IgnoreBrokenPipe::new(io::stdout());
    match format {
        OutputFormat::Console => Box::new(ConsolePresenter::new(out, verbose, color)),
        OutputFormat::Json => Box::new(JsonPresenter::new(out)),
    }
}

/// Writer that treats a closed downstream pipe as success.
///
/// Lets `spoofx ... | head` exit cleanly instead of reporting an output failure
/// per remaining domain.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_ignore_broken_pipe() {
        let mut writer = IgnoreBrokenPipe::new(ClosedPipe);
        assert_eq!(writer.write(b"hello").unwrap(), 5);
        assert!(writer.flush().is_ok());
    }
}
