//! JSON Lines output.
//!
//! Each line is a complete JSON object for one domain, suitable for `jq`.

use std::io::Write;

use serde_json::json;

use crate::config::LOG_TIMESTAMP_FORMAT;
use crate::error_handling::PresentError;
use crate::models::DomainScanResult;
use crate::policy::WeaknessFlags;

use super::Presenter;

/// Writes one JSON object per domain.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(
        &mut self,
        result: &DomainScanResult,
        flags: &WeaknessFlags,
    ) -> Result<(), PresentError> {
        let value = json!({
            "domain": result.domain,
            "timestamp": result.timestamp.format(LOG_TIMESTAMP_FORMAT).to_string(),
            "dmarc": result.dmarc,
            "spf": result.spf,
            "flags": flags,
            "resolution_failures": {
                "dmarc": result.dmarc_lookup.failure(),
                "spf": result.spf_lookup.failure(),
            },
        });
        serde_json::to_writer(&mut self.out, &value)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
