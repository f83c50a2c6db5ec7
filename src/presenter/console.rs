//! Human-readable console output.

use std::io::Write;

use colored::{ColoredString, Colorize};

use crate::config::SEPARATOR_WIDTH;
use crate::error_handling::PresentError;
use crate::models::DomainScanResult;
use crate::policy::{WeaknessFlag, WeaknessFlags};
use crate::run::ScanReport;

use super::Presenter;

/// Colored per-domain report, one block per domain followed by a separator.
pub struct ConsolePresenter<W: Write> {
    out: W,
    verbose: bool,
    color: bool,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W, verbose: bool, color: bool) -> Self {
        Self {
            out,
            verbose,
            color,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(&self, text: &str) -> String {
        self.paint(text, |s| s.magenta())
    }

    fn value(&self, text: &str) -> String {
        self.paint(text, |s| s.bright_white())
    }

    fn alert(&self, text: &str) -> String {
        self.paint(text, |s| s.red())
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_flag(&mut self, flag: WeaknessFlag, detail: Option<&str>) -> Result<(), PresentError> {
        let message = match detail {
            Some(detail) => format!("    [!] {}: {}", flag.description(), detail),
            None => format!("    [!] {}", flag.description()),
        };
        let line = self.alert(&message);
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn write_field(&mut self, label: &str, value: &str) -> Result<(), PresentError> {
        let line = format!("    {} {}", self.label(label), self.value(value));
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn present(
        &mut self,
        result: &DomainScanResult,
        flags: &WeaknessFlags,
    ) -> Result<(), PresentError> {
        let header = format!(
            "{} {}",
            self.label("[*] Domain:"),
            self.value(&result.domain)
        );
        writeln!(self.out, "{header}")?;

        // DMARC
        match result.dmarc.policy.as_deref() {
            Some(policy) => {
                self.write_field("DMARC Policy:", policy)?;
                if flags.contains(&WeaknessFlag::DmarcWeakNone) {
                    self.write_flag(WeaknessFlag::DmarcWeakNone, None)?;
                }
                let rua = result.dmarc.aggregate_report_target.as_deref();
                let ruf = result.dmarc.forensic_report_target.as_deref();
                if rua.is_some() || ruf.is_some() {
                    let reporting = format!(
                        "rua={}, ruf={}",
                        rua.unwrap_or_default(),
                        ruf.unwrap_or_default()
                    );
                    self.write_field("DMARC Reporting:", &reporting)?;
                }
                if let Some(raw) = result.dmarc.raw_record.as_deref() {
                    self.write_field("Full DMARC Record:", raw)?;
                }
            }
            None => {
                self.write_flag(WeaknessFlag::DmarcMissing, None)?;
                if self.verbose {
                    if let Some(raw) = result.dmarc.raw_record.as_deref() {
                        self.write_field("Full DMARC Record:", raw)?;
                    }
                }
            }
        }
        if self.verbose {
            if let Some(failure) = result.dmarc_lookup.failure() {
                self.write_field("DMARC Lookup Failed:", &failure)?;
            }
        }

        // SPF
        match result.spf.raw_record.as_deref() {
            Some(raw) => {
                let strictness = result.spf.strictness.to_string();
                self.write_field("SPF Record:", raw)?;
                self.write_field("SPF Strictness:", &strictness)?;
                if flags.contains(&WeaknessFlag::SpfWeak) {
                    self.write_flag(WeaknessFlag::SpfWeak, Some(&strictness))?;
                }
            }
            None => self.write_flag(WeaknessFlag::SpfMissing, None)?,
        }
        if self.verbose {
            if let Some(failure) = result.spf_lookup.failure() {
                self.write_field("SPF Lookup Failed:", &failure)?;
            }
        }

        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, report: &ScanReport) -> Result<(), PresentError> {
        let mut summary = format!(
            "Scanned {} domain{} ({} with weaknesses) in {:.1}s - results appended to {}",
            report.total_domains,
            if report.total_domains == 1 { "" } else { "s" },
            report.flagged,
            report.elapsed_seconds,
            report.log_path.display()
        );
        if report.resolution_failures > 0 {
            summary.push_str(&format!(
                "; {} DNS lookup(s) failed",
                report.resolution_failures
            ));
        }
        if report.log_failures > 0 {
            summary.push_str(&format!("; {} record(s) not logged", report.log_failures));
        }
        writeln!(self.out, "{summary}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ResolutionError;
    use crate::models::LookupStatus;
    use crate::policy::{classify, DmarcResult, SpfResult, SpfStrictness};
    use chrono::Local;

    fn render(result: &DomainScanResult, verbose: bool) -> String {
        let flags = classify(&result.dmarc, &result.spf);
        let mut presenter = ConsolePresenter::new(Vec::new(), verbose, false);
        presenter.present(result, &flags).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    fn result(dmarc: DmarcResult, spf: SpfResult) -> DomainScanResult {
        DomainScanResult {
            domain: "example.com".to_string(),
            dmarc,
            spf,
            timestamp: Local::now(),
            dmarc_lookup: LookupStatus::Answered,
            spf_lookup: LookupStatus::Answered,
        }
    }

    #[test]
    fn test_present_weak_posture() {
        let output = render(
            &result(
                DmarcResult {
                    policy: Some("none".to_string()),
                    aggregate_report_target: Some("mailto:a@x.com".to_string()),
                    forensic_report_target: None,
                    raw_record: Some("v=DMARC1; p=none; rua=mailto:a@x.com".to_string()),
                },
                SpfResult {
                    raw_record: Some("v=spf1 include:x.com".to_string()),
                    strictness: SpfStrictness::Unknown,
                },
            ),
            false,
        );
        assert!(output.contains("[*] Domain: example.com"));
        assert!(output.contains("DMARC Policy: none"));
        assert!(output.contains("[!] DMARC policy is weak: none"));
        assert!(output.contains("DMARC Reporting: rua=mailto:a@x.com, ruf="));
        assert!(output.contains("Full DMARC Record: v=DMARC1; p=none; rua=mailto:a@x.com"));
        assert!(output.contains("SPF Strictness: unknown"));
        assert!(output.contains("[!] SPF is weak or undefined: unknown"));
        assert!(output.ends_with(&format!("{}\n", "-".repeat(SEPARATOR_WIDTH))));
    }

    #[test]
    fn test_present_missing_records() {
        let output = render(&result(DmarcResult::default(), SpfResult::absent()), false);
        assert!(output.contains("[!] No DMARC policy found"));
        assert!(output.contains("[!] No SPF record found"));
        assert!(!output.contains("SPF Strictness"));
    }

    #[test]
    fn test_present_strong_posture_has_no_alerts() {
        let output = render(
            &result(
                DmarcResult {
                    policy: Some("reject".to_string()),
                    raw_record: Some("v=DMARC1; p=reject".to_string()),
                    ..Default::default()
                },
                SpfResult {
                    raw_record: Some("v=spf1 -all".to_string()),
                    strictness: SpfStrictness::Strict,
                },
            ),
            false,
        );
        assert!(!output.contains("[!]"));
        assert!(!output.contains("DMARC Reporting"));
    }

    #[test]
    fn test_verbose_shows_lookup_failures() {
        let mut failed = result(DmarcResult::default(), SpfResult::absent());
        failed.spf_lookup = LookupStatus::Failed(ResolutionError::Timeout);

        let quiet = render(&failed, false);
        assert!(!quiet.contains("Lookup Failed"));

        let verbose = render(&failed, true);
        assert!(verbose.contains("SPF Lookup Failed: DNS query timed out"));
        assert!(!verbose.contains("DMARC Lookup Failed"));
    }

    fn report(resolution_failures: usize, log_failures: usize) -> ScanReport {
        ScanReport {
            total_domains: 3,
            flagged: 2,
            logged: 3 - log_failures,
            log_failures,
            resolution_failures,
            log_path: std::path::PathBuf::from("log.csv"),
            elapsed_seconds: 1.5,
        }
    }

    #[test]
    fn test_finish_prints_single_summary_line() {
        let mut presenter = ConsolePresenter::new(Vec::new(), false, false);
        presenter.finish(&report(0, 0)).unwrap();
        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(
            output,
            "Scanned 3 domains (2 with weaknesses) in 1.5s - results appended to log.csv\n"
        );
    }

    #[test]
    fn test_finish_mentions_failures() {
        let mut presenter = ConsolePresenter::new(Vec::new(), false, false);
        presenter.finish(&report(2, 1)).unwrap();
        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("; 2 DNS lookup(s) failed"));
        assert!(output.contains("; 1 record(s) not logged"));
    }
}
