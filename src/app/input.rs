//! Domain input sources.
//!
//! Domains come from exactly one source, picked by precedence:
//! `--domain`, then the positional file, then piped stdin.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::error_handling::InputError;

/// Where the domains for a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single domain given on the command line
    Domain(String),
    /// A line-delimited file
    File(PathBuf),
    /// Line-delimited standard input
    Stdin,
}

/// Picks the input source for a run.
///
/// # Arguments
///
/// * `domain` - Domain passed with `--domain`
/// * `file` - Positional input file
/// * `stdin_is_terminal` - Whether stdin is an interactive terminal (not piped)
///
/// # Errors
///
/// Returns `InputError::NoInput` if no domain or file was given and stdin is a
/// terminal.
pub fn resolve_input_source(
    domain: Option<&str>,
    file: Option<&Path>,
    stdin_is_terminal: bool,
) -> Result<InputSource, InputError> {
    if let Some(domain) = domain {
        return Ok(InputSource::Domain(domain.to_string()));
    }
    if let Some(file) = file {
        return Ok(InputSource::File(file.to_path_buf()));
    }
    if !stdin_is_terminal {
        return Ok(InputSource::Stdin);
    }
    Err(InputError::NoInput)
}

/// Reads every domain from the source.
///
/// The whole input is read before scanning starts, so an unreadable file aborts the
/// run before any DNS query is made.
///
/// # Errors
///
/// Returns `InputError::Open` if the file cannot be opened and `InputError::Read`
/// if reading fails part-way.
pub async fn read_domains(source: &InputSource) -> Result<Vec<String>, InputError> {
    match source {
        InputSource::Domain(domain) => Ok(normalize_domain(domain).into_iter().collect()),
        InputSource::File(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|source| InputError::Open {
                    path: path.clone(),
                    source,
                })?;
            parse_domain_lines(BufReader::new(file), &path.display().to_string()).await
        }
        InputSource::Stdin => {
            log::info!("Reading domains from stdin");
            parse_domain_lines(BufReader::new(tokio::io::stdin()), "stdin").await
        }
    }
}

/// Reads one domain per line, trimming whitespace and skipping blank lines.
///
/// No other validation happens here; malformed names are left to the resolver.
pub async fn parse_domain_lines<R>(reader: R, origin: &str) -> Result<Vec<String>, InputError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut domains = Vec::new();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => domains.extend(normalize_domain(&line)),
            Ok(None) => break,
            Err(source) => {
                return Err(InputError::Read {
                    origin: origin.to_string(),
                    source,
                })
            }
        }
    }
    log::debug!("Read {} domains from {}", domains.len(), origin);
    Ok(domains)
}

/// Trims an entry; `None` when nothing is left.
pub(crate) fn normalize_domain(line: &str) -> Option<String> {
    let trimmed = line.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_domain_takes_precedence() {
        let source =
            resolve_input_source(Some("example.com"), Some(Path::new("list.txt")), false).unwrap();
        assert_eq!(source, InputSource::Domain("example.com".to_string()));
    }

    #[test]
    fn test_file_takes_precedence_over_stdin() {
        let source = resolve_input_source(None, Some(Path::new("list.txt")), false).unwrap();
        assert_eq!(source, InputSource::File(PathBuf::from("list.txt")));
    }

    #[test]
    fn test_piped_stdin() {
        assert_eq!(
            resolve_input_source(None, None, false).unwrap(),
            InputSource::Stdin
        );
    }

    #[test]
    fn test_no_input_on_terminal() {
        assert!(matches!(
            resolve_input_source(None, None, true),
            Err(InputError::NoInput)
        ));
    }

    #[tokio::test]
    async fn test_parse_domain_lines_trims_and_skips_blanks() {
        let input: &[u8] = b"  example.com  \n\n\t\nexample.org\r\n   \nexample.com\n";
        let domains = parse_domain_lines(input, "test").await.unwrap();
        assert_eq!(domains, vec!["example.com", "example.org", "example.com"]);
    }

    #[tokio::test]
    async fn test_read_domains_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("domains.txt");
        std::fs::write(&path, "a.example\n\nb.example\n").unwrap();

        let domains = read_domains(&InputSource::File(path)).await.unwrap();
        assert_eq!(domains, vec!["a.example", "b.example"]);
    }

    #[tokio::test]
    async fn test_read_domains_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("nope.txt");
        let err = read_domains(&InputSource::File(path)).await.unwrap_err();
        assert!(matches!(err, InputError::Open { .. }));
    }

    #[tokio::test]
    async fn test_read_single_domain() {
        let domains = read_domains(&InputSource::Domain(" example.com ".to_string()))
            .await
            .unwrap();
        assert_eq!(domains, vec!["example.com"]);

        let blank = read_domains(&InputSource::Domain("   ".to_string()))
            .await
            .unwrap();
        assert!(blank.is_empty());
    }
}
