// Shared test helpers: canned resolver and in-memory presenter.
//
// Integration tests never touch live DNS; every answer comes from `MockResolver`.

use std::collections::HashMap;
use std::sync::Mutex;

use spoofx::error_handling::ResolutionError;
use spoofx::policy::WeaknessFlags;
use spoofx::presenter::Presenter;
use spoofx::{DomainScanResult, PresentError, TxtResolver};

/// Resolver answering TXT queries from a fixed table.
/// Names without an entry answer with an empty record set.
#[derive(Default)]
pub struct MockResolver {
    answers: HashMap<String, Result<Vec<String>, ResolutionError>>,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every builder
impl MockResolver {
    pub fn with(mut self, name: &str, records: &[&str]) -> Self {
        self.answers.insert(
            name.to_string(),
            Ok(records.iter().map(|r| r.to_string()).collect()),
        );
        self
    }

    pub fn failing(mut self, name: &str, error: ResolutionError) -> Self {
        self.answers.insert(name.to_string(), Err(error));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("query log poisoned").clone()
    }
}

impl TxtResolver for MockResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, ResolutionError> {
        self.queries
            .lock()
            .expect("query log poisoned")
            .push(name.to_string());
        self.answers
            .get(name)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Presenter that keeps every result it is handed.
#[derive(Default)]
pub struct CollectingPresenter {
    pub seen: Vec<(DomainScanResult, WeaknessFlags)>,
}

impl Presenter for CollectingPresenter {
    fn present(
        &mut self,
        result: &DomainScanResult,
        flags: &WeaknessFlags,
    ) -> Result<(), PresentError> {
        self.seen.push((result.clone(), flags.clone()));
        Ok(())
    }
}

#[allow(dead_code)]
pub fn domains(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
