//! Resolver abstraction used by the scan.

use std::future::Future;
use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ResolutionError;

use super::records::lookup_txt_records;

/// Source of TXT answer sets.
///
/// The scan only ever asks for TXT records, so this is the single seam between
/// the orchestrator and DNS. Tests substitute a canned implementation.
pub trait TxtResolver: Send + Sync {
    /// Returns the TXT answers for `name`, or an empty vector when there are none.
    fn lookup_txt(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<String>, ResolutionError>> + Send;
}

/// `TxtResolver` backed by hickory's async resolver.
#[derive(Clone)]
pub struct HickoryTxtResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryTxtResolver {
    /// Wraps a resolver built by [`init_resolver`](crate::initialization::init_resolver).
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

impl TxtResolver for HickoryTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, ResolutionError> {
        lookup_txt_records(name, &self.resolver).await
    }
}
