//! DNS error categorization.
//!
//! Splits resolver errors into "the name has no TXT records" (an empty answer set)
//! and genuine infrastructure failures.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;

use super::types::ResolutionError;

/// Categorizes a `ResolveError` from a TXT lookup.
///
/// # Returns
///
/// `None` when the error means the record set is simply absent (NXDOMAIN or an
/// empty NOERROR answer), otherwise the `ResolutionError` describing the failure.
pub fn categorize_resolve_error(error: &ResolveError) -> Option<ResolutionError> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            categorize_response_code(*response_code)
        }
        ResolveErrorKind::Timeout => Some(ResolutionError::Timeout),
        _ => {
            let message = error.to_string();
            // Some transports surface timeouts as I/O errors
            if message.contains("timed out") || message.contains("timeout") {
                Some(ResolutionError::Timeout)
            } else {
                Some(ResolutionError::Other(message))
            }
        }
    }
}

/// Maps the response code of an empty answer to a failure, if it is one.
pub fn categorize_response_code(code: ResponseCode) -> Option<ResolutionError> {
    match code {
        ResponseCode::NoError | ResponseCode::NXDomain => None,
        other => Some(ResolutionError::ServerFailure(format!("{other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nxdomain_and_noerror_are_absence() {
        assert_eq!(categorize_response_code(ResponseCode::NXDomain), None);
        assert_eq!(categorize_response_code(ResponseCode::NoError), None);
    }

    #[test]
    fn test_servfail_is_failure() {
        assert!(matches!(
            categorize_response_code(ResponseCode::ServFail),
            Some(ResolutionError::ServerFailure(_))
        ));
        assert!(matches!(
            categorize_response_code(ResponseCode::Refused),
            Some(ResolutionError::ServerFailure(_))
        ));
    }

    #[test]
    fn test_timeout_kind() {
        let error = ResolveError::from(ResolveErrorKind::Timeout);
        assert_eq!(
            categorize_resolve_error(&error),
            Some(ResolutionError::Timeout)
        );
    }

    #[test]
    fn test_other_errors_keep_message() {
        let error = ResolveError::from("connection refused");
        match categorize_resolve_error(&error) {
            Some(ResolutionError::Other(message)) => {
                assert!(message.contains("connection refused"))
            }
            other => panic!("Expected Other, got {:?}", other),
        }
    }
}
