//! Response validation for fetched pages
//!
//! Simple validation based on HTTP status codes. Anything outside 2xx means
//! the candidate is skipped; static hosts routinely 404 stale links.

use log::debug;

use crate::search::errors::IndexingError;

/// Validate a fetched response by status code
///
/// # Arguments
/// * `url` - Page URL (for logging and the error)
/// * `http_status` - HTTP status code from the response
pub fn validate_response(url: &str, http_status: u16) -> Result<(), IndexingError> {
    if (200..300).contains(&http_status) {
        debug!("HTTP {} OK for {}", http_status, url);
        return Ok(());
    }
    debug!("HTTP error status {} for {}", http_status, url);
    Err(IndexingError::HttpStatus {
        url: url.to_string(),
        status: http_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_404_rejects() {
        let err = validate_response("https://example.com/gone.html", 404).unwrap_err();
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[test]
    fn test_http_500_rejects() {
        assert!(validate_response("https://example.com", 500).is_err());
    }

    #[test]
    fn test_http_301_rejects() {
        // reqwest follows redirects; a 3xx reaching us means the chain was cut.
        assert!(validate_response("https://example.com", 301).is_err());
    }

    #[test]
    fn test_http_200_accepts() {
        assert!(validate_response("https://example.com", 200).is_ok());
        assert!(validate_response("https://example.com", 204).is_ok());
    }

    struct Recorder;

    static RECORDS: parking_lot::Mutex<Vec<(log::Level, String)>> = parking_lot::const_mutex(Vec::new());
    static RECORDER: Recorder = Recorder;

    impl log::Log for Recorder {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            RECORDS.lock().push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_rejection_leaves_warning_to_progress_reporter() {
        log::set_logger(&RECORDER).ok();
        log::set_max_level(log::LevelFilter::Trace);

        let url = "https://example.com/validator-level-check.html";
        assert!(validate_response(url, 404).is_err());

        let records = RECORDS.lock();
        let ours: Vec<_> = records.iter().filter(|(_, msg)| msg.contains(url)).collect();
        assert!(!ours.is_empty());
        assert!(ours.iter().all(|(level, _)| *level == log::Level::Debug));
    }
}
