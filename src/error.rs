use thiserror::Error;

/// Failure kinds for a search request.
///
/// All of these are handled the same way at the dispatch boundary: logged and
/// swallowed. A failed search leaves the table untouched; the request gate and
/// the preloader are reset on every path.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed search response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("search task dropped before completing")]
    Canceled,
}

impl SearchError {
    pub fn status(status: u16) -> Self {
        SearchError::Status { status }
    }
}
