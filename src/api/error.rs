use thiserror::Error;

/// Why a chat request did not produce a reply.
///
/// Every variant is a flavor of the same failure: the controller collapses
/// all of them into one fallback message. The variants exist for logging.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to reach chat endpoint {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("chat endpoint returned HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("chat endpoint reported status '{status}': {detail}")]
    Rejected { status: String, detail: String },
}
