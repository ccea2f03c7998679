use thiserror::Error;

/// Everything that can stop a report run.
///
/// The library never exits the process; the CLI maps these kinds to exit codes.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Year or country count could not be used.
    #[error("{0}")]
    InvalidInput(String),

    /// The population source has nothing for the requested year.
    #[error("There is no information for the specified year ({year})")]
    NoDataForYear { year: i32 },

    /// Non-success HTTP status from one of the sources.
    #[error("Failed operation. Status code: {status} (GET {url})")]
    UpstreamFetchFailed { url: String, status: u16 },

    /// The source answered successfully but the body carries an API error.
    #[error("{source_name} api error: {message}")]
    Upstream {
        source_name: &'static str,
        message: String,
    },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode {what}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Rows without a usable conversion rate under the strict gap policy.
    #[error("no usable conversion rate for: {}", country_codes.join(", "))]
    JoinGap { country_codes: Vec<String> },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ReportError> = std::result::Result<T, E>;
