use reqwest::StatusCode;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to retrieve response from {requested_url} (status '{status}').")]
    Fetch {
        status: StatusCode,
        requested_url: String,
    },

    #[error(
        "Response content from {requested_url} not JSON (content-type: {}).",
        .content_type.as_deref().unwrap_or("none")
    )]
    Format {
        content_type: Option<String>,
        requested_url: String,
    },

    #[error("Response from {requested_url} is missing fields: {}.", .missing.join(", "))]
    Schema {
        missing: Vec<&'static str>,
        requested_url: String,
    },

    #[error("Failed to parse as URL '{url}'.")]
    InvalidSyntaxUrl {
        url: String,

        #[source]
        source: url::ParseError,
    },

    #[error("Http error: {0}.")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}.")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Text for a transient notification. The last character of the message
    /// is cut off, which drops the trailing period of every variant above.
    pub fn toast_message(&self) -> String {
        let mut msg = self.to_string();
        msg.pop();
        msg
    }
}
