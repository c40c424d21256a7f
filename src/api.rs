//! Defines the [`BlogApi`] trait and its HTTP implementation,
//! [`HttpBlogApi`], along with the [`Error`] type for fetch failures. The
//! blog publishes two fixed resources relative to the site root:
//!
//! * `app/api/posts.json`, a JSON array of posts ([`crate::post::Post`])
//! * `app/api/index.json`, an unstructured metadata object (last update
//!   time, post count, whatever else the generator decides to publish)
//!
//! Callers take the trait rather than the concrete client so the fetch
//! dependency can be swapped out (tests use an in-memory fake).

use std::fmt;

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use url::Url;

use crate::post::{decode_posts, Posts};

/// Path of the posts collection, relative to the site root.
const POSTS_PATH: &str = "app/api/posts.json";

/// Path of the blog metadata object, relative to the site root.
const METADATA_PATH: &str = "app/api/index.json";

/// The fetch operations a blog front end needs. Implementations must be
/// stateless with respect to the returned data: every call performs a fresh
/// fetch, and the caller owns the result.
pub trait BlogApi {
    /// Fetches the full post collection. The returned order is the server's
    /// order; an empty collection is a successful result, not an error.
    fn posts(&self) -> Result<Posts>;

    /// Fetches the blog metadata object. The shape is unspecified by the
    /// generator, so it's surfaced as a raw JSON value.
    fn metadata(&self) -> Result<serde_json::Value>;
}

/// A [`BlogApi`] over HTTP, rooted at the deployed blog's base URL.
pub struct HttpBlogApi {
    client: Client,
    root: Url,
}

impl HttpBlogApi {
    /// Constructs a client for the blog deployed at `root`. The root's path
    /// is given a trailing slash if it lacks one; without it, [`Url::join`]
    /// would treat the last path segment as a "file" name and drop it
    /// instead of descending into it.
    pub fn new(root: Url) -> HttpBlogApi {
        let mut root = root;
        if !root.path().ends_with('/') {
            let path = format!("{}/", root.path());
            root.set_path(&path);
        }
        HttpBlogApi {
            client: Client::new(),
            root,
        }
    }

    fn get(&self, path: &str) -> Result<String> {
        let url = self.root.join(path)?;
        info!("GET {}", url);
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status, url));
        }
        let body = response.text()?;
        debug!("GET {}: {} bytes", url, body.len());
        Ok(body)
    }
}

impl BlogApi for HttpBlogApi {
    fn posts(&self) -> Result<Posts> {
        Ok(decode_posts(&self.get(POSTS_PATH)?)?)
    }

    fn metadata(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.get(METADATA_PATH)?)?)
    }
}

/// Represents the result of a fetch operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a failed fetch: the request never completed, the server
/// answered with a non-2xx status, or the body wasn't the expected JSON.
#[derive(Debug)]
pub enum Error {
    /// Returned when the request failed below the HTTP layer (connection
    /// refused, DNS, timeout, etc.).
    Http(reqwest::Error),

    /// Returned when the server answered with a non-2xx status.
    Status(StatusCode, Url),

    /// Returned when the response body couldn't be decoded as the expected
    /// JSON shape.
    Deserialize(serde_json::Error),

    /// Returned when a resource path can't be joined onto the root URL.
    UrlParse(url::ParseError),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Http(err) => err.fmt(f),
            Error::Status(status, url) => {
                write!(f, "GET {}: unexpected status: {}", url, status)
            }
            Error::Deserialize(err) => {
                write!(f, "decoding response body: {}", err)
            }
            Error::UrlParse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Status(_, _) => None,
            Error::Deserialize(err) => Some(err),
            Error::UrlParse(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for Error {
    /// Converts a [`reqwest::Error`] into an [`Error`]. It allows us to use
    /// the `?` operator for request-sending functions.
    fn from(err: reqwest::Error) -> Error {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    /// Converts a [`serde_json::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator for body-decoding functions.
    fn from(err: serde_json::Error) -> Error {
        Error::Deserialize(err)
    }
}

impl From<url::ParseError> for Error {
    /// Converts a [`url::ParseError`] into an [`Error`]. It allows us to use
    /// the `?` operator for URL joining functions.
    fn from(err: url::ParseError) -> Error {
        Error::UrlParse(err)
    }
}
