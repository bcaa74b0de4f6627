// API client module: a small blocking HTTP client that talks to the GitHub
// REST API. Only one endpoint is used (create gist), so the client stays
// synchronous and thin. The `SnippetPublisher` trait is the seam the create
// command depends on, which lets tests swap in a fake.

use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Everything needed to create one snippet. Built per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetRequest {
    pub filename: String,
    pub content: Vec<u8>,
    pub public: bool,
    pub description: Option<String>,
}

/// The created resource as returned by the service.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    #[serde(default)]
    pub id: String,
    pub html_url: String,
}

/// Non-success response from the service.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("GitHub API error (status {status}): {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

/// Anything that can publish a snippet and hand back the created resource.
pub trait SnippetPublisher {
    fn create_snippet(&self, req: &SnippetRequest) -> Result<Snippet>;
}

/// Wire shape of `POST /gists`.
#[derive(Serialize, Debug)]
struct CreateGist<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    public: bool,
    files: BTreeMap<&'a str, GistFile>,
}

#[derive(Serialize, Debug)]
struct GistFile {
    content: String,
}

/// GitHub's error body carries a human readable `message`.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl<'a> CreateGist<'a> {
    fn from_request(req: &'a SnippetRequest) -> Self {
        let mut files = BTreeMap::new();
        files.insert(
            req.filename.as_str(),
            GistFile {
                content: String::from_utf8_lossy(&req.content).into_owned(),
            },
        );
        CreateGist {
            description: req.description.as_deref(),
            public: req.public,
            files,
        }
    }
}

/// Blocking GitHub client authenticated with a personal access token.
#[derive(Clone)]
pub struct GistClient {
    client: Client,
    base_url: String,
}

impl GistClient {
    /// Build a client for `base_url` that sends `token` as a bearer
    /// credential on every request.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers(token)?)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(GistClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client configured by the environment variable
    /// `GITHUB_API_URL` or fall back to the public GitHub API.
    pub fn from_env(token: &str) -> Result<Self> {
        let base_url =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self::new(&base_url, token)
    }
}

impl SnippetPublisher for GistClient {
    fn create_snippet(&self, req: &SnippetRequest) -> Result<Snippet> {
        let url = format!("{}/gists", &self.base_url);
        debug!(
            "POST {} file={} bytes={} public={}",
            url,
            req.filename,
            req.content.len(),
            req.public
        );
        let res = self
            .client
            .post(&url)
            .json(&CreateGist::from_request(req))
            .send()
            .context("Failed to send create gist request")?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let txt = res.text().unwrap_or_else(|_| "".into());
            return Err(api_error(status, &txt).into());
        }
        let gist: Snippet = res.json().context("Parsing create gist response json")?;
        debug!("created gist {}", gist.id);
        Ok(gist)
    }
}

fn default_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
        .context("Token contains characters not allowed in an HTTP header")?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("gist-cli/", env!("CARGO_PKG_VERSION"))),
    );
    Ok(headers)
}

fn api_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string());
    ApiError { status, message }
}
