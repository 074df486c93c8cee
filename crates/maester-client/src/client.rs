//! Ice and Fire API client.
//!
//! [`ApiClient`] wraps a pooled [`reqwest::Client`] and exposes the
//! three operations the directory needs: house pages, member
//! resolution, and character detail. All API wire types are private to
//! this module — callers only ever see `maester-core` types.
//!
//! # Example
//!
//! ```rust,no_run
//! use maester_client::{ApiClient, ClientOptions};
//! use maester_core::Page;
//!
//! # async fn run() -> maester_core::Result<()> {
//! let client = ApiClient::new(ClientOptions::default())?;
//! let houses = client.houses(Page::FIRST).await?;
//! for house in &houses {
//!     println!("{} ({} sworn members)", house.name, house.sworn_members.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use futures::stream::{self, StreamExt};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error};

use maester_core::{Character, CharacterId, CharacterSummary, Error, House, Page, Result};

/// Default base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://anapioficeandfire.com/api";

// ============================================================================
// ClientOptions
// ============================================================================

/// Construction parameters for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Bound on concurrent member-resolution requests.
    ///
    /// Every sworn member on a page is fetched by its own request; this
    /// only caps how many are in flight at once.
    pub concurrency: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            concurrency: 8,
        }
    }
}

// ============================================================================
// ApiClient
// ============================================================================

/// Client for the Ice and Fire REST API.
///
/// Constructed once, then cheaply cloned — `reqwest::Client` is an
/// `Arc` internally. Performs no retries and no caching; each call is
/// one GET.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    concurrency: usize,
}

impl ApiClient {
    /// Builds a client from the given options.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            concurrency: options.concurrency.max(1),
        })
    }

    /// Fetches one fixed-size page of houses.
    ///
    /// `GET {base}/houses?page={n}&pageSize=10`. The page selector is
    /// already clamped to 1 by construction. A page past the end of the
    /// collection returns an empty vector, which the view renders as an
    /// empty-page message rather than an error.
    pub async fn houses(&self, page: Page) -> Result<Vec<House>> {
        let url = format!(
            "{}/houses?page={}&pageSize={}",
            self.base_url,
            page.number(),
            Page::SIZE
        );
        let raw: Vec<RawHouse> = self.get_json(&url, None).await?;
        Ok(raw
            .into_iter()
            .map(|h| House {
                name: h.name,
                sworn_members: h.sworn_members,
            })
            .collect())
    }

    /// Resolves a single sworn-member reference URL to a summary.
    ///
    /// The URL comes from the API itself (a house's `swornMembers`
    /// entry) and is fetched as-is. A 404 maps to [`Error::NotFound`].
    pub async fn member(&self, url: &str) -> Result<CharacterSummary> {
        let raw: RawCharacter = self.get_json(url, Some("member")).await?;
        Ok(CharacterSummary::new(raw.name, &raw.died))
    }

    /// Resolves every member reference independently and concurrently.
    ///
    /// One GET per URL, no batching — the API has no bulk endpoint.
    /// At most `concurrency` requests are in flight at once. Results
    /// come back in input order, and one member failing does not fail
    /// the rest: each URL is paired with its own `Result`.
    pub async fn members(&self, urls: &[String]) -> Vec<(String, Result<CharacterSummary>)> {
        stream::iter(urls.iter().cloned())
            .map(|url| async move {
                let result = self.member(&url).await;
                (url, result)
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }

    /// Fetches the full character record for the detail view.
    ///
    /// `GET {base}/characters/{id}`. A 404 maps to [`Error::NotFound`],
    /// which the view renders as "not found" rather than as an error.
    pub async fn character(&self, id: CharacterId) -> Result<Character> {
        let url = format!("{}/characters/{id}", self.base_url);
        let raw: RawCharacter = self
            .get_json(&url, Some(&format!("character {id}")))
            .await?;
        Ok(Character {
            name: raw.name,
            gender: raw.gender,
            culture: raw.culture,
            born: raw.born,
            died: raw.died,
            titles: raw.titles,
            aliases: raw.aliases,
        })
    }

    /// One GET, decoded into `T`.
    ///
    /// `missing` names the entity a 404 should report as not found;
    /// when `None`, a 404 is treated like any other HTTP error.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, missing: Option<&str>) -> Result<T> {
        debug!(%url, "sending API request");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(%url, error = %e, "API request failed (transport)");
            Error::transport(e)
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(what) = missing {
                debug!(%url, "entity not found");
                return Err(Error::not_found(what));
            }
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            error!(%url, %status, "API returned error status");
            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(Error::transport)?;
        Ok(serde_json::from_str(&body)?)
    }
}

// ============================================================================
// Private wire types
// ============================================================================

// Unknown fields are ignored; absent fields default to empty. The API
// returns "" (and [""]-style lists) for unknown values.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHouse {
    #[serde(default)]
    name: String,
    #[serde(default)]
    sworn_members: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCharacter {
    #[serde(default)]
    name: String,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    culture: String,
    #[serde(default)]
    born: String,
    #[serde(default)]
    died: String,
    #[serde(default)]
    titles: Vec<String>,
    #[serde(default)]
    aliases: Vec<String>,
}
