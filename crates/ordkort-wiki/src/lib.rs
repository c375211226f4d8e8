//! Ordkort Wikipedia Layer
//!
//! Article retrieval against the MediaWiki API. Swedish Wikipedia is the
//! default source; the language is configurable.
//!
//! Retrieval outcomes that a learner can act on (topic ambiguous, no article
//! found) are typed errors carrying enough context to render the user-facing
//! notice string the UI shows verbatim. Transport failures stay plain errors.

#![warn(missing_docs)]

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Default article language (Swedish Wikipedia)
pub const DEFAULT_LANGUAGE: &str = "sv";

/// Maximum search hits requested from the API
const SEARCH_LIMIT: usize = 10;

/// Maximum disambiguation suggestions shown to the learner
const SUGGESTION_LIMIT: usize = 5;

/// Errors that can occur during article retrieval
#[derive(Error, Debug)]
pub enum WikiError {
    /// Network or API communication error
    #[error("Wikipedia request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected API shape
    #[error("Invalid Wikipedia response: {0}")]
    InvalidResponse(String),

    /// No article exists for the topic
    #[error("No article found for '{topic}'")]
    NotFound {
        /// The topic that was looked up
        topic: String,
    },

    /// The topic resolved to a disambiguation page
    #[error("Topic '{topic}' is ambiguous")]
    Ambiguous {
        /// The topic that was looked up
        topic: String,
        /// More specific alternatives to offer
        options: Vec<String>,
    },
}

impl WikiError {
    /// Render the learner-facing notice for this error, if it has one
    ///
    /// Ambiguous and not-found outcomes become `⚠️`-prefixed strings that the
    /// rendering layer displays in place of article content. Transport errors
    /// have no notice and must be handled as faults.
    pub fn user_notice(&self) -> Option<String> {
        match self {
            WikiError::Ambiguous { topic, options } => Some(format!(
                "⚠️ Ämnet '{}' har flera betydelser. Välj ett mer specifikt ämne.\nFörslag: {}",
                topic,
                options.join(", ")
            )),
            WikiError::NotFound { topic } => {
                Some(format!("⚠️ Ingen artikel hittades för '{}'.", topic))
            }
            _ => None,
        }
    }
}

/// Client for the MediaWiki API of one language edition
pub struct WikiClient {
    language: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Deserialize)]
struct SearchQuery {
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Deserialize)]
struct PagesResponse {
    query: Option<PagesQuery>,
}

#[derive(Deserialize)]
struct PagesQuery {
    pages: Vec<Page>,
}

#[derive(Deserialize)]
struct Page {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    pageprops: Option<PageProps>,
    #[serde(default)]
    extract: Option<String>,
}

#[derive(Deserialize)]
struct PageProps {
    #[serde(default)]
    disambiguation: Option<String>,
}

impl WikiClient {
    /// Create a client for the given language edition (e.g. "sv", "en")
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Language edition this client queries
    pub fn language(&self) -> &str {
        &self.language
    }

    fn api_url(&self) -> String {
        format!("https://{}.wikipedia.org/w/api.php", self.language)
    }

    /// Search for article titles matching a topic
    ///
    /// Returns candidate titles in relevance order; an empty list means no
    /// hits, which the caller surfaces to the learner.
    pub async fn search(&self, topic: &str) -> Result<Vec<String>, WikiError> {
        debug!("Searching Wikipedia ({}) for '{}'", self.language, topic);

        let limit = SEARCH_LIMIT.to_string();
        let response: SearchResponse = self
            .client
            .get(self.api_url())
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", topic),
                ("srlimit", limit.as_str()),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()
            .await?
            .json()
            .await?;

        let titles = response
            .query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default();

        Ok(titles)
    }

    /// Fetch the plain-text content of an article by title
    ///
    /// # Errors
    ///
    /// - `WikiError::NotFound` if no page exists under the title
    /// - `WikiError::Ambiguous` if the title resolves to a disambiguation
    ///   page, carrying up to five more specific suggestions
    /// - `WikiError::Http` / `WikiError::InvalidResponse` on transport or
    ///   decoding failures
    pub async fn fetch_article(&self, title: &str) -> Result<String, WikiError> {
        debug!("Fetching Wikipedia ({}) article '{}'", self.language, title);

        let response: PagesResponse = self
            .client
            .get(self.api_url())
            .query(&[
                ("action", "query"),
                ("prop", "extracts|pageprops"),
                ("ppprop", "disambiguation"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()
            .await?
            .json()
            .await?;

        let page = response
            .query
            .and_then(|q| q.pages.into_iter().next())
            .ok_or_else(|| WikiError::InvalidResponse("no pages in response".to_string()))?;

        if page.missing {
            return Err(WikiError::NotFound {
                topic: title.to_string(),
            });
        }

        if page
            .pageprops
            .as_ref()
            .is_some_and(|p| p.disambiguation.is_some())
        {
            // Offer more specific titles from a search on the same topic
            let mut options = self.search(title).await.unwrap_or_default();
            options.retain(|t| t != title);
            options.truncate(SUGGESTION_LIMIT);
            return Err(WikiError::Ambiguous {
                topic: title.to_string(),
                options,
            });
        }

        page.extract
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| WikiError::NotFound {
                topic: title.to_string(),
            })
    }
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let client = WikiClient::new("sv");
        assert_eq!(client.api_url(), "https://sv.wikipedia.org/w/api.php");

        let client = WikiClient::new("en");
        assert_eq!(client.api_url(), "https://en.wikipedia.org/w/api.php");
    }

    #[test]
    fn test_default_language_is_swedish() {
        assert_eq!(WikiClient::default().language(), "sv");
    }

    #[test]
    fn test_ambiguous_notice_wording() {
        let err = WikiError::Ambiguous {
            topic: "Uppsala".to_string(),
            options: vec!["Uppsala kommun".to_string(), "Uppsala län".to_string()],
        };
        let notice = err.user_notice().unwrap();
        assert!(notice.starts_with("⚠️"));
        assert!(notice.contains("'Uppsala' har flera betydelser"));
        assert!(notice.contains("Förslag: Uppsala kommun, Uppsala län"));
    }

    #[test]
    fn test_not_found_notice_wording() {
        let err = WikiError::NotFound {
            topic: "Xyzzy".to_string(),
        };
        assert_eq!(
            err.user_notice().unwrap(),
            "⚠️ Ingen artikel hittades för 'Xyzzy'."
        );
    }

    #[test]
    fn test_transport_error_has_no_notice() {
        let err = WikiError::InvalidResponse("bad json".to_string());
        assert!(err.user_notice().is_none());
    }

    #[test]
    fn test_search_response_deserializes() {
        let body = r#"{
            "query": {
                "search": [
                    {"title": "Vikingatiden", "pageid": 1},
                    {"title": "Vikingaskepp", "pageid": 2}
                ]
            }
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let titles: Vec<String> = response
            .query
            .unwrap()
            .search
            .into_iter()
            .map(|h| h.title)
            .collect();
        assert_eq!(titles, vec!["Vikingatiden", "Vikingaskepp"]);
    }

    #[test]
    fn test_page_response_missing_flag() {
        let body = r#"{
            "query": {
                "pages": [
                    {"title": "Xyzzy", "missing": true}
                ]
            }
        }"#;
        let response: PagesResponse = serde_json::from_str(body).unwrap();
        let page = response.query.unwrap().pages.into_iter().next().unwrap();
        assert!(page.missing);
        assert!(page.extract.is_none());
    }

    #[test]
    fn test_page_response_disambiguation_flag() {
        let body = r#"{
            "query": {
                "pages": [
                    {
                        "title": "Uppsala",
                        "pageprops": {"disambiguation": ""},
                        "extract": "Uppsala kan syfta på..."
                    }
                ]
            }
        }"#;
        let response: PagesResponse = serde_json::from_str(body).unwrap();
        let page = response.query.unwrap().pages.into_iter().next().unwrap();
        assert!(page.pageprops.unwrap().disambiguation.is_some());
    }

    #[test]
    fn test_page_response_with_extract() {
        let body = r#"{
            "query": {
                "pages": [
                    {"title": "Vikingatiden", "extract": "Vikingatiden är en period..."}
                ]
            }
        }"#;
        let response: PagesResponse = serde_json::from_str(body).unwrap();
        let page = response.query.unwrap().pages.into_iter().next().unwrap();
        assert!(!page.missing);
        assert_eq!(page.extract.unwrap(), "Vikingatiden är en period...");
    }
}
