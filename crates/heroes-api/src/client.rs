//! HTTP client for the heroes web API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use roster::{Hero, HeroId, HeroStore, MessageSink, NewHero};

use crate::{HeroApiConfig, HeroApiError};

/// Client for the heroes web API.
///
/// Holds a pooled [`reqwest::Client`] and the injected [`MessageSink`];
/// cheap to share behind an `Arc` and safe to use from concurrent tasks —
/// calls carry no shared mutable state. The [`HeroStore`] impl is the
/// public surface; the request helpers below it return [`HeroApiError`]
/// and are recovered exactly once, at the trait-method boundary.
pub struct HeroApiClient {
    http: Client,
    config: HeroApiConfig,
    sink: Arc<dyn MessageSink>,
}

impl HeroApiClient {
    /// Creates a client from its configuration and the message sink to
    /// narrate operations into.
    pub fn new(
        config: HeroApiConfig,
        sink: Arc<dyn MessageSink>,
    ) -> Result<Self, HeroApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { http, config, sink })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/heroes", self.config.base_url)
    }

    fn hero_url(&self, id: HeroId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// Rejects non-2xx responses (capturing the body text as the error
    /// detail) and decodes the JSON body of the rest.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, HeroApiError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = response.text().await.unwrap_or_default();
            return Err(HeroApiError::Status { status, detail });
        }

        Ok(response.json().await?)
    }

    async fn fetch_all(&self) -> Result<Vec<Hero>, HeroApiError> {
        let url = self.collection_url();
        debug!(url = %url, "fetching all heroes");

        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn fetch_one(&self, id: HeroId) -> Result<Hero, HeroApiError> {
        let url = self.hero_url(id);
        debug!(url = %url, id = %id, "fetching hero");

        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn post_new(&self, new_hero: &NewHero) -> Result<Hero, HeroApiError> {
        let url = self.collection_url();
        debug!(url = %url, name = %new_hero.name, "creating hero");

        let response = self.http.post(&url).json(new_hero).send().await?;
        Self::decode(response).await
    }

    async fn put_replacement(&self, hero: &Hero) -> Result<Hero, HeroApiError> {
        let url = self.collection_url();
        debug!(url = %url, id = %hero.id, "updating hero");

        let response = self.http.put(&url).json(hero).send().await?;
        Self::decode(response).await
    }

    async fn delete_by_id(&self, id: HeroId) -> Result<Hero, HeroApiError> {
        let url = self.hero_url(id);
        debug!(url = %url, id = %id, "deleting hero");

        let response = self.http.delete(&url).send().await?;
        Self::decode(response).await
    }

    async fn fetch_matching(&self, term: &str) -> Result<Vec<Hero>, HeroApiError> {
        let url = self.collection_url();
        debug!(url = %url, term = %term, "searching heroes");

        let response = self.http.get(&url).query(&[("name", term)]).send().await?;
        Self::decode(response).await
    }

    /// Recovers a failed operation into `fallback`.
    ///
    /// The raw error goes to the diagnostic channel; the sink gets one line
    /// naming the operation and the server-supplied detail. The caller never
    /// sees the failure.
    fn recover<T>(&self, operation: &str, fallback: T, err: HeroApiError) -> T {
        error!(operation = %operation, error = %err, "hero API request failed");
        self.sink.add(&format!("{operation} failed: {}", err.detail()));
        fallback
    }

    fn log(&self, message: &str) {
        self.sink.add(message);
    }
}

#[async_trait]
impl HeroStore for HeroApiClient {
    async fn heroes(&self) -> Vec<Hero> {
        match self.fetch_all().await {
            Ok(heroes) => {
                self.log("fetched heroes");
                heroes
            }
            Err(err) => self.recover("get_heroes", Vec::new(), err),
        }
    }

    async fn hero(&self, id: HeroId) -> Option<Hero> {
        match self.fetch_one(id).await {
            Ok(hero) => {
                self.log(&format!("fetched hero id={id}"));
                Some(hero)
            }
            Err(err) => self.recover(&format!("get_hero id={id}"), None, err),
        }
    }

    async fn add_hero(&self, new_hero: NewHero) -> Option<Hero> {
        match self.post_new(&new_hero).await {
            Ok(created) => {
                self.log(&format!("added hero id={}", created.id));
                Some(created)
            }
            Err(err) => self.recover("add_hero", None, err),
        }
    }

    async fn update_hero(&self, hero: &Hero) -> Option<Hero> {
        match self.put_replacement(hero).await {
            Ok(updated) => {
                self.log(&format!("updated hero id={}", updated.id));
                Some(updated)
            }
            Err(err) => self.recover("update_hero", None, err),
        }
    }

    async fn delete_hero(&self, id: HeroId) -> Option<Hero> {
        match self.delete_by_id(id).await {
            Ok(removed) => {
                self.log(&format!("deleted hero id={id}"));
                Some(removed)
            }
            Err(err) => self.recover(&format!("delete_hero id={id}"), None, err),
        }
    }

    async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        // Whitespace-only terms never reach the network.
        if term.trim().is_empty() {
            return Vec::new();
        }

        match self.fetch_matching(term).await {
            Ok(matches) => {
                self.log(&format!("found heroes matching \"{term}\""));
                matches
            }
            Err(err) => self.recover("search_heroes", Vec::new(), err),
        }
    }
}
