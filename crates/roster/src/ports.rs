//! Port traits implemented by infrastructure crates.
//!
//! [`HeroStore`] is the upstream interface the presentation layer consumes;
//! [`MessageSink`] is the capability the data-access service uses to narrate
//! its activity. Both are supplied to the service at construction time and
//! are replaceable for testing.

use async_trait::async_trait;

use crate::{Hero, HeroId, NewHero};

/// Append-only sink for short operational messages.
///
/// Fire-and-forget: `add` has no return value and no failure mode visible to
/// the caller. The data-access service writes one line per completed
/// operation (confirmatory on success, explanatory on a recovered failure);
/// the presentation layer owns reading the accumulated log back out.
pub trait MessageSink: Send + Sync {
    /// Appends one message to the log.
    fn add(&self, message: &str);
}

/// Data access for the remote hero collection.
///
/// Each operation issues at most one request and resolves exactly once. The
/// futures returned here **never fail**: transport errors, non-2xx statuses,
/// and undecodable bodies are all recovered inside the implementation, which
/// substitutes the empty/absent fallback (`vec![]` or `None`) after recording
/// the failure on its diagnostic channel and the [`MessageSink`]. Callers
/// therefore cannot distinguish "failed, used fallback" from "legitimately
/// absent" — by design; the running message log is where failures surface.
///
/// Calls are independent and stateless: no retries, no caching, no
/// deduplication of concurrent calls, and no completion-ordering guarantee
/// between them. A caller that drops a returned future abandons the
/// underlying request; no cleanup is attempted.
#[async_trait]
pub trait HeroStore: Send + Sync {
    /// Fetches all heroes. Empty on failure.
    async fn heroes(&self) -> Vec<Hero>;

    /// Fetches one hero by id. `None` when the hero is absent or the
    /// request failed.
    async fn hero(&self, id: HeroId) -> Option<Hero>;

    /// Creates a hero; the server assigns the id. Returns the completed
    /// record as the server echoed it.
    async fn add_hero(&self, new_hero: NewHero) -> Option<Hero>;

    /// Replaces a hero record wholesale, keyed by its id. Returns the
    /// server's echo of the updated record.
    async fn update_hero(&self, hero: &Hero) -> Option<Hero>;

    /// Deletes a hero by id. Returns the server's echo of the removed
    /// record.
    async fn delete_hero(&self, id: HeroId) -> Option<Hero>;

    /// Fetches heroes whose name matches `term`. An empty or
    /// whitespace-only term short-circuits to `vec![]` without touching the
    /// network.
    async fn search_heroes(&self, term: &str) -> Vec<Hero>;
}
