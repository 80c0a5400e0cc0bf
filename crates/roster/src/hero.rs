//! Hero value types.
//!
//! [`Hero`] is the record the server holds; [`NewHero`] is the create
//! payload, which carries no id because the server assigns one. Both
//! serialise to the JSON shapes the heroes web API exchanges.

use serde::{Deserialize, Serialize};

use crate::HeroId;

/// A hero as persisted by the server.
///
/// Identity is the [`HeroId`]; the server is the sole authority on persisted
/// state. Clients treat returned records as immutable snapshots — an edit is
/// a full replace submitted through the update operation.
///
/// JSON shape: `{"id": 11, "name": "Dr Nice"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Server-assigned identifier, immutable once created.
    pub id: HeroId,

    /// Display name.
    pub name: String,
}

impl Hero {
    /// Creates a hero record from its parts.
    pub fn new(id: HeroId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Payload for creating a hero.
///
/// JSON shape: `{"name": "Wonder Woman"}` — no id field; the server assigns
/// the id and echoes the completed record back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHero {
    /// Display name for the hero to create.
    pub name: String,
}

impl NewHero {
    /// Creates a new-hero payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_json_shape() {
        let hero = Hero::new(HeroId::new(1), "Thor");
        let json = serde_json::to_string(&hero).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Thor"}"#);

        let back: Hero = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hero);
    }

    #[test]
    fn new_hero_carries_no_id() {
        let json = serde_json::to_string(&NewHero::new("Wonder Woman")).unwrap();
        assert_eq!(json, r#"{"name":"Wonder Woman"}"#);
    }
}
