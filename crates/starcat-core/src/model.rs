//! Entity row types and their JSON projections.
//!
//! Each entity knows how to project itself into the JSON shape the API
//! returns. Optional data that is absent is omitted from the projection
//! rather than emitted as null, with one exception: the person/planet
//! halves of a favorite are explicit nulls.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A registered user. Owns at most one profile and any number of favorites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Surrogate key.
    pub id: u64,
    /// Unique login email (application-level uniqueness, case-sensitive).
    pub email: String,
    /// Stored as given; hashing is out of scope for this catalog.
    pub password: String,
}

/// A user's profile. Both fields are nullable post-migration, so a profile
/// can transiently exist without an owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Surrogate key.
    pub id: u64,
    /// Free-text biography.
    pub bio: Option<String>,
    /// Owning user, if any.
    pub user_id: Option<u64>,
}

/// A person that users can mark as a favorite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Surrogate key.
    pub id: u64,
    /// Display name (application-level uniqueness).
    pub name: String,
}

/// A planet that users can mark as a favorite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Surrogate key.
    pub id: u64,
    /// Display name (application-level uniqueness).
    pub name: String,
}

/// Join row linking a user to a favorite person or planet. The API only
/// ever sets one of the two targets per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    /// Surrogate key.
    pub id: u64,
    /// Owning user.
    pub user_id: u64,
    /// Favorite person, if this row targets a person.
    pub people_id: Option<u64>,
    /// Favorite planet, if this row targets a planet.
    pub planet_id: Option<u64>,
}

impl User {
    /// Project into `{id, email}`, plus `profile` when one exists and
    /// `favorites: {people, planets}` when at least one favorite resolved.
    /// The password never appears in the projection.
    pub fn projection(
        &self,
        profile: Option<&Profile>,
        favorite_people: &[Person],
        favorite_planets: &[Planet],
    ) -> Value {
        let mut data = Map::new();
        data.insert("id".into(), json!(self.id));
        data.insert("email".into(), json!(self.email));

        if let Some(profile) = profile {
            data.insert("profile".into(), profile.projection());
        }

        if !favorite_people.is_empty() || !favorite_planets.is_empty() {
            let people: Vec<Value> = favorite_people.iter().map(Person::projection).collect();
            let planets: Vec<Value> = favorite_planets.iter().map(Planet::projection).collect();
            data.insert("favorites".into(), json!({ "people": people, "planets": planets }));
        }

        Value::Object(data)
    }
}

impl Profile {
    /// Project into `{id}`, plus `bio` when it is non-empty.
    pub fn projection(&self) -> Value {
        let mut data = Map::new();
        data.insert("id".into(), json!(self.id));

        if let Some(bio) = self.bio.as_deref().filter(|bio| !bio.is_empty()) {
            data.insert("bio".into(), json!(bio));
        }

        Value::Object(data)
    }
}

impl Person {
    /// Project into `{id, name}`.
    pub fn projection(&self) -> Value {
        json!({ "id": self.id, "name": self.name })
    }
}

impl Planet {
    /// Project into `{id, name}`.
    pub fn projection(&self) -> Value {
        json!({ "id": self.id, "name": self.name })
    }
}

impl Favorite {
    /// Project into `{id, user_id, people, planet}` with explicit nulls for
    /// the side this favorite does not target.
    pub fn projection(&self, person: Option<&Person>, planet: Option<&Planet>) -> Value {
        json!({
            "id": self.id,
            "user_id": self.user_id,
            "people": person.map(Person::projection).unwrap_or(Value::Null),
            "planet": planet.map(Planet::projection).unwrap_or(Value::Null),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_projection_omits_absent_profile_and_favorites() {
        let user = User {
            id: 1,
            email: "luke@tatooine.net".into(),
            password: "secret".into(),
        };

        let value = user.projection(None, &[], &[]);
        let obj = value.as_object().unwrap();

        assert_eq!(obj["id"], json!(1));
        assert_eq!(obj["email"], json!("luke@tatooine.net"));
        assert!(!obj.contains_key("profile"));
        assert!(!obj.contains_key("favorites"));
        assert!(!obj.contains_key("password"));
    }

    #[test]
    fn user_projection_includes_profile_and_resolved_favorites() {
        let user = User {
            id: 2,
            email: "leia@alderaan.net".into(),
            password: "secret".into(),
        };
        let profile = Profile {
            id: 7,
            bio: Some("princess".into()),
            user_id: Some(2),
        };
        let people = vec![Person { id: 3, name: "Han Solo".into() }];

        let value = user.projection(Some(&profile), &people, &[]);

        assert_eq!(value["profile"], json!({ "id": 7, "bio": "princess" }));
        assert_eq!(
            value["favorites"],
            json!({ "people": [{ "id": 3, "name": "Han Solo" }], "planets": [] })
        );
    }

    #[test]
    fn profile_projection_omits_empty_bio() {
        let without = Profile { id: 1, bio: None, user_id: None };
        assert_eq!(without.projection(), json!({ "id": 1 }));

        let empty = Profile { id: 2, bio: Some(String::new()), user_id: Some(1) };
        assert_eq!(empty.projection(), json!({ "id": 2 }));

        let with = Profile { id: 3, bio: Some("smuggler".into()), user_id: Some(1) };
        assert_eq!(with.projection(), json!({ "id": 3, "bio": "smuggler" }));
    }

    #[test]
    fn favorite_projection_uses_explicit_nulls() {
        let favorite = Favorite {
            id: 9,
            user_id: 1,
            people_id: None,
            planet_id: Some(4),
        };
        let planet = Planet { id: 4, name: "Dagobah".into() };

        let value = favorite.projection(None, Some(&planet));

        assert_eq!(value["people"], Value::Null);
        assert_eq!(value["planet"], json!({ "id": 4, "name": "Dagobah" }));
        assert_eq!(value["user_id"], json!(1));
    }
}
