//! The sled-backed catalog store.
//!
//! One tree per entity table plus a meta tree holding the schema version
//! and per-entity id sequences. Rows are JSON-encoded. Uniqueness and
//! referential checks are read-then-write at this layer; the storage layer
//! enforces no constraints of its own.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use sled::Tree;

use crate::cascade;
use crate::error::Error;
use crate::migration;
use crate::model::{Favorite, Person, Planet, Profile, User};

pub(crate) const USERS_TREE: &str = "users";
pub(crate) const PROFILES_TREE: &str = "profiles";
pub(crate) const PEOPLE_TREE: &str = "people";
pub(crate) const PLANETS_TREE: &str = "planets";
pub(crate) const FAVORITES_TREE: &str = "favorites";
pub(crate) const META_TREE: &str = "meta";

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the sled database.
    pub path: PathBuf,
}

impl StoreConfig {
    /// Create a configuration pointing at the given directory.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Handle to the catalog tables. Owned by the API layer and passed into
/// each request handler through shared state.
pub struct CatalogStore {
    db: sled::Db,
    pub(crate) users: Tree,
    pub(crate) profiles: Tree,
    pub(crate) people: Tree,
    pub(crate) planets: Tree,
    pub(crate) favorites: Tree,
    meta: Tree,
}

/// Big-endian key for a row id, so tree iteration stays in id order.
pub(crate) fn key(id: u64) -> [u8; 8] {
    id.to_be_bytes()
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    Ok(serde_json::from_slice(bytes)?)
}

fn encode<T: Serialize>(row: &T) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(row)?)
}

impl CatalogStore {
    /// Open the store at the configured path, applying pending migrations.
    pub fn open(config: StoreConfig) -> Result<Self, Error> {
        let db = sled::Config::new().path(&config.path).open()?;
        migration::apply_migrations(&db)?;

        Ok(Self {
            users: db.open_tree(USERS_TREE)?,
            profiles: db.open_tree(PROFILES_TREE)?,
            people: db.open_tree(PEOPLE_TREE)?,
            planets: db.open_tree(PLANETS_TREE)?,
            favorites: db.open_tree(FAVORITES_TREE)?,
            meta: db.open_tree(META_TREE)?,
            db,
        })
    }

    /// On-disk size, used by the health endpoint.
    pub fn size_on_disk(&self) -> Result<u64, Error> {
        Ok(self.db.size_on_disk()?)
    }

    /// Next value of a per-entity id sequence, starting at 1.
    fn next_id(&self, sequence: &str) -> Result<u64, Error> {
        let seq_key = format!("seq:{sequence}");
        let bytes = self.meta.update_and_fetch(seq_key.as_bytes(), |current| {
            let next = current.map_or(0, decode_seq) + 1;
            Some(next.to_be_bytes().to_vec())
        })?;
        Ok(bytes.as_deref().map_or(1, decode_seq))
    }

    fn get_row<T: DeserializeOwned>(&self, tree: &Tree, id: u64) -> Result<Option<T>, Error> {
        match tree.get(key(id))? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    fn put_row<T: Serialize>(&self, tree: &Tree, id: u64, row: &T) -> Result<(), Error> {
        tree.insert(key(id), encode(row)?)?;
        Ok(())
    }

    fn scan<T: DeserializeOwned>(&self, tree: &Tree) -> Result<Vec<T>, Error> {
        let mut rows = Vec::new();
        for entry in tree.iter() {
            let (_, value) = entry?;
            rows.push(decode(&value)?);
        }
        Ok(rows)
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// All users, in id order.
    pub fn list_users(&self) -> Result<Vec<User>, Error> {
        self.scan(&self.users)
    }

    /// Look up a user by id.
    pub fn get_user(&self, id: u64) -> Result<Option<User>, Error> {
        self.get_row(&self.users, id)
    }

    /// Look up a user by exact email.
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        Ok(self.list_users()?.into_iter().find(|user| user.email == email))
    }

    /// Create a user, rejecting an email that already exists.
    pub fn create_user(&self, email: &str, password: &str) -> Result<User, Error> {
        if self.find_user_by_email(email)?.is_some() {
            return Err(Error::Conflict("Email already exists".into()));
        }

        let user = User {
            id: self.next_id(USERS_TREE)?,
            email: email.to_string(),
            password: password.to_string(),
        };
        self.put_row(&self.users, user.id, &user)?;
        Ok(user)
    }

    /// Partial-field update: only supplied fields overwrite existing values.
    /// Rejects an email held by a different user.
    pub fn update_user(
        &self,
        id: u64,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<User, Error> {
        let mut user = self
            .get_user(id)?
            .ok_or_else(|| Error::NotFound("User not found".into()))?;

        if let Some(email) = email {
            if let Some(existing) = self.find_user_by_email(email)? {
                if existing.id != id {
                    return Err(Error::Conflict("Email is already in use".into()));
                }
            }
            user.email = email.to_string();
        }
        if let Some(password) = password {
            user.password = password.to_string();
        }

        self.put_row(&self.users, user.id, &user)?;
        Ok(user)
    }

    /// Delete a user together with its profile and favorites.
    pub fn delete_user(&self, id: u64) -> Result<(), Error> {
        let user = self
            .get_user(id)?
            .ok_or_else(|| Error::NotFound("User not found".into()))?;
        cascade::delete_user(self, &user)
    }

    // ------------------------------------------------------------------
    // Profiles
    // ------------------------------------------------------------------

    /// All profiles, in id order.
    pub fn list_profiles(&self) -> Result<Vec<Profile>, Error> {
        self.scan(&self.profiles)
    }

    /// Look up a profile by id.
    pub fn get_profile(&self, id: u64) -> Result<Option<Profile>, Error> {
        self.get_row(&self.profiles, id)
    }

    /// Look up the profile owned by a user, if any.
    pub fn find_profile_by_user(&self, user_id: u64) -> Result<Option<Profile>, Error> {
        Ok(self
            .list_profiles()?
            .into_iter()
            .find(|profile| profile.user_id == Some(user_id)))
    }

    /// Create a profile for a user, rejecting a second profile for the same
    /// owner. The owner itself is not checked for existence.
    pub fn create_profile(&self, user_id: u64, bio: &str) -> Result<Profile, Error> {
        if self.find_profile_by_user(user_id)?.is_some() {
            return Err(Error::Conflict("Profile already exists".into()));
        }

        let profile = Profile {
            id: self.next_id(PROFILES_TREE)?,
            bio: Some(bio.to_string()),
            user_id: Some(user_id),
        };
        self.put_row(&self.profiles, profile.id, &profile)?;
        Ok(profile)
    }

    /// Overwrite a profile's bio.
    pub fn update_profile(&self, id: u64, bio: &str) -> Result<Profile, Error> {
        let mut profile = self
            .get_profile(id)?
            .ok_or_else(|| Error::NotFound("Profile not found".into()))?;

        profile.bio = Some(bio.to_string());
        self.put_row(&self.profiles, profile.id, &profile)?;
        Ok(profile)
    }

    /// Delete the profile owned by a user. The user must exist; a user
    /// without a profile is not an error.
    pub fn delete_profile_for_user(&self, user_id: u64) -> Result<(), Error> {
        if self.get_user(user_id)?.is_none() {
            return Err(Error::NotFound("Profile not found".into()));
        }

        if let Some(profile) = self.find_profile_by_user(user_id)? {
            self.profiles.remove(key(profile.id))?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // People
    // ------------------------------------------------------------------

    /// All people, in id order.
    pub fn list_people(&self) -> Result<Vec<Person>, Error> {
        self.scan(&self.people)
    }

    /// Look up a person by id.
    pub fn get_person(&self, id: u64) -> Result<Option<Person>, Error> {
        self.get_row(&self.people, id)
    }

    /// Look up a person by exact name.
    pub fn find_person_by_name(&self, name: &str) -> Result<Option<Person>, Error> {
        Ok(self.list_people()?.into_iter().find(|person| person.name == name))
    }

    /// Create a person, rejecting a name that already exists.
    pub fn create_person(&self, name: &str) -> Result<Person, Error> {
        if self.find_person_by_name(name)?.is_some() {
            return Err(Error::Conflict("Person already exists".into()));
        }

        let person = Person {
            id: self.next_id(PEOPLE_TREE)?,
            name: name.to_string(),
        };
        self.put_row(&self.people, person.id, &person)?;
        Ok(person)
    }

    /// Overwrite a person's name.
    pub fn update_person(&self, id: u64, name: &str) -> Result<Person, Error> {
        let mut person = self
            .get_person(id)?
            .ok_or_else(|| Error::NotFound("Person not found".into()))?;

        person.name = name.to_string();
        self.put_row(&self.people, person.id, &person)?;
        Ok(person)
    }

    /// Delete a person together with every favorite referencing it.
    pub fn delete_person(&self, id: u64) -> Result<(), Error> {
        let person = self
            .get_person(id)?
            .ok_or_else(|| Error::NotFound("Person not found".into()))?;
        cascade::delete_person(self, &person)
    }

    // ------------------------------------------------------------------
    // Planets
    // ------------------------------------------------------------------

    /// All planets, in id order.
    pub fn list_planets(&self) -> Result<Vec<Planet>, Error> {
        self.scan(&self.planets)
    }

    /// Look up a planet by id.
    pub fn get_planet(&self, id: u64) -> Result<Option<Planet>, Error> {
        self.get_row(&self.planets, id)
    }

    /// Look up a planet by exact name.
    pub fn find_planet_by_name(&self, name: &str) -> Result<Option<Planet>, Error> {
        Ok(self.list_planets()?.into_iter().find(|planet| planet.name == name))
    }

    /// Create a planet, rejecting a name that already exists.
    pub fn create_planet(&self, name: &str) -> Result<Planet, Error> {
        if self.find_planet_by_name(name)?.is_some() {
            return Err(Error::Conflict("Planet already exists".into()));
        }

        let planet = Planet {
            id: self.next_id(PLANETS_TREE)?,
            name: name.to_string(),
        };
        self.put_row(&self.planets, planet.id, &planet)?;
        Ok(planet)
    }

    /// Overwrite a planet's name.
    pub fn update_planet(&self, id: u64, name: &str) -> Result<Planet, Error> {
        let mut planet = self
            .get_planet(id)?
            .ok_or_else(|| Error::NotFound("Planet not found".into()))?;

        planet.name = name.to_string();
        self.put_row(&self.planets, planet.id, &planet)?;
        Ok(planet)
    }

    /// Delete a planet together with every favorite referencing it.
    pub fn delete_planet(&self, id: u64) -> Result<(), Error> {
        let planet = self
            .get_planet(id)?
            .ok_or_else(|| Error::NotFound("Planet not found".into()))?;
        cascade::delete_planet(self, &planet)
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// All favorites owned by a user, in id order.
    pub fn favorites_for_user(&self, user_id: u64) -> Result<Vec<Favorite>, Error> {
        Ok(self
            .scan::<Favorite>(&self.favorites)?
            .into_iter()
            .filter(|favorite| favorite.user_id == user_id)
            .collect())
    }

    /// First favorite targeting a person, across all users.
    pub fn find_favorite_by_person(&self, people_id: u64) -> Result<Option<Favorite>, Error> {
        Ok(self
            .scan::<Favorite>(&self.favorites)?
            .into_iter()
            .find(|favorite| favorite.people_id == Some(people_id)))
    }

    /// First favorite targeting a planet, across all users.
    pub fn find_favorite_by_planet(&self, planet_id: u64) -> Result<Option<Favorite>, Error> {
        Ok(self
            .scan::<Favorite>(&self.favorites)?
            .into_iter()
            .find(|favorite| favorite.planet_id == Some(planet_id)))
    }

    /// Mark a person as a user's favorite. The user and person must exist
    /// and the (user, person) pair must not already be favorited.
    pub fn add_favorite_person(&self, people_id: u64, user_id: u64) -> Result<Favorite, Error> {
        if self.get_user(user_id)?.is_none() {
            return Err(Error::NotFound(
                "The selected user does not exist in the database".into(),
            ));
        }
        if self.get_person(people_id)?.is_none() {
            return Err(Error::NotFound(
                "The selected person does not exist in the database".into(),
            ));
        }

        let duplicate = self
            .favorites_for_user(user_id)?
            .into_iter()
            .any(|favorite| favorite.people_id == Some(people_id));
        if duplicate {
            return Err(Error::Conflict("The person is already a favorite".into()));
        }

        let favorite = Favorite {
            id: self.next_id(FAVORITES_TREE)?,
            user_id,
            people_id: Some(people_id),
            planet_id: None,
        };
        self.put_row(&self.favorites, favorite.id, &favorite)?;
        Ok(favorite)
    }

    /// Mark a planet as a user's favorite. Same checks as for people.
    pub fn add_favorite_planet(&self, planet_id: u64, user_id: u64) -> Result<Favorite, Error> {
        if self.get_user(user_id)?.is_none() {
            return Err(Error::NotFound(
                "The selected user does not exist in the database".into(),
            ));
        }
        if self.get_planet(planet_id)?.is_none() {
            return Err(Error::NotFound(
                "The selected planet does not exist in the database".into(),
            ));
        }

        let duplicate = self
            .favorites_for_user(user_id)?
            .into_iter()
            .any(|favorite| favorite.planet_id == Some(planet_id));
        if duplicate {
            return Err(Error::Conflict("The planet is already a favorite".into()));
        }

        let favorite = Favorite {
            id: self.next_id(FAVORITES_TREE)?,
            user_id,
            people_id: None,
            planet_id: Some(planet_id),
        };
        self.put_row(&self.favorites, favorite.id, &favorite)?;
        Ok(favorite)
    }

    /// Remove the first favorite targeting a person. Only the first match
    /// is removed even when several users favorited the same person.
    pub fn remove_favorite_by_person(&self, people_id: u64) -> Result<(), Error> {
        let favorite = self
            .find_favorite_by_person(people_id)?
            .ok_or_else(|| Error::NotFound("Favorite people not found".into()))?;
        self.favorites.remove(key(favorite.id))?;
        Ok(())
    }

    /// Remove the first favorite targeting a planet.
    pub fn remove_favorite_by_planet(&self, planet_id: u64) -> Result<(), Error> {
        let favorite = self
            .find_favorite_by_planet(planet_id)?
            .ok_or_else(|| Error::NotFound("Favorite planet not found".into()))?;
        self.favorites.remove(key(favorite.id))?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Graph projections
    // ------------------------------------------------------------------

    /// Full projection of a user: the row plus its profile and resolved
    /// favorites.
    pub fn user_projection(&self, user: &User) -> Result<Value, Error> {
        let profile = self.find_profile_by_user(user.id)?;

        let mut people = Vec::new();
        let mut planets = Vec::new();
        for favorite in self.favorites_for_user(user.id)? {
            if let Some(person) = favorite.people_id.map(|id| self.get_person(id)).transpose()?.flatten() {
                people.push(person);
            }
            if let Some(planet) = favorite.planet_id.map(|id| self.get_planet(id)).transpose()?.flatten() {
                planets.push(planet);
            }
        }

        Ok(user.projection(profile.as_ref(), &people, &planets))
    }

    /// Projection of a favorite with its person/planet halves resolved.
    pub fn favorite_projection(&self, favorite: &Favorite) -> Result<Value, Error> {
        let person = favorite.people_id.map(|id| self.get_person(id)).transpose()?.flatten();
        let planet = favorite.planet_id.map(|id| self.get_planet(id)).transpose()?.flatten();
        Ok(favorite.projection(person.as_ref(), planet.as_ref()))
    }

    /// Every user holding at least one favorite, with their favorites
    /// projected.
    pub fn users_with_favorites(&self) -> Result<Vec<Value>, Error> {
        let mut out = Vec::new();
        for user in self.list_users()? {
            let favorites = self.favorites_for_user(user.id)?;
            if favorites.is_empty() {
                continue;
            }

            let mut projected = Vec::new();
            for favorite in &favorites {
                projected.push(self.favorite_projection(favorite)?);
            }
            out.push(json!({
                "user_id": user.id,
                "email": user.email,
                "favorites": projected,
            }));
        }
        Ok(out)
    }
}

fn decode_seq(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    if bytes.len() == 8 {
        buf.copy_from_slice(bytes);
    }
    u64::from_be_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store() -> (tempfile::TempDir, CatalogStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(StoreConfig::new(dir.path())).unwrap();
        (dir, store)
    }

    #[test]
    fn ids_are_per_entity_sequences_from_one() {
        let (_dir, store) = open_store();

        let user = store.create_user("luke@tatooine.net", "secret").unwrap();
        let person = store.create_person("Obi-Wan Kenobi").unwrap();
        let planet = store.create_planet("Hoth").unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(person.id, 1);
        assert_eq!(planet.id, 1);
        assert_eq!(store.create_person("Yoda").unwrap().id, 2);
    }

    #[test]
    fn duplicate_email_is_rejected_without_inserting() {
        let (_dir, store) = open_store();

        store.create_user("luke@tatooine.net", "secret").unwrap();
        let err = store.create_user("luke@tatooine.net", "other").unwrap_err();

        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(store.list_users().unwrap().len(), 1);
    }

    #[test]
    fn update_user_rejects_email_held_by_another_user() {
        let (_dir, store) = open_store();

        let luke = store.create_user("luke@tatooine.net", "secret").unwrap();
        store.create_user("leia@alderaan.net", "secret").unwrap();

        let err = store
            .update_user(luke.id, Some("leia@alderaan.net"), None)
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));

        // Re-submitting your own email is a no-op, not a conflict.
        let same = store
            .update_user(luke.id, Some("luke@tatooine.net"), Some("changed"))
            .unwrap();
        assert_eq!(same.password, "changed");
    }

    #[test]
    fn delete_user_cascades_to_profile_and_favorites() {
        let (_dir, store) = open_store();

        let user = store.create_user("luke@tatooine.net", "secret").unwrap();
        store.create_profile(user.id, "farm boy").unwrap();
        let person = store.create_person("Obi-Wan Kenobi").unwrap();
        let planet = store.create_planet("Dagobah").unwrap();
        store.add_favorite_person(person.id, user.id).unwrap();
        store.add_favorite_planet(planet.id, user.id).unwrap();

        store.delete_user(user.id).unwrap();

        assert!(store.get_user(user.id).unwrap().is_none());
        assert!(store.find_profile_by_user(user.id).unwrap().is_none());
        assert!(store.favorites_for_user(user.id).unwrap().is_empty());
        // Targets survive the cascade.
        assert!(store.get_person(person.id).unwrap().is_some());
        assert!(store.get_planet(planet.id).unwrap().is_some());
    }

    #[test]
    fn delete_person_removes_every_referencing_favorite() {
        let (_dir, store) = open_store();

        let luke = store.create_user("luke@tatooine.net", "secret").unwrap();
        let leia = store.create_user("leia@alderaan.net", "secret").unwrap();
        let person = store.create_person("Han Solo").unwrap();
        store.add_favorite_person(person.id, luke.id).unwrap();
        store.add_favorite_person(person.id, leia.id).unwrap();

        store.delete_person(person.id).unwrap();

        assert!(store.get_person(person.id).unwrap().is_none());
        assert!(store.find_favorite_by_person(person.id).unwrap().is_none());
    }

    #[test]
    fn duplicate_favorite_pair_is_rejected() {
        let (_dir, store) = open_store();

        let user = store.create_user("luke@tatooine.net", "secret").unwrap();
        let planet = store.create_planet("Hoth").unwrap();

        store.add_favorite_planet(planet.id, user.id).unwrap();
        let err = store.add_favorite_planet(planet.id, user.id).unwrap_err();

        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(store.favorites_for_user(user.id).unwrap().len(), 1);
    }

    #[test]
    fn favorite_checks_reject_missing_user_and_target() {
        let (_dir, store) = open_store();
        let user = store.create_user("luke@tatooine.net", "secret").unwrap();

        assert!(matches!(
            store.add_favorite_planet(1, 99).unwrap_err(),
            Error::NotFound(_)
        ));
        assert!(matches!(
            store.add_favorite_person(42, user.id).unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[test]
    fn remove_favorite_by_target_removes_only_first_match() {
        let (_dir, store) = open_store();

        let luke = store.create_user("luke@tatooine.net", "secret").unwrap();
        let leia = store.create_user("leia@alderaan.net", "secret").unwrap();
        let planet = store.create_planet("Endor").unwrap();
        let first = store.add_favorite_planet(planet.id, luke.id).unwrap();
        let second = store.add_favorite_planet(planet.id, leia.id).unwrap();

        store.remove_favorite_by_planet(planet.id).unwrap();

        let remaining = store.find_favorite_by_planet(planet.id).unwrap().unwrap();
        assert_eq!(remaining.id, second.id);
        assert_ne!(remaining.id, first.id);
    }

    #[test]
    fn profile_can_be_created_for_an_unknown_owner() {
        // The owning user is deliberately not checked at creation time.
        let (_dir, store) = open_store();

        let profile = store.create_profile(404, "ghost").unwrap();
        assert_eq!(profile.user_id, Some(404));

        let err = store.create_profile(404, "second").unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[test]
    fn delete_profile_for_user_requires_the_user() {
        let (_dir, store) = open_store();

        assert!(matches!(
            store.delete_profile_for_user(1).unwrap_err(),
            Error::NotFound(_)
        ));

        let user = store.create_user("luke@tatooine.net", "secret").unwrap();
        // No profile yet: still a success.
        store.delete_profile_for_user(user.id).unwrap();

        store.create_profile(user.id, "farm boy").unwrap();
        store.delete_profile_for_user(user.id).unwrap();
        assert!(store.find_profile_by_user(user.id).unwrap().is_none());
    }

    #[test]
    fn user_projection_resolves_profile_and_favorites() {
        let (_dir, store) = open_store();

        let user = store.create_user("leia@alderaan.net", "secret").unwrap();
        store.create_profile(user.id, "princess").unwrap();
        let person = store.create_person("Han Solo").unwrap();
        store.add_favorite_person(person.id, user.id).unwrap();

        let value = store.user_projection(&user).unwrap();

        assert_eq!(value["profile"]["bio"], serde_json::json!("princess"));
        assert_eq!(value["favorites"]["people"][0]["name"], serde_json::json!("Han Solo"));
        assert_eq!(value["favorites"]["planets"], serde_json::json!([]));
    }

    #[test]
    fn users_with_favorites_skips_users_without_any() {
        let (_dir, store) = open_store();

        let luke = store.create_user("luke@tatooine.net", "secret").unwrap();
        store.create_user("droid@factory.net", "secret").unwrap();
        let planet = store.create_planet("Tatooine").unwrap();
        store.add_favorite_planet(planet.id, luke.id).unwrap();

        let out = store.users_with_favorites().unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["user_id"], serde_json::json!(luke.id));
        assert_eq!(out[0]["favorites"][0]["planet"]["name"], serde_json::json!("Tatooine"));
    }

    #[test]
    fn store_reopens_with_data_intact() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = CatalogStore::open(StoreConfig::new(dir.path())).unwrap();
            store.create_user("luke@tatooine.net", "secret").unwrap();
        }

        let store = CatalogStore::open(StoreConfig::new(dir.path())).unwrap();
        assert_eq!(store.list_users().unwrap().len(), 1);
        assert_eq!(store.create_user("leia@alderaan.net", "x").unwrap().id, 2);
    }
}
