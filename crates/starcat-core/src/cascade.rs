//! Delete coordination for owned and referencing rows.
//!
//! Ownership cascades are not expressed in storage; each delete operation
//! collects the dependent row ids up front and removes them together with
//! the owning row in a single multi-tree transaction. Any failure aborts
//! the whole batch.

use sled::transaction::TransactionError;
use sled::Transactional;

use crate::error::Error;
use crate::model::{Person, Planet, User};
use crate::store::{key, CatalogStore};

/// Remove a user, its profile, and all of its favorites atomically.
pub(crate) fn delete_user(store: &CatalogStore, user: &User) -> Result<(), Error> {
    let favorite_ids: Vec<u64> = store
        .favorites_for_user(user.id)?
        .iter()
        .map(|favorite| favorite.id)
        .collect();
    let profile_id = store.find_profile_by_user(user.id)?.map(|profile| profile.id);

    let result: Result<(), TransactionError<Error>> = (&store.favorites, &store.profiles, &store.users)
        .transaction(|(favorites, profiles, users)| {
            for id in &favorite_ids {
                favorites.remove(&key(*id)[..])?;
            }
            if let Some(id) = profile_id {
                profiles.remove(&key(id)[..])?;
            }
            users.remove(&key(user.id)[..])?;
            Ok(())
        });
    result.map_err(Error::from)
}

/// Remove a person and every favorite referencing it atomically.
pub(crate) fn delete_person(store: &CatalogStore, person: &Person) -> Result<(), Error> {
    let favorite_ids = referencing_favorites(store, |favorite| favorite.people_id == Some(person.id))?;

    let result: Result<(), TransactionError<Error>> = (&store.favorites, &store.people)
        .transaction(|(favorites, people)| {
            for id in &favorite_ids {
                favorites.remove(&key(*id)[..])?;
            }
            people.remove(&key(person.id)[..])?;
            Ok(())
        });
    result.map_err(Error::from)
}

/// Remove a planet and every favorite referencing it atomically.
pub(crate) fn delete_planet(store: &CatalogStore, planet: &Planet) -> Result<(), Error> {
    let favorite_ids = referencing_favorites(store, |favorite| favorite.planet_id == Some(planet.id))?;

    let result: Result<(), TransactionError<Error>> = (&store.favorites, &store.planets)
        .transaction(|(favorites, planets)| {
            for id in &favorite_ids {
                favorites.remove(&key(*id)[..])?;
            }
            planets.remove(&key(planet.id)[..])?;
            Ok(())
        });
    result.map_err(Error::from)
}

fn referencing_favorites(
    store: &CatalogStore,
    matches: impl Fn(&crate::model::Favorite) -> bool,
) -> Result<Vec<u64>, Error> {
    let mut ids = Vec::new();
    for entry in store.favorites.iter() {
        let (_, value) = entry.map_err(Error::from)?;
        let favorite: crate::model::Favorite = serde_json::from_slice(&value)?;
        if matches(&favorite) {
            ids.push(favorite.id);
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use crate::store::{CatalogStore, StoreConfig};

    fn open_store() -> (tempfile::TempDir, CatalogStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(StoreConfig::new(dir.path())).unwrap();
        (dir, store)
    }

    #[test]
    fn user_cascade_without_profile_or_favorites() {
        let (_dir, store) = open_store();

        let user = store.create_user("r2d2@droids.net", "beep").unwrap();
        store.delete_user(user.id).unwrap();

        assert!(store.get_user(user.id).unwrap().is_none());
    }

    #[test]
    fn planet_cascade_removes_favorites_from_all_users() {
        let (_dir, store) = open_store();

        let luke = store.create_user("luke@tatooine.net", "secret").unwrap();
        let leia = store.create_user("leia@alderaan.net", "secret").unwrap();
        let planet = store.create_planet("Alderaan").unwrap();
        store.add_favorite_planet(planet.id, luke.id).unwrap();
        store.add_favorite_planet(planet.id, leia.id).unwrap();

        store.delete_planet(planet.id).unwrap();

        assert!(store.get_planet(planet.id).unwrap().is_none());
        assert!(store.find_favorite_by_planet(planet.id).unwrap().is_none());
        assert!(store.favorites_for_user(luke.id).unwrap().is_empty());
        assert!(store.favorites_for_user(leia.id).unwrap().is_empty());
    }
}
