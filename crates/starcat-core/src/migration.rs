//! Versioned schema migrations for the catalog store.
//!
//! Migrations are registered in strictly increasing order and applied when
//! the store is opened. The applied version is recorded under
//! `schema_version` in the meta tree; a store written by a newer build is
//! refused rather than migrated downward.

use serde_json::Value;

use crate::error::Error;
use crate::store::{FAVORITES_TREE, META_TREE, PEOPLE_TREE, PLANETS_TREE, PROFILES_TREE, USERS_TREE};

/// Tree name used for profiles before migration 2.
const LEGACY_PROFILE_TREE: &str = "profile";

/// Meta-tree key holding the applied schema version.
const SCHEMA_VERSION_KEY: &[u8] = b"schema_version";

struct Migration {
    version: u32,
    name: &'static str,
    apply: fn(&sled::Db) -> Result<(), Error>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create initial tables",
        apply: create_initial_tables,
    },
    Migration {
        version: 2,
        name: "rename profile to profiles",
        apply: rename_profile_tree,
    },
    Migration {
        version: 3,
        name: "relax profile bio and user_id to nullable",
        apply: relax_profile_fields,
    },
];

/// Returns the latest migration version known by this build.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided database.
pub fn apply_migrations(db: &sled::Db) -> Result<(), Error> {
    let meta = db.open_tree(META_TREE)?;
    let current = current_version(&meta)?;
    let latest = latest_version();

    if current > latest {
        return Err(Error::UnsupportedSchemaVersion {
            found: current,
            supported: latest,
        });
    }

    for migration in MIGRATIONS {
        if migration.version <= current {
            continue;
        }

        tracing::info!(version = migration.version, name = migration.name, "applying migration");
        (migration.apply)(db)?;
        meta.insert(SCHEMA_VERSION_KEY, &migration.version.to_be_bytes())?;
    }

    db.flush()?;
    Ok(())
}

/// Reads the schema version recorded in the meta tree.
pub fn current_version(meta: &sled::Tree) -> Result<u32, Error> {
    match meta.get(SCHEMA_VERSION_KEY)? {
        Some(bytes) if bytes.len() == 4 => {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(&bytes);
            Ok(u32::from_be_bytes(buf))
        }
        _ => Ok(0),
    }
}

fn create_initial_tables(db: &sled::Db) -> Result<(), Error> {
    for name in [USERS_TREE, LEGACY_PROFILE_TREE, PEOPLE_TREE, PLANETS_TREE, FAVORITES_TREE] {
        db.open_tree(name)?;
    }
    Ok(())
}

fn rename_profile_tree(db: &sled::Db) -> Result<(), Error> {
    let legacy = db.open_tree(LEGACY_PROFILE_TREE)?;
    let profiles = db.open_tree(PROFILES_TREE)?;

    for entry in legacy.iter() {
        let (key, value) = entry?;
        profiles.insert(key, value)?;
    }

    db.drop_tree(LEGACY_PROFILE_TREE)?;
    Ok(())
}

/// Rows written before migration 3 were required to carry `bio` and
/// `user_id`; rewrite any row missing them with explicit nulls so the
/// nullable row type decodes them uniformly.
fn relax_profile_fields(db: &sled::Db) -> Result<(), Error> {
    let profiles = db.open_tree(PROFILES_TREE)?;

    for entry in profiles.iter() {
        let (key, value) = entry?;
        let mut row: Value = serde_json::from_slice(&value)?;

        let Some(fields) = row.as_object_mut() else {
            continue;
        };

        let mut changed = false;
        for field in ["bio", "user_id"] {
            if !fields.contains_key(field) {
                fields.insert(field.to_string(), Value::Null);
                changed = true;
            }
        }

        if changed {
            profiles.insert(key, serde_json::to_vec(&row)?)?;
        }
    }

    Ok(())
}
