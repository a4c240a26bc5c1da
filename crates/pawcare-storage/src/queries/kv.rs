// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value CRUD operations.

use pawcare_core::PawcareError;
use rusqlite::params;

use crate::database::Database;

/// Read the value stored under `key`, if any.
pub async fn get(db: &Database, key: &str) -> Result<Option<String>, PawcareError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            );
            match result {
                Ok(value) => Ok(Some(value)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Write `value` under `key`, overwriting any previous value.
pub async fn set(db: &Database, key: &str, value: &str) -> Result<(), PawcareError> {
    let key = key.to_string();
    let value = value.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO kv_store (key, value, updated_at)
                 VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Remove `key`. Removing a missing key is not an error.
pub async fn remove(db: &Database, key: &str) -> Result<(), PawcareError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn set_and_get_roundtrips() {
        let (db, _dir) = setup_db().await;

        set(&db, "userToken", "tok-abc").await.unwrap();
        let value = get(&db, "userToken").await.unwrap();
        assert_eq!(value.as_deref(), Some("tok-abc"));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn get_missing_key_returns_none() {
        let (db, _dir) = setup_db().await;
        let value = get(&db, "no-such-key").await.unwrap();
        assert!(value.is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn set_overwrites_existing_value() {
        let (db, _dir) = setup_db().await;

        set(&db, "theme", "light").await.unwrap();
        set(&db, "theme", "dark").await.unwrap();
        let value = get(&db, "theme").await.unwrap();
        assert_eq!(value.as_deref(), Some("dark"));

        // Overwrite keeps a single row.
        let count: i64 = db
            .connection()
            .call(|conn| -> Result<i64, rusqlite::Error> {
                conn.query_row(
                    "SELECT count(*) FROM kv_store WHERE key = 'theme'",
                    [],
                    |row| row.get(0),
                )
            })
            .await
            .unwrap();
        assert_eq!(count, 1);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn remove_deletes_and_tolerates_missing() {
        let (db, _dir) = setup_db().await;

        set(&db, "userId", "u1").await.unwrap();
        remove(&db, "userId").await.unwrap();
        assert!(get(&db, "userId").await.unwrap().is_none());

        // Removing again is fine.
        remove(&db, "userId").await.unwrap();

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("persist.db");

        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        set(&db, "dietText:p1", "Croquetas y pollo").await.unwrap();
        db.close().await.unwrap();

        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        let value = get(&db, "dietText:p1").await.unwrap();
        assert_eq!(value.as_deref(), Some("Croquetas y pollo"));
        db.close().await.unwrap();
    }
}
