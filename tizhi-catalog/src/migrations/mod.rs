//! Schema setup for the four catalog tables.
//!
//! Constitution lists are stored as JSON arrays of snake_case names;
//! timestamps are RFC 3339 text.

use rusqlite::Connection;

use tizhi_core::errors::TizhiResult;

use crate::to_catalog_err;

pub fn run_migrations(conn: &Connection) -> TizhiResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS ingredients (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            nature      TEXT NOT NULL,
            flavor      TEXT NOT NULL,
            functions   TEXT NOT NULL,
            suitable    TEXT NOT NULL,
            avoid       TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_ingredients_name ON ingredients(name);

        CREATE TABLE IF NOT EXISTS recipes (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            summary     TEXT NOT NULL,
            ingredients TEXT NOT NULL,
            steps       TEXT NOT NULL,
            suitable    TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_recipes_name ON recipes(name);

        CREATE TABLE IF NOT EXISTS acupoints (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            meridian    TEXT NOT NULL,
            location    TEXT NOT NULL,
            indications TEXT NOT NULL,
            suitable    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_acupoints_name ON acupoints(name);

        CREATE TABLE IF NOT EXISTS courses (
            id          TEXT PRIMARY KEY,
            title       TEXT NOT NULL,
            summary     TEXT NOT NULL,
            category    TEXT NOT NULL,
            suitable    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_courses_title ON courses(title);
        ",
    )
    .map_err(|e| to_catalog_err(e.to_string()))?;
    Ok(())
}
