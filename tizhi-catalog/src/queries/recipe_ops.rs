//! Insert, update, get, delete, list, and constitution lookup for recipes.

use rusqlite::{params, Connection, Row};

use tizhi_core::constitution::Constitution;
use tizhi_core::errors::{CatalogError, TizhiResult};
use tizhi_core::models::Recipe;
use uuid::Uuid;

use super::{from_json, like_pattern, parse_timestamp, parse_uuid, to_json};
use crate::to_catalog_err;

const COLUMNS: &str = "id, name, summary, ingredients, steps, suitable, created_at, updated_at";

pub fn insert(conn: &Connection, recipe: &Recipe) -> TizhiResult<()> {
    conn.execute(
        "INSERT INTO recipes (id, name, summary, ingredients, steps, suitable, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            recipe.id.to_string(),
            recipe.name,
            recipe.summary,
            to_json(&recipe.ingredients)?,
            to_json(&recipe.steps)?,
            to_json(&recipe.suitable)?,
            recipe.created_at.to_rfc3339(),
            recipe.updated_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_catalog_err(e.to_string()))?;
    Ok(())
}

pub fn get(conn: &Connection, id: &Uuid) -> TizhiResult<Option<Recipe>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLUMNS} FROM recipes WHERE id = ?1"))
        .map_err(|e| to_catalog_err(e.to_string()))?;
    let mut rows = stmt
        .query(params![id.to_string()])
        .map_err(|e| to_catalog_err(e.to_string()))?;
    match rows.next().map_err(|e| to_catalog_err(e.to_string()))? {
        Some(row) => Ok(Some(from_row(row)?)),
        None => Ok(None),
    }
}

/// Update a recipe, refreshing `updated_at` to the stored value of the
/// passed record.
pub fn update(conn: &Connection, recipe: &Recipe) -> TizhiResult<()> {
    let changed = conn
        .execute(
            "UPDATE recipes
             SET name = ?2, summary = ?3, ingredients = ?4, steps = ?5,
                 suitable = ?6, updated_at = ?7
             WHERE id = ?1",
            params![
                recipe.id.to_string(),
                recipe.name,
                recipe.summary,
                to_json(&recipe.ingredients)?,
                to_json(&recipe.steps)?,
                to_json(&recipe.suitable)?,
                recipe.updated_at.to_rfc3339(),
            ],
        )
        .map_err(|e| to_catalog_err(e.to_string()))?;
    if changed == 0 {
        return Err(CatalogError::NotFound {
            kind: "recipe",
            id: recipe.id.to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn delete(conn: &Connection, id: &Uuid) -> TizhiResult<()> {
    let changed = conn
        .execute("DELETE FROM recipes WHERE id = ?1", params![id.to_string()])
        .map_err(|e| to_catalog_err(e.to_string()))?;
    if changed == 0 {
        return Err(CatalogError::NotFound {
            kind: "recipe",
            id: id.to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn list(conn: &Connection) -> TizhiResult<Vec<Recipe>> {
    query_rows(conn, &format!("SELECT {COLUMNS} FROM recipes ORDER BY name"), params![])
}

pub fn for_constitution(
    conn: &Connection,
    constitution: Constitution,
) -> TizhiResult<Vec<Recipe>> {
    let candidates = query_rows(
        conn,
        &format!("SELECT {COLUMNS} FROM recipes WHERE suitable LIKE ?1 ORDER BY name"),
        params![like_pattern(constitution)],
    )?;
    Ok(candidates
        .into_iter()
        .filter(|r| r.suitable.contains(&constitution))
        .collect())
}

fn query_rows(
    conn: &Connection,
    sql: &str,
    args: &[&dyn rusqlite::ToSql],
) -> TizhiResult<Vec<Recipe>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_catalog_err(e.to_string()))?;
    let mut rows = stmt.query(args).map_err(|e| to_catalog_err(e.to_string()))?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().map_err(|e| to_catalog_err(e.to_string()))? {
        out.push(from_row(row)?);
    }
    Ok(out)
}

fn from_row(row: &Row<'_>) -> TizhiResult<Recipe> {
    let id: String = row.get(0).map_err(|e| to_catalog_err(e.to_string()))?;
    let ingredients: String = row.get(3).map_err(|e| to_catalog_err(e.to_string()))?;
    let steps: String = row.get(4).map_err(|e| to_catalog_err(e.to_string()))?;
    let suitable: String = row.get(5).map_err(|e| to_catalog_err(e.to_string()))?;
    let created_at: String = row.get(6).map_err(|e| to_catalog_err(e.to_string()))?;
    let updated_at: String = row.get(7).map_err(|e| to_catalog_err(e.to_string()))?;
    Ok(Recipe {
        id: parse_uuid(&id)?,
        name: row.get(1).map_err(|e| to_catalog_err(e.to_string()))?,
        summary: row.get(2).map_err(|e| to_catalog_err(e.to_string()))?,
        ingredients: from_json(&ingredients)?,
        steps: from_json(&steps)?,
        suitable: from_json(&suitable)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
