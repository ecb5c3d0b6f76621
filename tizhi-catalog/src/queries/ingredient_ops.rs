//! Insert, update, get, delete, list, and constitution lookup for ingredients.

use rusqlite::{params, Connection, Row};

use tizhi_core::constitution::Constitution;
use tizhi_core::errors::{CatalogError, TizhiResult};
use tizhi_core::models::Ingredient;
use uuid::Uuid;

use super::{from_json, like_pattern, parse_timestamp, parse_uuid, to_json};
use crate::to_catalog_err;

const COLUMNS: &str = "id, name, nature, flavor, functions, suitable, avoid, created_at";

pub fn insert(conn: &Connection, ingredient: &Ingredient) -> TizhiResult<()> {
    conn.execute(
        "INSERT INTO ingredients (id, name, nature, flavor, functions, suitable, avoid, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            ingredient.id.to_string(),
            ingredient.name,
            ingredient.nature,
            ingredient.flavor,
            ingredient.functions,
            to_json(&ingredient.suitable)?,
            to_json(&ingredient.avoid)?,
            ingredient.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_catalog_err(e.to_string()))?;
    Ok(())
}

pub fn get(conn: &Connection, id: &Uuid) -> TizhiResult<Option<Ingredient>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLUMNS} FROM ingredients WHERE id = ?1"))
        .map_err(|e| to_catalog_err(e.to_string()))?;
    let mut rows = stmt
        .query(params![id.to_string()])
        .map_err(|e| to_catalog_err(e.to_string()))?;
    match rows.next().map_err(|e| to_catalog_err(e.to_string()))? {
        Some(row) => Ok(Some(from_row(row)?)),
        None => Ok(None),
    }
}

pub fn update(conn: &Connection, ingredient: &Ingredient) -> TizhiResult<()> {
    let changed = conn
        .execute(
            "UPDATE ingredients
             SET name = ?2, nature = ?3, flavor = ?4, functions = ?5,
                 suitable = ?6, avoid = ?7
             WHERE id = ?1",
            params![
                ingredient.id.to_string(),
                ingredient.name,
                ingredient.nature,
                ingredient.flavor,
                ingredient.functions,
                to_json(&ingredient.suitable)?,
                to_json(&ingredient.avoid)?,
            ],
        )
        .map_err(|e| to_catalog_err(e.to_string()))?;
    if changed == 0 {
        return Err(CatalogError::NotFound {
            kind: "ingredient",
            id: ingredient.id.to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn delete(conn: &Connection, id: &Uuid) -> TizhiResult<()> {
    let changed = conn
        .execute("DELETE FROM ingredients WHERE id = ?1", params![id.to_string()])
        .map_err(|e| to_catalog_err(e.to_string()))?;
    if changed == 0 {
        return Err(CatalogError::NotFound {
            kind: "ingredient",
            id: id.to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn list(conn: &Connection) -> TizhiResult<Vec<Ingredient>> {
    query_rows(conn, &format!("SELECT {COLUMNS} FROM ingredients ORDER BY name"), params![])
}

pub fn for_constitution(
    conn: &Connection,
    constitution: Constitution,
) -> TizhiResult<Vec<Ingredient>> {
    let candidates = query_rows(
        conn,
        &format!("SELECT {COLUMNS} FROM ingredients WHERE suitable LIKE ?1 ORDER BY name"),
        params![like_pattern(constitution)],
    )?;
    Ok(candidates
        .into_iter()
        .filter(|i| i.suitable.contains(&constitution))
        .collect())
}

fn query_rows(
    conn: &Connection,
    sql: &str,
    args: &[&dyn rusqlite::ToSql],
) -> TizhiResult<Vec<Ingredient>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_catalog_err(e.to_string()))?;
    let mut rows = stmt.query(args).map_err(|e| to_catalog_err(e.to_string()))?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().map_err(|e| to_catalog_err(e.to_string()))? {
        out.push(from_row(row)?);
    }
    Ok(out)
}

fn from_row(row: &Row<'_>) -> TizhiResult<Ingredient> {
    let id: String = row.get(0).map_err(|e| to_catalog_err(e.to_string()))?;
    let suitable: String = row.get(5).map_err(|e| to_catalog_err(e.to_string()))?;
    let avoid: String = row.get(6).map_err(|e| to_catalog_err(e.to_string()))?;
    let created_at: String = row.get(7).map_err(|e| to_catalog_err(e.to_string()))?;
    Ok(Ingredient {
        id: parse_uuid(&id)?,
        name: row.get(1).map_err(|e| to_catalog_err(e.to_string()))?,
        nature: row.get(2).map_err(|e| to_catalog_err(e.to_string()))?,
        flavor: row.get(3).map_err(|e| to_catalog_err(e.to_string()))?,
        functions: row.get(4).map_err(|e| to_catalog_err(e.to_string()))?,
        suitable: from_json(&suitable)?,
        avoid: from_json(&avoid)?,
        created_at: parse_timestamp(&created_at)?,
    })
}
