//! Insert, update, get, delete, list, and constitution lookup for acupoints.

use rusqlite::{params, Connection, Row};

use tizhi_core::constitution::Constitution;
use tizhi_core::errors::{CatalogError, TizhiResult};
use tizhi_core::models::Acupoint;
use uuid::Uuid;

use super::{from_json, like_pattern, parse_timestamp, parse_uuid, to_json};
use crate::to_catalog_err;

const COLUMNS: &str = "id, name, meridian, location, indications, suitable, created_at";

pub fn insert(conn: &Connection, acupoint: &Acupoint) -> TizhiResult<()> {
    conn.execute(
        "INSERT INTO acupoints (id, name, meridian, location, indications, suitable, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            acupoint.id.to_string(),
            acupoint.name,
            acupoint.meridian,
            acupoint.location,
            acupoint.indications,
            to_json(&acupoint.suitable)?,
            acupoint.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_catalog_err(e.to_string()))?;
    Ok(())
}

pub fn get(conn: &Connection, id: &Uuid) -> TizhiResult<Option<Acupoint>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLUMNS} FROM acupoints WHERE id = ?1"))
        .map_err(|e| to_catalog_err(e.to_string()))?;
    let mut rows = stmt
        .query(params![id.to_string()])
        .map_err(|e| to_catalog_err(e.to_string()))?;
    match rows.next().map_err(|e| to_catalog_err(e.to_string()))? {
        Some(row) => Ok(Some(from_row(row)?)),
        None => Ok(None),
    }
}

pub fn update(conn: &Connection, acupoint: &Acupoint) -> TizhiResult<()> {
    let changed = conn
        .execute(
            "UPDATE acupoints
             SET name = ?2, meridian = ?3, location = ?4, indications = ?5, suitable = ?6
             WHERE id = ?1",
            params![
                acupoint.id.to_string(),
                acupoint.name,
                acupoint.meridian,
                acupoint.location,
                acupoint.indications,
                to_json(&acupoint.suitable)?,
            ],
        )
        .map_err(|e| to_catalog_err(e.to_string()))?;
    if changed == 0 {
        return Err(CatalogError::NotFound {
            kind: "acupoint",
            id: acupoint.id.to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn delete(conn: &Connection, id: &Uuid) -> TizhiResult<()> {
    let changed = conn
        .execute("DELETE FROM acupoints WHERE id = ?1", params![id.to_string()])
        .map_err(|e| to_catalog_err(e.to_string()))?;
    if changed == 0 {
        return Err(CatalogError::NotFound {
            kind: "acupoint",
            id: id.to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn list(conn: &Connection) -> TizhiResult<Vec<Acupoint>> {
    query_rows(conn, &format!("SELECT {COLUMNS} FROM acupoints ORDER BY name"), params![])
}

pub fn for_constitution(
    conn: &Connection,
    constitution: Constitution,
) -> TizhiResult<Vec<Acupoint>> {
    let candidates = query_rows(
        conn,
        &format!("SELECT {COLUMNS} FROM acupoints WHERE suitable LIKE ?1 ORDER BY name"),
        params![like_pattern(constitution)],
    )?;
    Ok(candidates
        .into_iter()
        .filter(|a| a.suitable.contains(&constitution))
        .collect())
}

fn query_rows(
    conn: &Connection,
    sql: &str,
    args: &[&dyn rusqlite::ToSql],
) -> TizhiResult<Vec<Acupoint>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_catalog_err(e.to_string()))?;
    let mut rows = stmt.query(args).map_err(|e| to_catalog_err(e.to_string()))?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().map_err(|e| to_catalog_err(e.to_string()))? {
        out.push(from_row(row)?);
    }
    Ok(out)
}

fn from_row(row: &Row<'_>) -> TizhiResult<Acupoint> {
    let id: String = row.get(0).map_err(|e| to_catalog_err(e.to_string()))?;
    let suitable: String = row.get(5).map_err(|e| to_catalog_err(e.to_string()))?;
    let created_at: String = row.get(6).map_err(|e| to_catalog_err(e.to_string()))?;
    Ok(Acupoint {
        id: parse_uuid(&id)?,
        name: row.get(1).map_err(|e| to_catalog_err(e.to_string()))?,
        meridian: row.get(2).map_err(|e| to_catalog_err(e.to_string()))?,
        location: row.get(3).map_err(|e| to_catalog_err(e.to_string()))?,
        indications: row.get(4).map_err(|e| to_catalog_err(e.to_string()))?,
        suitable: from_json(&suitable)?,
        created_at: parse_timestamp(&created_at)?,
    })
}
