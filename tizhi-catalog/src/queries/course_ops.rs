//! Insert, update, get, delete, list, and constitution lookup for courses.

use rusqlite::{params, Connection, Row};

use tizhi_core::constitution::Constitution;
use tizhi_core::errors::{CatalogError, TizhiResult};
use tizhi_core::models::Course;
use uuid::Uuid;

use super::{from_json, like_pattern, parse_timestamp, parse_uuid, to_json};
use crate::to_catalog_err;

const COLUMNS: &str = "id, title, summary, category, suitable, created_at";

pub fn insert(conn: &Connection, course: &Course) -> TizhiResult<()> {
    conn.execute(
        "INSERT INTO courses (id, title, summary, category, suitable, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            course.id.to_string(),
            course.title,
            course.summary,
            course.category,
            to_json(&course.suitable)?,
            course.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_catalog_err(e.to_string()))?;
    Ok(())
}

pub fn get(conn: &Connection, id: &Uuid) -> TizhiResult<Option<Course>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLUMNS} FROM courses WHERE id = ?1"))
        .map_err(|e| to_catalog_err(e.to_string()))?;
    let mut rows = stmt
        .query(params![id.to_string()])
        .map_err(|e| to_catalog_err(e.to_string()))?;
    match rows.next().map_err(|e| to_catalog_err(e.to_string()))? {
        Some(row) => Ok(Some(from_row(row)?)),
        None => Ok(None),
    }
}

pub fn update(conn: &Connection, course: &Course) -> TizhiResult<()> {
    let changed = conn
        .execute(
            "UPDATE courses
             SET title = ?2, summary = ?3, category = ?4, suitable = ?5
             WHERE id = ?1",
            params![
                course.id.to_string(),
                course.title,
                course.summary,
                course.category,
                to_json(&course.suitable)?,
            ],
        )
        .map_err(|e| to_catalog_err(e.to_string()))?;
    if changed == 0 {
        return Err(CatalogError::NotFound {
            kind: "course",
            id: course.id.to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn delete(conn: &Connection, id: &Uuid) -> TizhiResult<()> {
    let changed = conn
        .execute("DELETE FROM courses WHERE id = ?1", params![id.to_string()])
        .map_err(|e| to_catalog_err(e.to_string()))?;
    if changed == 0 {
        return Err(CatalogError::NotFound {
            kind: "course",
            id: id.to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn list(conn: &Connection) -> TizhiResult<Vec<Course>> {
    query_rows(conn, &format!("SELECT {COLUMNS} FROM courses ORDER BY title"), params![])
}

pub fn for_constitution(
    conn: &Connection,
    constitution: Constitution,
) -> TizhiResult<Vec<Course>> {
    let candidates = query_rows(
        conn,
        &format!("SELECT {COLUMNS} FROM courses WHERE suitable LIKE ?1 ORDER BY title"),
        params![like_pattern(constitution)],
    )?;
    Ok(candidates
        .into_iter()
        .filter(|c| c.suitable.contains(&constitution))
        .collect())
}

fn query_rows(
    conn: &Connection,
    sql: &str,
    args: &[&dyn rusqlite::ToSql],
) -> TizhiResult<Vec<Course>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_catalog_err(e.to_string()))?;
    let mut rows = stmt.query(args).map_err(|e| to_catalog_err(e.to_string()))?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().map_err(|e| to_catalog_err(e.to_string()))? {
        out.push(from_row(row)?);
    }
    Ok(out)
}

fn from_row(row: &Row<'_>) -> TizhiResult<Course> {
    let id: String = row.get(0).map_err(|e| to_catalog_err(e.to_string()))?;
    let suitable: String = row.get(4).map_err(|e| to_catalog_err(e.to_string()))?;
    let created_at: String = row.get(5).map_err(|e| to_catalog_err(e.to_string()))?;
    Ok(Course {
        id: parse_uuid(&id)?,
        title: row.get(1).map_err(|e| to_catalog_err(e.to_string()))?,
        summary: row.get(2).map_err(|e| to_catalog_err(e.to_string()))?,
        category: row.get(3).map_err(|e| to_catalog_err(e.to_string()))?,
        suitable: from_json(&suitable)?,
        created_at: parse_timestamp(&created_at)?,
    })
}
