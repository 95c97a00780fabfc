//! Dream repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Edits replace the whole record; concurrent writers resolve last-write-wins.
//! - Deletion is a hard delete.

use crate::model::dream::{DreamCategory, DreamEvent, DreamId};
use crate::repo::{parse_timestamp, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

const DREAM_SELECT_SQL: &str = "SELECT
    uuid,
    fy,
    month,
    category,
    title,
    description,
    created_at,
    updated_at,
    user_id
FROM dreams";

/// Query options for listing dreams.
#[derive(Debug, Clone, Default)]
pub struct DreamListQuery {
    /// Restrict to one fiscal year.
    pub fy: Option<i32>,
}

/// Repository interface for dream CRUD operations.
pub trait DreamRepository {
    fn create_dream(&self, dream: &DreamEvent) -> RepoResult<DreamId>;
    fn replace_dream(&self, dream: &DreamEvent) -> RepoResult<()>;
    fn get_dream(&self, id: DreamId) -> RepoResult<Option<DreamEvent>>;
    fn list_dreams(&self, query: &DreamListQuery) -> RepoResult<Vec<DreamEvent>>;
    fn delete_dream(&self, id: DreamId) -> RepoResult<()>;
}

/// SQLite-backed dream repository.
pub struct SqliteDreamRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDreamRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DreamRepository for SqliteDreamRepository<'_> {
    fn create_dream(&self, dream: &DreamEvent) -> RepoResult<DreamId> {
        dream.validate()?;

        self.conn.execute(
            "INSERT INTO dreams (
                uuid,
                fy,
                month,
                category,
                title,
                description,
                created_at,
                updated_at,
                user_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                dream.id.to_string(),
                dream.fy,
                dream.month,
                dream.category.as_str(),
                dream.title.as_str(),
                dream.description.as_deref(),
                dream.created_at.to_rfc3339(),
                dream.updated_at.map(|timestamp| timestamp.to_rfc3339()),
                dream.user_id.as_str(),
            ],
        )?;

        Ok(dream.id)
    }

    fn replace_dream(&self, dream: &DreamEvent) -> RepoResult<()> {
        dream.validate()?;

        let changed = self.conn.execute(
            "UPDATE dreams
             SET
                fy = ?1,
                month = ?2,
                category = ?3,
                title = ?4,
                description = ?5,
                created_at = ?6,
                updated_at = ?7,
                user_id = ?8
             WHERE uuid = ?9;",
            params![
                dream.fy,
                dream.month,
                dream.category.as_str(),
                dream.title.as_str(),
                dream.description.as_deref(),
                dream.created_at.to_rfc3339(),
                dream.updated_at.map(|timestamp| timestamp.to_rfc3339()),
                dream.user_id.as_str(),
                dream.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(dream.id));
        }

        Ok(())
    }

    fn get_dream(&self, id: DreamId) -> RepoResult<Option<DreamEvent>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DREAM_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_dream_row(row)?));
        }

        Ok(None)
    }

    fn list_dreams(&self, query: &DreamListQuery) -> RepoResult<Vec<DreamEvent>> {
        let mut sql = format!("{DREAM_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(fy) = query.fy {
            sql.push_str(" AND fy = ?");
            bind_values.push(Value::Integer(i64::from(fy)));
        }

        sql.push_str(" ORDER BY fy ASC, created_at ASC, uuid ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut dreams = Vec::new();

        while let Some(row) = rows.next()? {
            dreams.push(parse_dream_row(row)?);
        }

        Ok(dreams)
    }

    fn delete_dream(&self, id: DreamId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM dreams WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_dream_row(row: &Row<'_>) -> RepoResult<DreamEvent> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in dreams.uuid"))
    })?;

    let category_text: String = row.get("category")?;
    let category = DreamCategory::parse(&category_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid category `{category_text}` in dreams.category"
        ))
    })?;

    let created_at_text: String = row.get("created_at")?;
    let created_at = parse_timestamp(&created_at_text, "dreams.created_at")?;
    let updated_at = match row.get::<_, Option<String>>("updated_at")? {
        Some(value) => Some(parse_timestamp(&value, "dreams.updated_at")?),
        None => None,
    };

    Ok(DreamEvent {
        id,
        fy: row.get("fy")?,
        month: row.get("month")?,
        category,
        title: row.get("title")?,
        description: row.get("description")?,
        created_at,
        updated_at,
        user_id: row.get("user_id")?,
    })
}
