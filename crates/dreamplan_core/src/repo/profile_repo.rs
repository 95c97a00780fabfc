//! Family profile repository.
//!
//! # Responsibility
//! - Read and replace the singleton family profile with its ordered members.
//!
//! # Invariants
//! - At most one profile row exists (`family_profile.id = 1`).
//! - Saving replaces the profile and all members in one transaction.
//! - Members are read back in saved order.

use crate::model::family::{FamilyMember, FamilyProfile, Gender, Role};
use crate::repo::{RepoError, RepoResult};
use chrono::Utc;
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

const PROFILE_ROW_ID: i64 = 1;

/// Repository interface for the singleton family profile.
pub trait ProfileRepository {
    fn get_profile(&self) -> RepoResult<Option<FamilyProfile>>;
    fn save_profile(&self, profile: &FamilyProfile, updated_by: Option<&str>) -> RepoResult<()>;
}

/// SQLite-backed profile repository.
pub struct SqliteProfileRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfileRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProfileRepository for SqliteProfileRepository<'_> {
    fn get_profile(&self) -> RepoResult<Option<FamilyProfile>> {
        let start_fy = self
            .conn
            .query_row(
                "SELECT start_fy FROM family_profile WHERE id = ?1;",
                [PROFILE_ROW_ID],
                |row| row.get::<_, i32>(0),
            )
            .optional()?;

        let Some(start_fy) = start_fy else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(
            "SELECT member_id, name, birth_year, birth_month, role, gender
             FROM family_members
             WHERE profile_id = ?1
             ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([PROFILE_ROW_ID])?;
        let mut members = Vec::new();
        while let Some(row) = rows.next()? {
            members.push(parse_member_row(row)?);
        }

        Ok(Some(FamilyProfile::new(start_fy, members)))
    }

    fn save_profile(&self, profile: &FamilyProfile, updated_by: Option<&str>) -> RepoResult<()> {
        profile.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO family_profile (id, start_fy, updated_at, updated_by)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                start_fy = excluded.start_fy,
                updated_at = excluded.updated_at,
                updated_by = excluded.updated_by;",
            params![
                PROFILE_ROW_ID,
                profile.start_fy,
                Utc::now().to_rfc3339(),
                updated_by
            ],
        )?;
        tx.execute(
            "DELETE FROM family_members WHERE profile_id = ?1;",
            [PROFILE_ROW_ID],
        )?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO family_members (
                    member_id,
                    profile_id,
                    position,
                    name,
                    birth_year,
                    birth_month,
                    role,
                    gender
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            )?;
            for (position, member) in profile.members.iter().enumerate() {
                insert.execute(params![
                    member.id.as_str(),
                    PROFILE_ROW_ID,
                    position as i64,
                    member.name.as_str(),
                    member.birth_year,
                    member.birth_month,
                    member.role.as_str(),
                    member.gender.map(Gender::as_str),
                ])?;
            }
        }
        tx.commit()?;

        info!(
            "event=profile_save module=repo status=ok start_fy={} member_count={}",
            profile.start_fy,
            profile.members.len()
        );
        Ok(())
    }
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<FamilyMember> {
    let role_text: String = row.get("role")?;
    let role = Role::parse(&role_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid role `{role_text}` in family_members.role"))
    })?;

    let gender = match row.get::<_, Option<String>>("gender")? {
        Some(value) => Some(Gender::parse(&value).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid gender `{value}` in family_members.gender"))
        })?),
        None => None,
    };

    Ok(FamilyMember {
        id: row.get("member_id")?,
        name: row.get("name")?,
        birth_year: row.get("birth_year")?,
        birth_month: row.get("birth_month")?,
        role,
        gender,
    })
}
