use dreamplan_core::db::migrations::latest_version;
use dreamplan_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

const PLANNER_TABLES: [&str; 3] = ["family_profile", "family_members", "dreams"];

#[test]
fn fresh_store_is_on_latest_schema_with_planner_tables() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), latest_version());
    for table in PLANNER_TABLES {
        assert!(has_table(&conn, table), "missing table {table}");
    }
}

#[test]
fn reopening_a_planner_file_keeps_schema_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO family_profile (id, start_fy, updated_at) VALUES (1, 2024, 'now');",
            [],
        )
        .unwrap();
    }

    let reopened = open_db(&path).unwrap();
    assert_eq!(user_version(&reopened), latest_version());
    let start_fy: i32 = reopened
        .query_row("SELECT start_fy FROM family_profile;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(start_fy, 2024);
}

#[test]
fn file_from_newer_build_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("from-the-future.sqlite3");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 42;")
        .unwrap();

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 42);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn only_one_profile_row_is_allowed() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO family_profile (id, start_fy, updated_at) VALUES (1, 2024, 'now');",
        [],
    )
    .unwrap();

    let second = conn.execute(
        "INSERT INTO family_profile (id, start_fy, updated_at) VALUES (2, 2025, 'now');",
        [],
    );
    assert!(second.is_err());
}

#[test]
fn members_require_an_existing_profile() {
    let conn = open_db_in_memory().unwrap();
    let orphan = conn.execute(
        "INSERT INTO family_members
            (member_id, profile_id, position, name, birth_year, birth_month, role)
         VALUES ('m-1', 1, 0, 'Hanako', 1980, 5, 'parent');",
        [],
    );
    assert!(orphan.is_err());
}

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn has_table(conn: &Connection, table: &str) -> bool {
    conn.query_row(
        "SELECT COUNT(1) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
        [table],
        |row| row.get::<_, i64>(0),
    )
    .unwrap()
        == 1
}
