//! Store Queries
//!
//! Load/save pass-through for the two persisted mappings. Loads return an
//! empty mapping when nothing has been persisted yet; saves replace the whole
//! mapping in one transaction. No validation happens at this layer.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use rusqlite::{params, Connection, Row};

use super::connection::Store;
use super::models::{FamilyData, FamilyMember, Gender};
use super::StoreResult;

// ============================================================================
// Account Mapping
// ============================================================================

/// Load the full account mapping (username -> credential hash)
pub fn load_accounts(conn: &Connection) -> StoreResult<BTreeMap<String, String>> {
    let mut stmt = conn.prepare("SELECT username, credential_hash FROM accounts")?;

    let accounts = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .filter_map(|r| r.ok())
        .collect();

    Ok(accounts)
}

/// Replace the persisted account mapping with the given one
pub fn save_accounts(store: &mut Store, accounts: &BTreeMap<String, String>) -> StoreResult<()> {
    store.transaction(|conn| {
        conn.execute("DELETE FROM accounts", [])?;
        for (username, hash) in accounts {
            conn.execute(
                "INSERT INTO accounts (username, credential_hash) VALUES (?1, ?2)",
                params![username, hash],
            )?;
        }
        Ok(())
    })
}

// ============================================================================
// Family Member Mapping
// ============================================================================

/// Load the full member mapping (id -> record)
pub fn load_members(conn: &Connection) -> StoreResult<FamilyData> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, first_name, last_name, birth_date, gender, parent1_id, parent2_id, partner_id, created_at, updated_at
        FROM members
        "#,
    )?;

    let members = stmt
        .query_map([], row_to_member)?
        .filter_map(|r| r.ok())
        .map(|m| (m.id.clone(), m))
        .collect();

    Ok(members)
}

/// Replace the persisted member mapping with the given one
pub fn save_members(store: &mut Store, members: &FamilyData) -> StoreResult<()> {
    store.transaction(|conn| {
        conn.execute("DELETE FROM members", [])?;
        for member in members.values() {
            conn.execute(
                r#"
                INSERT INTO members (id, first_name, last_name, birth_date, gender, parent1_id, parent2_id, partner_id, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                "#,
                params![
                    member.id,
                    member.first_name,
                    member.last_name,
                    member.birth_date,
                    member.gender.as_str(),
                    member.parent1_id,
                    member.parent2_id,
                    member.partner_id,
                    member.created_at.to_rfc3339(),
                    member.updated_at.to_rfc3339(),
                ],
            )?;
        }
        Ok(())
    })
}

fn row_to_member(row: &Row) -> rusqlite::Result<FamilyMember> {
    Ok(FamilyMember {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        birth_date: row.get(3)?,
        gender: Gender::from_str(&row.get::<_, String>(4)?),
        parent1_id: row.get(5)?,
        parent2_id: row.get(6)?,
        partner_id: row.get(7)?,
        created_at: parse_datetime(row.get::<_, String>(8)?),
        updated_at: parse_datetime(row.get::<_, String>(9)?),
    })
}

fn parse_datetime(s: String) -> DateTime<Local> {
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Local))
        .unwrap_or_else(|_| Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_accounts_empty() {
        let store = Store::open_in_memory().unwrap();
        let accounts = load_accounts(store.conn()).unwrap();
        assert!(accounts.is_empty());
    }

    #[test]
    fn test_accounts_roundtrip() {
        let mut store = Store::open_in_memory().unwrap();

        let mut accounts = BTreeMap::new();
        accounts.insert("admin".to_string(), "$argon2id$fake".to_string());
        accounts.insert("marta".to_string(), "$argon2id$other".to_string());

        save_accounts(&mut store, &accounts).unwrap();
        assert_eq!(load_accounts(store.conn()).unwrap(), accounts);
    }

    #[test]
    fn test_save_accounts_overwrites() {
        let mut store = Store::open_in_memory().unwrap();

        let mut first = BTreeMap::new();
        first.insert("old".to_string(), "h1".to_string());
        save_accounts(&mut store, &first).unwrap();

        let mut second = BTreeMap::new();
        second.insert("new".to_string(), "h2".to_string());
        save_accounts(&mut store, &second).unwrap();

        let loaded = load_accounts(store.conn()).unwrap();
        assert_eq!(loaded, second);
        assert!(!loaded.contains_key("old"));
    }

    #[test]
    fn test_load_members_empty() {
        let store = Store::open_in_memory().unwrap();
        let members = load_members(store.conn()).unwrap();
        assert!(members.is_empty());
    }

    #[test]
    fn test_members_roundtrip() {
        let mut store = Store::open_in_memory().unwrap();

        let mut anna = FamilyMember::new("p1", "Anna", "Jansen", "01-02-1983", Gender::Female);
        anna.partner_id = Some("p2".to_string());
        let kees = FamilyMember::new("p2", "Kees", "Jansen", "17-11-1980", Gender::Male);

        let mut members = FamilyData::new();
        members.insert(anna.id.clone(), anna.clone());
        members.insert(kees.id.clone(), kees);

        save_members(&mut store, &members).unwrap();

        let loaded = load_members(store.conn()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded["p1"].first_name, "Anna");
        assert_eq!(loaded["p1"].partner_id.as_deref(), Some("p2"));
        assert_eq!(loaded["p2"].gender, Gender::Male);
    }

    #[test]
    fn test_dangling_references_survive_roundtrip() {
        let mut store = Store::open_in_memory().unwrap();

        let mut orphan = FamilyMember::new("p9", "Piet", "Visser", "03-03-2003", Gender::Male);
        orphan.parent1_id = Some("does-not-exist".to_string());

        let mut members = FamilyData::new();
        members.insert(orphan.id.clone(), orphan);
        save_members(&mut store, &members).unwrap();

        let loaded = load_members(store.conn()).unwrap();
        assert_eq!(loaded["p9"].parent1_id.as_deref(), Some("does-not-exist"));
    }
}
