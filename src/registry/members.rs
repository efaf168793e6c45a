//! Registry Operations
//!
//! The in-memory member mapping is a cache of the persisted one: every
//! mutation writes the full mapping through to the store before the cache is
//! updated, so a failed save leaves both sides on the prior state. Soft
//! references (`parent1_id` etc.) are never checked; dangling ids are allowed.

use std::collections::BTreeSet;

use chrono::Local;
use log::info;

use crate::store::{self, FamilyData, FamilyMember, Store};

use super::{RegistryError, RegistryResult};

/// Family member registry
pub struct Registry {
    members: FamilyData,
}

impl Registry {
    /// Load the registry from the store
    pub fn load(store: &Store) -> RegistryResult<Self> {
        Ok(Self {
            members: store::load_members(store.conn())?,
        })
    }

    /// Add a new member. Fails with `DuplicateId` when the id is taken.
    pub fn add(&mut self, store: &mut Store, member: FamilyMember) -> RegistryResult<()> {
        if self.members.contains_key(&member.id) {
            return Err(RegistryError::DuplicateId(member.id));
        }

        let mut next = self.members.clone();
        next.insert(member.id.clone(), member.clone());
        store::save_members(store, &next)?;

        info!("added member '{}'", member.id);
        self.members = next;
        Ok(())
    }

    /// Replace an existing member. Fails with `NotFound` when the id is
    /// absent. The id itself never changes; the stored `created_at` is kept
    /// and `updated_at` is refreshed.
    pub fn edit(&mut self, store: &mut Store, mut member: FamilyMember) -> RegistryResult<()> {
        let Some(existing) = self.members.get(&member.id) else {
            return Err(RegistryError::NotFound(member.id));
        };

        member.created_at = existing.created_at;
        member.updated_at = Local::now();

        let mut next = self.members.clone();
        next.insert(member.id.clone(), member.clone());
        store::save_members(store, &next)?;

        info!("edited member '{}'", member.id);
        self.members = next;
        Ok(())
    }

    /// Remove a member. Fails with `NotFound` when the id is absent.
    ///
    /// Destructive-intent confirmation is the caller's job; once called the
    /// removal is unconditional.
    pub fn remove(&mut self, store: &mut Store, id: &str) -> RegistryResult<()> {
        if !self.members.contains_key(id) {
            return Err(RegistryError::NotFound(id.to_string()));
        }

        let mut next = self.members.clone();
        next.remove(id);
        store::save_members(store, &next)?;

        info!("removed member '{}'", id);
        self.members = next;
        Ok(())
    }

    /// Pure lookup, no side effect
    pub fn get_by_id(&self, id: &str) -> Option<&FamilyMember> {
        self.members.get(id)
    }

    /// Re-read the mapping from the store, discarding the cache
    pub fn refresh(&mut self, store: &Store) -> RegistryResult<&FamilyData> {
        self.members = store::load_members(store.conn())?;
        info!("refreshed registry, {} members", self.members.len());
        Ok(&self.members)
    }

    /// Ids currently in the mapping (for form-level duplicate pre-checks)
    pub fn list_ids(&self) -> BTreeSet<String> {
        self.members.keys().cloned().collect()
    }

    /// The cached member mapping
    pub fn members(&self) -> &FamilyData {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Gender;

    fn setup() -> (Store, Registry) {
        let store = Store::open_in_memory().unwrap();
        let registry = Registry::load(&store).unwrap();
        (store, registry)
    }

    fn member(id: &str, first_name: &str) -> FamilyMember {
        FamilyMember::new(id, first_name, "Jansen", "01-02-1983", Gender::Unknown)
    }

    #[test]
    fn test_add_and_get() {
        let (mut store, mut registry) = setup();

        registry.add(&mut store, member("p1", "Anna")).unwrap();
        assert_eq!(registry.get_by_id("p1").unwrap().first_name, "Anna");
    }

    #[test]
    fn test_duplicate_add_leaves_mapping_unchanged() {
        let (mut store, mut registry) = setup();

        registry.add(&mut store, member("p1", "Anna")).unwrap();
        let result = registry.add(&mut store, member("p1", "Beatrix"));
        assert!(matches!(result, Err(RegistryError::DuplicateId(id)) if id == "p1"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_by_id("p1").unwrap().first_name, "Anna");

        // Persisted state also untouched
        let persisted = store::load_members(store.conn()).unwrap();
        assert_eq!(persisted["p1"].first_name, "Anna");
    }

    #[test]
    fn test_edit_missing_is_not_found_and_mutation_free() {
        let (mut store, mut registry) = setup();

        let result = registry.edit(&mut store, member("ghost", "Nobody"));
        assert!(matches!(result, Err(RegistryError::NotFound(id)) if id == "ghost"));
        assert!(registry.is_empty());
        assert!(store::load_members(store.conn()).unwrap().is_empty());
    }

    #[test]
    fn test_edit_replaces_record_and_keeps_created_at() {
        let (mut store, mut registry) = setup();

        registry.add(&mut store, member("p1", "Anna")).unwrap();
        let created_at = registry.get_by_id("p1").unwrap().created_at;

        let mut edited = member("p1", "Anne");
        edited.partner_id = Some("p2".to_string());
        registry.edit(&mut store, edited).unwrap();

        let stored = registry.get_by_id("p1").unwrap();
        assert_eq!(stored.first_name, "Anne");
        assert_eq!(stored.partner_id.as_deref(), Some("p2"));
        assert_eq!(stored.created_at, created_at);
    }

    #[test]
    fn test_remove_then_get_is_absent() {
        let (mut store, mut registry) = setup();

        registry.add(&mut store, member("p1", "Anna")).unwrap();
        registry.remove(&mut store, "p1").unwrap();

        assert!(registry.get_by_id("p1").is_none());
        assert!(matches!(
            registry.remove(&mut store, "p1"),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn test_dangling_references_are_allowed() {
        let (mut store, mut registry) = setup();

        let mut orphan = member("p1", "Piet");
        orphan.parent1_id = Some("never-created".to_string());
        orphan.parent2_id = Some("also-missing".to_string());

        registry.add(&mut store, orphan).unwrap();
        assert_eq!(
            registry.get_by_id("p1").unwrap().parent1_id.as_deref(),
            Some("never-created")
        );
    }

    #[test]
    fn test_refresh_discards_cache() {
        let (mut store, mut registry) = setup();
        registry.add(&mut store, member("p1", "Anna")).unwrap();

        // A second registry mutates the persisted mapping behind our back
        let mut other = Registry::load(&store).unwrap();
        other.add(&mut store, member("p2", "Kees")).unwrap();

        assert_eq!(registry.len(), 1);
        registry.refresh(&store).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_list_ids() {
        let (mut store, mut registry) = setup();
        registry.add(&mut store, member("p1", "Anna")).unwrap();
        registry.add(&mut store, member("p2", "Kees")).unwrap();

        let ids = registry.list_ids();
        assert!(ids.contains("p1"));
        assert!(ids.contains("p2"));
        assert_eq!(ids.len(), 2);
    }

    // The end-to-end flow: seed default account, log in, then run the member
    // lifecycle against one store.
    #[test]
    fn test_full_lifecycle() {
        let mut store = Store::open_in_memory().unwrap();

        assert!(crate::auth::ensure_default_account(&mut store).unwrap());
        crate::auth::login(&store, "admin", "password123").unwrap();

        let mut registry = Registry::load(&store).unwrap();
        registry.add(&mut store, member("p1", "Anna")).unwrap();
        assert!(registry.add(&mut store, member("p1", "Anna")).is_err());

        registry.edit(&mut store, member("p1", "Anne")).unwrap();
        assert_eq!(registry.get_by_id("p1").unwrap().first_name, "Anne");

        registry.remove(&mut store, "p1").unwrap();
        assert!(registry.get_by_id("p1").is_none());
    }
}
