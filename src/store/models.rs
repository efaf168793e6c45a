//! Store Models
//!
//! Data structures for accounts and family members.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

/// A username/credential pair gating access to the UI.
///
/// Accounts are created at registration or first-run seeding and are never
/// mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub credential_hash: String,
}

/// Gender enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "male" => Self::Male,
            "female" => Self::Female,
            "other" => Self::Other,
            _ => Self::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
        }
    }

    /// Next variant, wrapping around (for the form's select field)
    pub fn cycle(&self, forward: bool) -> Self {
        if forward {
            match self {
                Self::Male => Self::Female,
                Self::Female => Self::Other,
                Self::Other => Self::Unknown,
                Self::Unknown => Self::Male,
            }
        } else {
            match self {
                Self::Male => Self::Unknown,
                Self::Female => Self::Male,
                Self::Other => Self::Female,
                Self::Unknown => Self::Other,
            }
        }
    }
}

/// Family member record
///
/// `parent1_id`, `parent2_id` and `partner_id` are soft references to other
/// member ids; they may point at ids that do not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMember {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// DD-MM-YYYY, stored as entered, unvalidated
    pub birth_date: String,
    pub gender: Gender,
    pub parent1_id: Option<String>,
    pub parent2_id: Option<String>,
    pub partner_id: Option<String>,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

impl FamilyMember {
    /// Create a new member with the given id
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: impl Into<String>,
        gender: Gender,
    ) -> Self {
        let now = Local::now();
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date: birth_date.into(),
            gender,
            parent1_id: None,
            parent2_id: None,
            partner_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The persisted member mapping, keyed by member id
pub type FamilyData = BTreeMap<String, FamilyMember>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_roundtrip() {
        let genders = [Gender::Male, Gender::Female, Gender::Other, Gender::Unknown];
        for g in genders {
            assert_eq!(Gender::from_str(g.as_str()), g);
        }
    }

    #[test]
    fn test_gender_unknown_fallback() {
        assert_eq!(Gender::from_str("martian"), Gender::Unknown);
        assert_eq!(Gender::from_str(""), Gender::Unknown);
    }

    #[test]
    fn test_gender_cycle_covers_all() {
        let mut g = Gender::Male;
        let mut seen = vec![g];
        for _ in 0..3 {
            g = g.cycle(true);
            seen.push(g);
        }
        seen.sort_by_key(|g| g.as_str());
        seen.dedup();
        assert_eq!(seen.len(), 4);
        assert_eq!(Gender::Male.cycle(true).cycle(false), Gender::Male);
    }

    #[test]
    fn test_member_new() {
        let member = FamilyMember::new("p1", "Anna", "Jansen", "01-02-1983", Gender::Female);
        assert_eq!(member.id, "p1");
        assert_eq!(member.full_name(), "Anna Jansen");
        assert!(member.parent1_id.is_none());
    }
}
