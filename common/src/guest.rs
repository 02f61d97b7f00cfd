use serde::{Deserialize, Serialize};

use crate::error::InviteError;

/// Stable identifier for a guest entry.
///
/// Assigned from a monotonic counter and never reused, so an id held by a view
/// keeps pointing at the same guest after other entries are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GuestId(pub u32);

/// A name permitted to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
}

/// Ordered allow-list of guest names.
///
/// Insertion order is kept; entries can be renamed in place or removed.
/// No two entries ever hold the same (exact, case-sensitive) name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuestDirectory {
    guests: Vec<Guest>,
    next_id: u32,
}

impl GuestDirectory {
    pub fn new() -> Self {
        Self {
            guests: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a directory from seed names. Blank and repeated names are skipped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dir = Self::new();
        for name in names {
            let _ = dir.add(name.as_ref());
        }
        dir
    }

    /// Append a guest. The name is trimmed before checking and storing.
    pub fn add(&mut self, name: &str) -> Result<GuestId, InviteError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InviteError::EmptyGuestName);
        }
        if self.contains(name) {
            return Err(InviteError::DuplicateGuest(name.to_string()));
        }
        let id = GuestId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.guests.push(Guest {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    /// Overwrite the name of an existing entry, keeping its position.
    ///
    /// Rejects a name already held by a different entry.
    pub fn rename(&mut self, id: GuestId, new_name: &str) -> Result<(), InviteError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(InviteError::EmptyGuestName);
        }
        let idx = self.position(id).ok_or(InviteError::UnknownGuest)?;
        if self
            .guests
            .iter()
            .any(|g| g.id != id && g.name == new_name)
        {
            return Err(InviteError::DuplicateGuest(new_name.to_string()));
        }
        self.guests[idx].name = new_name.to_string();
        Ok(())
    }

    /// Remove an entry. Everything after it shifts one position left.
    pub fn remove(&mut self, id: GuestId) -> Result<Guest, InviteError> {
        let idx = self.position(id).ok_or(InviteError::UnknownGuest)?;
        Ok(self.guests.remove(idx))
    }

    /// Login gate check: a name must be chosen and be on the list.
    pub fn admit(&self, name: &str) -> Result<(), InviteError> {
        if name.trim().is_empty() {
            return Err(InviteError::NoGuestSelected);
        }
        if !self.contains(name) {
            return Err(InviteError::UnknownGuest);
        }
        Ok(())
    }

    /// Exact, case-sensitive membership check.
    pub fn contains(&self, name: &str) -> bool {
        self.guests.iter().any(|g| g.name == name)
    }

    pub fn get(&self, id: GuestId) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == id)
    }

    pub fn get_at(&self, index: usize) -> Option<&Guest> {
        self.guests.get(index)
    }

    pub fn position(&self, id: GuestId) -> Option<usize> {
        self.guests.iter().position(|g| g.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Guest> {
        self.guests.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.guests.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> GuestDirectory {
        GuestDirectory::from_names(["A", "B", "C"])
    }

    #[test]
    fn add_appends_unique_name() {
        let mut dir = abc();
        let id = dir.add("D").unwrap();
        assert_eq!(dir.len(), 4);
        assert_eq!(dir.get_at(3).map(|g| g.id), Some(id));
        assert_eq!(dir.names(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn add_trims_input() {
        let mut dir = GuestDirectory::new();
        dir.add("  Emma Rodriguez ").unwrap();
        assert!(dir.contains("Emma Rodriguez"));
    }

    #[test]
    fn add_rejects_duplicate() {
        let mut dir = abc();
        let err = dir.add("B").unwrap_err();
        assert_eq!(err, InviteError::DuplicateGuest("B".into()));
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut dir = abc();
        assert!(dir.add("b").is_ok());
        assert_eq!(dir.len(), 4);
    }

    #[test]
    fn add_rejects_blank() {
        let mut dir = abc();
        assert_eq!(dir.add("   "), Err(InviteError::EmptyGuestName));
        assert_eq!(dir.add(""), Err(InviteError::EmptyGuestName));
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn remove_middle_shifts_left() {
        let mut dir = abc();
        let b = dir.get_at(1).unwrap().id;
        let removed = dir.remove(b).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(dir.names(), vec!["A", "C"]);
        assert_eq!(dir.position(dir.get_at(1).unwrap().id), Some(1));
    }

    #[test]
    fn ids_survive_removal() {
        let mut dir = abc();
        let a = dir.get_at(0).unwrap().id;
        let c = dir.get_at(2).unwrap().id;
        dir.remove(a).unwrap();
        assert_eq!(dir.get(c).map(|g| g.name.as_str()), Some("C"));
        assert_eq!(dir.remove(a), Err(InviteError::UnknownGuest));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut dir = abc();
        let c = dir.get_at(2).unwrap().id;
        dir.remove(c).unwrap();
        let d = dir.add("D").unwrap();
        assert!(d > c);
    }

    #[test]
    fn rename_in_place() {
        let mut dir = abc();
        let b = dir.get_at(1).unwrap().id;
        dir.rename(b, " Bea ").unwrap();
        assert_eq!(dir.names(), vec!["A", "Bea", "C"]);
    }

    #[test]
    fn rename_to_own_name_is_allowed() {
        let mut dir = abc();
        let b = dir.get_at(1).unwrap().id;
        assert!(dir.rename(b, "B").is_ok());
    }

    #[test]
    fn rename_rejects_collision() {
        let mut dir = abc();
        let b = dir.get_at(1).unwrap().id;
        assert_eq!(
            dir.rename(b, "C"),
            Err(InviteError::DuplicateGuest("C".into()))
        );
        assert_eq!(dir.names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn rename_rejects_blank() {
        let mut dir = abc();
        let a = dir.get_at(0).unwrap().id;
        assert_eq!(dir.rename(a, "  "), Err(InviteError::EmptyGuestName));
        assert_eq!(dir.names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn admit_requires_listed_name() {
        let dir = abc();
        assert_eq!(dir.admit(""), Err(InviteError::NoGuestSelected));
        assert_eq!(dir.admit("Z"), Err(InviteError::UnknownGuest));
        assert_eq!(dir.admit("a"), Err(InviteError::UnknownGuest));
        assert!(dir.admit("A").is_ok());
    }

    #[test]
    fn seed_skips_repeats() {
        let dir = GuestDirectory::from_names(["A", "A", " ", "B"]);
        assert_eq!(dir.names(), vec!["A", "B"]);
    }
}
