//! Profile draft model
//!
//! A draft is the in-progress, unsaved profile a form screen edits. List
//! sections (skills, projects, work) share one abstraction, `ListField`,
//! instead of duplicating add/remove/update logic per field.

use devfolio_types::{Profile, ProjectEntry, SocialLinks, WorkEntry};
use serde::{Deserialize, Serialize};

/// A variable-length form section that always keeps at least one row
///
/// The UI renders one input row per element, so the list is never allowed
/// to shrink to zero: `remove` refuses the last element. Indices out of
/// bounds are programmer errors and trip a debug assertion; in release the
/// call is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListField<T> {
    items: Vec<T>,
}

impl<T: Clone> ListField<T> {
    /// Start with a single row
    pub fn new(initial: T) -> Self {
        Self {
            items: vec![initial],
        }
    }

    /// Build from fetched data, substituting one blank row when empty
    ///
    /// Used when editing an existing profile: the form must always show at
    /// least one input row even if the server record has none.
    pub fn padded(items: Vec<T>, blank: T) -> Self {
        if items.is_empty() {
            Self::new(blank)
        } else {
            Self { items }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true: the list holds at least one row by construction
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Replace the whole element at `index` (plain-string rows)
    pub fn replace(&mut self, index: usize, item: T) {
        debug_assert!(index < self.items.len(), "replace index out of bounds");
        if let Some(slot) = self.items.get_mut(index) {
            *slot = item;
        }
    }

    /// Edit the element at `index` in place (struct rows)
    ///
    /// The closure sees the current element, so untouched fields carry over.
    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut T)) {
        debug_assert!(index < self.items.len(), "update index out of bounds");
        if let Some(slot) = self.items.get_mut(index) {
            f(slot);
        }
    }

    /// Append a row at the end, preserving order
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the row at `index` unless it is the only one left
    ///
    /// Returns whether a row was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        debug_assert!(index < self.items.len(), "remove index out of bounds");
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    /// Consume the field, yielding the raw rows
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// The in-progress profile a form screen edits
///
/// Scalar fields are plain public strings: assigning them is the whole
/// operation, no validation happens until submission. Each list section is
/// independent, editing one never touches the others.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub education: String,
    pub skills: ListField<String>,
    pub projects: ListField<ProjectEntry>,
    pub work: ListField<WorkEntry>,
    pub links: SocialLinks,
}

impl ProfileDraft {
    /// An empty draft with one blank row per list section
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            education: String::new(),
            skills: ListField::new(String::new()),
            projects: ListField::new(ProjectEntry::default()),
            work: ListField::new(WorkEntry::default()),
            links: SocialLinks::default(),
        }
    }

    /// Seed a draft from a fetched profile, padding empty list sections
    pub fn from_profile(profile: Profile) -> Self {
        Self {
            name: profile.name,
            email: profile.email,
            education: profile.education,
            skills: ListField::padded(profile.skills, String::new()),
            projects: ListField::padded(profile.projects, ProjectEntry::default()),
            work: ListField::padded(profile.work, WorkEntry::default()),
            links: profile.links,
        }
    }
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_skills() -> ListField<String> {
        let mut field = ListField::new("Rust".to_string());
        field.push("Go".to_string());
        field.push("SQL".to_string());
        field
    }

    #[test]
    fn test_new_has_one_row() {
        let field: ListField<String> = ListField::new(String::new());
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_padded_empty_gets_blank_row() {
        let field = ListField::padded(Vec::<String>::new(), String::new());
        assert_eq!(field.items(), &[String::new()]);

        let field = ListField::padded(vec!["Rust".to_string()], String::new());
        assert_eq!(field.items(), &["Rust".to_string()]);
    }

    #[test]
    fn test_replace_whole_element() {
        let mut field = three_skills();
        field.replace(1, "Zig".to_string());
        assert_eq!(field.items(), &["Rust", "Zig", "SQL"]);
    }

    #[test]
    fn test_update_preserves_other_keys() {
        let mut field = ListField::new(ProjectEntry::new(
            "Crawler",
            "Fetches pages",
            Some("https://example.com".to_string()),
        ));
        field.update(0, |p| p.title = "Indexer".to_string());

        let entry = field.get(0).unwrap();
        assert_eq!(entry.title, "Indexer");
        assert_eq!(entry.description, "Fetches pages");
        assert_eq!(entry.link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_remove_never_empties_the_list() {
        let mut field = three_skills();
        assert!(field.remove(0));
        assert!(field.remove(0));
        // Last row must survive, whatever index is asked for
        assert!(!field.remove(0));
        assert_eq!(field.len(), 1);
        assert_eq!(field.items(), &["SQL"]);
    }

    #[test]
    fn test_push_then_remove_is_idempotent_for_other_rows() {
        let mut field = three_skills();
        let before = field.items().to_vec();

        field.push("Haskell".to_string());
        assert!(field.remove(3));

        assert_eq!(field.items(), before.as_slice());
    }

    #[test]
    fn test_list_sections_are_independent() {
        let mut draft = ProfileDraft::new();
        draft.projects.update(0, |p| p.title = "Crawler".to_string());
        draft.work.update(0, |w| w.title = "Engineer".to_string());

        draft.skills.replace(0, "Rust".to_string());
        draft.skills.push("Go".to_string());
        assert!(draft.skills.remove(1));

        assert_eq!(draft.projects.get(0).unwrap().title, "Crawler");
        assert_eq!(draft.work.get(0).unwrap().title, "Engineer");
        assert_eq!(draft.links, SocialLinks::default());
    }

    #[test]
    fn test_from_profile_pads_empty_sections() {
        let profile = Profile {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            education: "Analytical Engines".to_string(),
            skills: vec!["Rust".to_string()],
            projects: Vec::new(),
            work: Vec::new(),
            links: SocialLinks::default(),
        };

        let draft = ProfileDraft::from_profile(profile);
        assert_eq!(draft.skills.items(), &["Rust".to_string()]);
        assert_eq!(draft.projects.len(), 1);
        assert_eq!(draft.projects.get(0).unwrap(), &ProjectEntry::default());
        assert_eq!(draft.work.len(), 1);
    }
}
