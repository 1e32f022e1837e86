use std::sync::Arc;

use indexmap::IndexSet;

pub const DEFAULT_SKILLS: [&str; 7] = [
    "JavaScript",
    "Java",
    "Python",
    "C++",
    "DevSecOps",
    "React",
    "Angular",
];

/// Predefined skills offered for one-click selection. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalog {
    entries: Arc<[String]>,
}

impl SkillCatalog {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = IndexSet::new();
        for entry in entries {
            seen.insert(entry.into());
        }
        Self {
            entries: seen.into_iter().collect(),
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.entries.iter().any(|entry| entry == skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
    Empty,
}

impl AddOutcome {
    /// Whether the draft box should be cleared after the attempt.
    pub fn clears_draft(self) -> bool {
        !matches!(self, AddOutcome::Empty)
    }
}

/// The user's selected skills. Membership is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    selected: IndexSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, draft: &str) -> AddOutcome {
        let trimmed = draft.trim();
        if trimmed.is_empty() {
            return AddOutcome::Empty;
        }
        if self.selected.insert(trimmed.to_string()) {
            AddOutcome::Added
        } else {
            AddOutcome::Duplicate
        }
    }

    /// Flips membership of `skill`; returns whether it is selected afterwards.
    pub fn toggle(&mut self, skill: &str) -> bool {
        if self.selected.shift_remove(skill) {
            false
        } else {
            self.selected.insert(skill.to_string());
            true
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.selected.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogChip<'a> {
    pub name: &'a str,
    pub highlighted: bool,
}

/// Display partition of the selection: catalog entries with their highlight
/// state, followed by `skills \ catalog` in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillView<'a> {
    pub catalog: Vec<CatalogChip<'a>>,
    pub custom: Vec<&'a str>,
}

pub fn partition<'a>(catalog: &'a SkillCatalog, skills: &'a SkillSet) -> SkillView<'a> {
    let chips = catalog
        .iter()
        .map(|name| CatalogChip {
            name,
            highlighted: skills.contains(name),
        })
        .collect();
    let custom = skills
        .iter()
        .filter(|skill| !catalog.contains(skill))
        .collect();
    SkillView {
        catalog: chips,
        custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_membership() {
        let mut skills = SkillSet::new();
        assert!(skills.toggle("Java"));
        assert!(skills.contains("Java"));
        assert!(!skills.toggle("Java"));
        assert!(skills.is_empty());
    }

    #[test]
    fn blank_drafts_are_rejected() {
        let mut skills = SkillSet::new();
        assert_eq!(skills.add(""), AddOutcome::Empty);
        assert_eq!(skills.add("   "), AddOutcome::Empty);
        assert!(skills.is_empty());
    }

    #[test]
    fn add_trims_and_deduplicates() {
        let mut skills = SkillSet::new();
        assert_eq!(skills.add("  Rust "), AddOutcome::Added);
        assert_eq!(skills.add("Rust"), AddOutcome::Duplicate);
        assert_eq!(skills.add("rust"), AddOutcome::Added);
        assert_eq!(skills.to_vec(), vec!["Rust", "rust"]);
    }

    #[test]
    fn partition_splits_catalog_and_custom() {
        let catalog = SkillCatalog::default();
        let mut skills = SkillSet::new();
        skills.add("Go");
        skills.toggle("Python");
        skills.add("Terraform");

        let view = partition(&catalog, &skills);
        let highlighted: Vec<_> = view
            .catalog
            .iter()
            .filter(|chip| chip.highlighted)
            .map(|chip| chip.name)
            .collect();
        assert_eq!(highlighted, vec!["Python"]);
        assert_eq!(view.catalog.len(), DEFAULT_SKILLS.len());
        assert_eq!(view.custom, vec!["Go", "Terraform"]);
    }

    #[test]
    fn catalog_drops_repeated_entries() {
        let catalog = SkillCatalog::new(["Rust", "Go", "Rust"]);
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["Rust", "Go"]);
    }
}
