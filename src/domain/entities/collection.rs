//! Ordered, id-unique collection of link entries.

use serde::{Deserialize, Serialize};

use super::link::{LinkEntry, LinkId};

/// Returned when an entry would duplicate an id already in the collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate link id: {0}")]
pub struct DuplicateLinkId(pub LinkId);

/// The links of a profile, in display order.
///
/// Insertion order is display order and share order. Ids are unique;
/// deserializing a list with repeated ids fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LinkEntry>", into = "Vec<LinkEntry>")]
pub struct LinkCollection {
    entries: Vec<LinkEntry>,
}

impl LinkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateLinkId`] if the id is already present; the collection
    /// is left unchanged.
    pub fn push(&mut self, entry: LinkEntry) -> Result<(), DuplicateLinkId> {
        if self.contains(&entry.id) {
            return Err(DuplicateLinkId(entry.id));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn contains(&self, id: &LinkId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    pub fn get(&self, id: &LinkId) -> Option<&LinkEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn get_mut(&mut self, id: &LinkId) -> Option<&mut LinkEntry> {
        self.entries.iter_mut().find(|e| &e.id == id)
    }

    /// Removes and returns the entry with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &LinkId) -> Option<LinkEntry> {
        let index = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinkEntry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &LinkId> {
        self.entries.iter().map(|e| &e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<LinkEntry>> for LinkCollection {
    type Error = DuplicateLinkId;

    fn try_from(entries: Vec<LinkEntry>) -> Result<Self, Self::Error> {
        let mut collection = LinkCollection::new();
        for entry in entries {
            collection.push(entry)?;
        }
        Ok(collection)
    }
}

impl From<LinkCollection> for Vec<LinkEntry> {
    fn from(collection: LinkCollection) -> Self {
        collection.entries
    }
}

impl<'a> IntoIterator for &'a LinkCollection {
    type Item = &'a LinkEntry;
    type IntoIter = std::slice::Iter<'a, LinkEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
