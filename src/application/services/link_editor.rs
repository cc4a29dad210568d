//! Link collection editor: add/remove/update entries, validate and save.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::entities::{LinkCollection, LinkEntry, LinkField, LinkId};
use crate::domain::repositories::{LinkLoader, LinkPersister};
use crate::domain::validation::{ValidationReport, validate_collection};
use crate::error::{AppError, Notice};
use crate::utils::id_generator::generate_unique_link_id;

/// Tunables for a [`LinkEditor`].
#[derive(Debug, Clone, Copy)]
pub struct EditorOptions {
    /// How long the "saved" status stays visible after a successful save.
    pub saved_banner: TimeDelta,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            saved_banner: TimeDelta::seconds(3),
        }
    }
}

impl From<&Config> for EditorOptions {
    fn from(config: &Config) -> Self {
        Self {
            saved_banner: TimeDelta::seconds(config.saved_banner_seconds as i64),
        }
    }
}

/// What the list area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// No links yet: show the "Let's get you started" placeholder.
    Empty,
    List,
}

/// Save status reported to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorStatus {
    Idle,
    Saving,
    /// Shown until `until`, then reported as `Idle`.
    Saved { until: DateTime<Utc> },
    /// Dismissible notice after a failed persist.
    Failed(Notice),
}

#[derive(Debug, Clone, PartialEq)]
enum SettledStatus {
    Idle,
    Saved { until: DateTime<Utc> },
    Failed(Notice),
}

/// Identifies one save attempt and the collection revision it validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket {
    attempt: u64,
    revision: u64,
}

/// A validated snapshot waiting to be handed to the persister.
///
/// Owns its own persister handle, so the editor stays free for edits while
/// [`PendingSave::run`] is awaited.
pub struct PendingSave<P: LinkPersister> {
    ticket: SaveTicket,
    snapshot: LinkCollection,
    persister: Arc<P>,
}

impl<P: LinkPersister> PendingSave<P> {
    pub fn ticket(&self) -> SaveTicket {
        self.ticket
    }

    pub fn snapshot(&self) -> &LinkCollection {
        &self.snapshot
    }

    /// Calls the persister with the snapshot.
    pub async fn run(self) -> SaveCompletion {
        let result = self.persister.persist(&self.snapshot).await;
        SaveCompletion {
            ticket: self.ticket,
            result,
        }
    }
}

/// Result of a persist call, to be applied with [`LinkEditor::complete_save`].
#[derive(Debug)]
pub struct SaveCompletion {
    pub ticket: SaveTicket,
    pub result: Result<(), AppError>,
}

/// Outcome of [`LinkEditor::begin_save`].
pub enum BeginSave<P: LinkPersister> {
    Started(PendingSave<P>),
    Invalid(ValidationReport),
    /// Another save is in flight; this request was ignored.
    AlreadySaving,
}

/// Outcome of a save attempt.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved,
    /// Some entries failed validation; nothing was persisted.
    Invalid(ValidationReport),
    AlreadySaving,
    /// The persister rejected the collection. Retry by saving again.
    Failed(AppError),
    /// The collection changed while the save was in flight; result discarded.
    Stale,
    /// The completion did not belong to the in-flight save.
    Ignored,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }
}

/// Owns a profile's ordered link collection and its save workflow.
///
/// All mutation goes through `&mut self`; a save in flight never blocks edits.
/// Every mutation bumps a revision counter, and a save result is only applied
/// if the revision it validated is still current.
pub struct LinkEditor<P: LinkPersister> {
    collection: LinkCollection,
    persister: Arc<P>,
    options: EditorOptions,
    issued: HashSet<LinkId>,
    revision: u64,
    next_attempt: u64,
    in_flight: Option<SaveTicket>,
    status: SettledStatus,
}

impl<P: LinkPersister> LinkEditor<P> {
    /// Creates an editor from already-loaded entries.
    ///
    /// Entries with an empty or repeated id are given a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a replacement id cannot be generated.
    pub fn new(
        entries: impl IntoIterator<Item = LinkEntry>,
        persister: Arc<P>,
        options: EditorOptions,
    ) -> Result<Self, AppError> {
        let mut editor = Self {
            collection: LinkCollection::new(),
            persister,
            options,
            issued: HashSet::new(),
            revision: 0,
            next_attempt: 0,
            in_flight: None,
            status: SettledStatus::Idle,
        };

        for mut entry in entries {
            if entry.id.as_str().is_empty() || editor.issued.contains(&entry.id) {
                let fresh = editor.fresh_id()?;
                warn!(old_id = %entry.id, new_id = %fresh, "Re-keyed loaded link with duplicate id");
                entry.id = fresh;
            }
            editor.issued.insert(entry.id.clone());
            if let Err(e) = editor.collection.push(entry) {
                return Err(AppError::internal(
                    "Duplicate link id after re-keying",
                    serde_json::json!({ "id": e.0.to_string() }),
                ));
            }
        }

        Ok(editor)
    }

    /// Loads the saved links through `loader` and creates an editor.
    ///
    /// A loader failure is logged and yields an empty editor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a replacement id cannot be generated.
    pub async fn load<L: LinkLoader + ?Sized>(
        loader: &L,
        persister: Arc<P>,
        options: EditorOptions,
    ) -> Result<Self, AppError> {
        let collection = match loader.load().await {
            Ok(collection) => collection,
            Err(e) => {
                warn!(error = %e, "Failed to load links, starting empty");
                LinkCollection::new()
            }
        };

        let editor = Self::new(Vec::from(collection), persister, options)?;
        debug!(links = editor.len(), "Link editor loaded");
        Ok(editor)
    }

    /// Appends a blank entry and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no unused id can be generated.
    pub fn add_entry(&mut self) -> Result<LinkId, AppError> {
        let was_empty = self.collection.is_empty();
        let id = self.fresh_id()?;

        self.issued.insert(id.clone());
        self.collection
            .push(LinkEntry::blank(id.clone()))
            .map_err(|e| {
                AppError::internal(
                    "Generated link id already in use",
                    serde_json::json!({ "id": e.0.to_string() }),
                )
            })?;
        self.touch();
        self.clear_saved_banner();

        if was_empty {
            debug!("Link list no longer empty");
        }
        debug!(%id, links = self.len(), "Added link");
        Ok(id)
    }

    /// Removes the entry with `id`.
    ///
    /// Unknown ids are a silent no-op and return `false`.
    pub fn remove_entry(&mut self, id: &LinkId) -> bool {
        if self.collection.remove(id).is_none() {
            debug!(%id, "Remove ignored: no such link");
            return false;
        }

        self.touch();
        self.clear_saved_banner();

        if self.collection.is_empty() {
            debug!("Link list is empty");
        }
        debug!(%id, links = self.len(), "Removed link");
        true
    }

    /// Sets one field of the entry with `id`. Nothing is validated here.
    ///
    /// Unknown ids are a silent no-op and return `false`.
    pub fn update_entry(&mut self, id: &LinkId, field: LinkField, value: impl Into<String>) -> bool {
        let Some(entry) = self.collection.get_mut(id) else {
            debug!(%id, %field, "Update ignored: no such link");
            return false;
        };

        entry.set(field, value.into());
        self.touch();
        true
    }

    /// Validates the collection and, if it is valid, snapshots it for saving.
    ///
    /// While another save is in flight this returns [`BeginSave::AlreadySaving`]
    /// and changes nothing.
    pub fn begin_save(&mut self) -> BeginSave<P> {
        if self.in_flight.is_some() {
            debug!("Save ignored: another save is in flight");
            return BeginSave::AlreadySaving;
        }

        let report = validate_collection(&self.collection);
        if !report.is_valid() {
            debug!(invalid = report.len(), "Save blocked by validation errors");
            return BeginSave::Invalid(report);
        }

        self.next_attempt += 1;
        let ticket = SaveTicket {
            attempt: self.next_attempt,
            revision: self.revision,
        };
        self.in_flight = Some(ticket);
        self.status = SettledStatus::Idle;

        BeginSave::Started(PendingSave {
            ticket,
            snapshot: self.collection.clone(),
            persister: Arc::clone(&self.persister),
        })
    }

    /// Applies the result of a persist call.
    ///
    /// A result is discarded as [`SaveOutcome::Stale`] if the collection was
    /// mutated after the save was started, so newer unvalidated edits are
    /// never reported as saved.
    pub fn complete_save(&mut self, completion: SaveCompletion) -> SaveOutcome {
        if self.in_flight != Some(completion.ticket) {
            debug!(attempt = completion.ticket.attempt, "Ignored completion for unknown save");
            return SaveOutcome::Ignored;
        }
        self.in_flight = None;

        if completion.ticket.revision != self.revision {
            warn!(
                saved_revision = completion.ticket.revision,
                current_revision = self.revision,
                "Discarding stale save result"
            );
            self.status = SettledStatus::Idle;
            return SaveOutcome::Stale;
        }

        match completion.result {
            Ok(()) => {
                let until = Utc::now() + self.options.saved_banner;
                self.status = SettledStatus::Saved { until };
                info!(links = self.len(), "Links saved");
                SaveOutcome::Saved
            }
            Err(e) => {
                warn!(error = %e, "Failed to save links");
                self.status = SettledStatus::Failed(e.to_notice());
                SaveOutcome::Failed(e)
            }
        }
    }

    /// Releases an in-flight save whose [`PendingSave`] was dropped without
    /// completing. Returns `false` if `ticket` is not the in-flight save.
    pub fn abandon_save(&mut self, ticket: SaveTicket) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }

        self.in_flight = None;
        warn!(attempt = ticket.attempt, "Save abandoned before completion");
        true
    }

    /// Validates and persists the collection in one step.
    ///
    /// Dropping the returned future before it resolves abandons the save, so
    /// a later call can start a new one.
    pub async fn save(&mut self) -> SaveOutcome {
        match self.begin_save() {
            BeginSave::Started(pending) => {
                let guard = InFlightGuard {
                    ticket: pending.ticket(),
                    editor: self,
                    completed: false,
                };
                let completion = pending.run().await;
                guard.complete(completion)
            }
            BeginSave::Invalid(report) => SaveOutcome::Invalid(report),
            BeginSave::AlreadySaving => SaveOutcome::AlreadySaving,
        }
    }

    pub fn status(&self) -> EditorStatus {
        self.status_at(Utc::now())
    }

    /// Status as it should be displayed at `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> EditorStatus {
        if self.in_flight.is_some() {
            return EditorStatus::Saving;
        }

        match &self.status {
            SettledStatus::Idle => EditorStatus::Idle,
            SettledStatus::Saved { until } if now < *until => EditorStatus::Saved { until: *until },
            SettledStatus::Saved { .. } => EditorStatus::Idle,
            SettledStatus::Failed(notice) => EditorStatus::Failed(notice.clone()),
        }
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Clears a failure notice.
    pub fn dismiss_notice(&mut self) {
        if matches!(self.status, SettledStatus::Failed(_)) {
            self.status = SettledStatus::Idle;
        }
    }

    pub fn display_state(&self) -> DisplayState {
        if self.collection.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::List
        }
    }

    pub fn collection(&self) -> &LinkCollection {
        &self.collection
    }

    pub fn entries(&self) -> &[LinkEntry] {
        self.collection.entries()
    }

    pub fn entry(&self, id: &LinkId) -> Option<&LinkEntry> {
        self.collection.get(id)
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Current revision; bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn fresh_id(&self) -> Result<LinkId, AppError> {
        generate_unique_link_id(|id| self.issued.contains(id))
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn clear_saved_banner(&mut self) {
        if matches!(self.status, SettledStatus::Saved { .. }) {
            self.status = SettledStatus::Idle;
        }
    }
}

/// Abandons the in-flight save when `save()` is cancelled mid-persist.
struct InFlightGuard<'a, P: LinkPersister> {
    editor: &'a mut LinkEditor<P>,
    ticket: SaveTicket,
    completed: bool,
}

impl<P: LinkPersister> InFlightGuard<'_, P> {
    fn complete(mut self, completion: SaveCompletion) -> SaveOutcome {
        self.completed = true;
        self.editor.complete_save(completion)
    }
}

impl<P: LinkPersister> Drop for InFlightGuard<'_, P> {
    fn drop(&mut self) {
        if !self.completed {
            self.editor.abandon_save(self.ticket);
        }
    }
}
