#![allow(dead_code)]

use async_trait::async_trait;
use devlinks::application::services::{EditorOptions, LinkEditor};
use devlinks::domain::entities::{LinkCollection, LinkField, LinkId};
use devlinks::domain::repositories::LinkPersister;
use devlinks::error::AppError;
use devlinks::infrastructure::persistence::InMemoryProfileStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, Notify};

pub fn empty_editor() -> (LinkEditor<InMemoryProfileStore>, Arc<InMemoryProfileStore>) {
    let store = Arc::new(InMemoryProfileStore::new());
    let editor = LinkEditor::new(Vec::new(), store.clone(), EditorOptions::default()).unwrap();
    (editor, store)
}

pub fn add_link<P: LinkPersister>(editor: &mut LinkEditor<P>, platform: &str, url: &str) -> LinkId {
    let id = editor.add_entry().unwrap();
    editor.update_entry(&id, LinkField::Platform, platform);
    editor.update_entry(&id, LinkField::Url, url);
    id
}

/// Persister that holds every call until [`GatedPersister::release`] is called.
#[derive(Default)]
pub struct GatedPersister {
    gate: Notify,
    pub calls: AtomicUsize,
    pub stored: Mutex<Option<LinkCollection>>,
}

impl GatedPersister {
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkPersister for GatedPersister {
    async fn persist(&self, links: &LinkCollection) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        *self.stored.lock().await = Some(links.clone());
        Ok(())
    }
}
