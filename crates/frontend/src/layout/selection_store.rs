//! Session-scoped selection context (company, payroll run, period).
//!
//! [`ContextStore`] owns the value and its persisted copy. [`SelectionService`]
//! is the reactive handle provided at the application root; screens only read
//! it, the context selector is the only writer.

use contracts::shared::{Selection, SelectionContext};
use leptos::prelude::*;

use crate::shared::config::config;
use crate::shared::storage::{BrowserStorage, KeyValueStorage};

pub struct ContextStore<S> {
    storage: S,
    key: String,
    current: SelectionContext,
    revision: u64,
}

impl<S: KeyValueStorage> ContextStore<S> {
    /// Restore from storage; anything unreadable starts empty.
    pub fn restore(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = storage
            .get(&key)
            .map(|raw| SelectionContext::from_json(&raw))
            .unwrap_or_default();
        if let Some(s) = current.selection() {
            log::info!(
                "Restored selection: {} / {} / {}",
                s.company.name,
                s.payroll_run.name,
                s.period.label
            );
        }
        Self {
            storage,
            key,
            current,
            revision: 0,
        }
    }

    pub fn read(&self) -> &SelectionContext {
        &self.current
    }

    /// Number of commits/clears since start.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole triple. Persisting is best effort.
    pub fn commit(&mut self, selection: Selection) {
        log::info!(
            "Selection committed: empresa={} nomina={} periodo={}",
            selection.company.id,
            selection.payroll_run.id,
            selection.period.label
        );
        self.current = SelectionContext::from(selection);
        self.revision += 1;
        if let Some(json) = self.current.to_json() {
            if let Err(e) = self.storage.set(&self.key, &json) {
                log::warn!("Selection not persisted: {}", e);
            }
        }
    }

    pub fn clear(&mut self) {
        log::info!("Selection cleared");
        self.current = SelectionContext::empty();
        self.revision += 1;
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("Persisted selection not removed: {}", e);
        }
    }
}

/// Reactive handle over the browser-backed [`ContextStore`].
#[derive(Clone, Copy)]
pub struct SelectionService {
    store: StoredValue<ContextStore<BrowserStorage>>,
    context: RwSignal<SelectionContext>,
}

impl SelectionService {
    pub fn new() -> Self {
        let store = ContextStore::restore(BrowserStorage, config().selection_storage_key.clone());
        let context = RwSignal::new(store.read().clone());
        Self {
            store: StoredValue::new(store),
            context,
        }
    }

    /// Tracked read of the current context.
    pub fn read(&self) -> SelectionContext {
        self.context.get()
    }

    pub fn read_untracked(&self) -> SelectionContext {
        self.context.get_untracked()
    }

    pub fn signal(&self) -> Signal<SelectionContext> {
        self.context.into()
    }

    pub fn commit(&self, selection: Selection) {
        self.store.update_value(|s| s.commit(selection));
        self.publish();
    }

    pub fn clear(&self) {
        self.store.update_value(|s| s.clear());
        self.publish();
    }

    fn publish(&self) {
        let current = self.store.with_value(|s| s.read().clone());
        self.context.set(current);
    }
}

pub fn use_selection() -> SelectionService {
    use_context::<SelectionService>().expect("SelectionService not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use contracts::shared::{CompanyRef, PayrollRunRef, PeriodRef};

    const KEY: &str = "appContext";

    fn acme() -> Selection {
        Selection {
            company: CompanyRef {
                id: 10,
                name: "ACME".into(),
            },
            payroll_run: PayrollRunRef {
                id: 5,
                name: "Main".into(),
            },
            period: PeriodRef::new(100, 2024, 3, 1),
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = ContextStore::restore(MemoryStorage::default(), KEY);
        assert!(store.read().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_commit_persists_and_restores() {
        let storage = MemoryStorage::default();
        let mut store = ContextStore::restore(storage.clone(), KEY);
        store.commit(acme());
        assert_eq!(store.read().selection(), Some(&acme()));
        assert_eq!(store.revision(), 1);

        let reloaded = ContextStore::restore(storage, KEY);
        assert_eq!(reloaded.read().selection(), Some(&acme()));
    }

    #[test]
    fn test_commit_replaces_whole_triple() {
        let mut store = ContextStore::restore(MemoryStorage::default(), KEY);
        store.commit(acme());
        let mut other = acme();
        other.company = CompanyRef {
            id: 11,
            name: "Beta".into(),
        };
        other.period = PeriodRef::new(200, 2024, 4, 1);
        store.commit(other.clone());
        assert_eq!(store.read().selection(), Some(&other));
    }

    #[test]
    fn test_persistence_failure_does_not_block_commit() {
        let mut store = ContextStore::restore(MemoryStorage::failing(), KEY);
        store.commit(acme());
        assert_eq!(store.read().company_id(), Some(10));
        store.clear();
        assert!(store.read().is_empty());
    }

    #[test]
    fn test_clear_removes_persisted_copy() {
        let storage = MemoryStorage::default();
        let mut store = ContextStore::restore(storage.clone(), KEY);
        store.commit(acme());
        store.clear();
        assert!(store.read().is_empty());
        assert_eq!(storage.get(KEY), None);
        assert!(ContextStore::restore(storage, KEY).read().is_empty());
    }

    #[test]
    fn test_corrupt_storage_restores_empty() {
        let storage = MemoryStorage::with_entry(KEY, "{\"empresaId\": ");
        assert!(ContextStore::restore(storage, KEY).read().is_empty());
    }
}
