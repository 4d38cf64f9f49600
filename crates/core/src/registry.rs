use cindex_api::{CursorKindSource, Enumeration, KindError, KindResult};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

use crate::config::KindEntry;

/// Code-to-value arena for one libclang enumeration.
///
/// Every registered value lives for the rest of the process and is handed
/// out as a `&'static` reference, so repeated lookups of a code return the
/// same object. Entries are never removed.
///
/// Reads go straight to the map. Registrations are serialized through
/// `writes` so a batch is checked and inserted without interleaving.
#[derive(Debug)]
pub struct KindRegistry<E: Enumeration> {
    entries: DashMap<i32, &'static E>,
    writes: Mutex<()>,
}

impl<E: Enumeration> Default for KindRegistry<E> {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl<E: Enumeration> KindRegistry<E> {
    pub fn empty() -> Self {
        Self {
            entries: DashMap::new(),
            writes: Mutex::new(()),
        }
    }

    /// A registry holding the fixed table of the native library.
    pub fn with_builtins() -> Self {
        let registry = Self::empty();
        for kind in E::builtins() {
            registry.entries.insert(kind.code(), kind);
        }
        debug!(
            enumeration = E::ENUMERATION,
            count = registry.entries.len(),
            "Initialized registry"
        );
        registry
    }

    /// Register a new value for an unused code, classified by where the
    /// native library places the code.
    pub fn register(&self, code: i32, name: impl Into<String>) -> KindResult<&'static E> {
        self.register_with(code, name, E::default_class(code))
    }

    /// Register a new value for an unused code with an explicit class.
    pub fn register_with(
        &self,
        code: i32,
        name: impl Into<String>,
        class: E::Class,
    ) -> KindResult<&'static E> {
        let _writes = self.lock_writes();
        self.insert(code, name.into(), class)
    }

    /// Register a batch of values, all or nothing.
    pub fn register_entries(
        &self,
        entries: &[KindEntry<E::Class>],
    ) -> KindResult<Vec<&'static E>> {
        let _writes = self.lock_writes();
        self.check_entries(entries)?;
        self.insert_entries(entries)
    }

    /// Check a batch against itself and the registry without inserting.
    pub fn check_entries(&self, entries: &[KindEntry<E::Class>]) -> KindResult<()> {
        let mut seen = HashSet::new();
        for entry in entries {
            if !seen.insert(entry.code) {
                return Err(KindError::DuplicateRegistration {
                    enumeration: E::ENUMERATION,
                    code: entry.code,
                    existing: entry.name.clone(),
                });
            }
            if let Some(existing) = self.entries.get(&entry.code) {
                return Err(KindError::DuplicateRegistration {
                    enumeration: E::ENUMERATION,
                    code: entry.code,
                    existing: existing.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Hold off every other registration until the guard drops.
    pub(crate) fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, a poisoned lock has nothing to repair.
        self.writes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Insert a batch already validated by `check_entries`. Callers hold
    /// `lock_writes`.
    pub(crate) fn insert_entries(
        &self,
        entries: &[KindEntry<E::Class>],
    ) -> KindResult<Vec<&'static E>> {
        entries
            .iter()
            .map(|entry| {
                let class = entry.group.unwrap_or_else(|| E::default_class(entry.code));
                self.insert(entry.code, entry.name.clone(), class)
            })
            .collect()
    }

    fn insert(&self, code: i32, name: String, class: E::Class) -> KindResult<&'static E> {
        match self.entries.entry(code) {
            Entry::Occupied(existing) => {
                let existing = existing.get().name();
                warn!(
                    enumeration = E::ENUMERATION,
                    code, existing, "Rejected duplicate registration"
                );
                Err(KindError::DuplicateRegistration {
                    enumeration: E::ENUMERATION,
                    code,
                    existing: existing.to_string(),
                })
            }
            Entry::Vacant(slot) => {
                let name: &'static str = Box::leak(name.into_boxed_str());
                let kind: &'static E = Box::leak(Box::new(E::from_parts(code, name, class)));
                slot.insert(kind);
                debug!(enumeration = E::ENUMERATION, code, name, "Registered value");
                Ok(kind)
            }
        }
    }

    pub fn from_value(&self, code: i32) -> KindResult<&'static E> {
        self.entries
            .get(&code)
            .map(|kind| *kind)
            .ok_or(KindError::UnknownCode {
                enumeration: E::ENUMERATION,
                code,
            })
    }

    /// Look a value up by its symbolic name.
    pub fn from_name(&self, name: &str) -> KindResult<&'static E> {
        self.entries
            .iter()
            .map(|entry| *entry.value())
            .filter(|kind| kind.name() == name)
            .min_by_key(|kind| kind.code())
            .ok_or_else(|| KindError::UnknownName {
                enumeration: E::ENUMERATION,
                name: name.to_string(),
            })
    }

    /// Resolve the code reported by the native library for a node.
    pub fn kind_of(&self, source: &impl CursorKindSource) -> KindResult<&'static E> {
        self.from_value(source.kind_code())
    }

    /// Snapshot of every registered value, ordered by code.
    pub fn all_kinds(&self) -> Vec<&'static E> {
        let mut kinds: Vec<&'static E> = self.entries.iter().map(|entry| *entry.value()).collect();
        kinds.sort_by_key(|kind| kind.code());
        kinds
    }

    pub fn contains(&self, code: i32) -> bool {
        self.entries.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
