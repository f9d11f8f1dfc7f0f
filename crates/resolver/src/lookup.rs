//! Resource lookup contexts
//!
//! A lookup context maps a relative resource name to a [`Location`]. It is the
//! only way `classpath:` paths (and bare paths that miss the filesystem) find
//! bundled data, and it is kept separate from filesystem and network access so
//! tests can swap in a context with controlled contents.

use crate::location::Location;
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Maps resource names to locations.
pub trait ResourceLookup: Send + Sync + Debug {
    /// Find `name`, or return `None` if this context has no such resource.
    fn locate(&self, name: &str) -> Option<Location>;
}

impl<T: ResourceLookup + ?Sized> ResourceLookup for Arc<T> {
    fn locate(&self, name: &str) -> Option<Location> {
        (**self).locate(name)
    }
}

impl<T: ResourceLookup + ?Sized> ResourceLookup for Box<T> {
    fn locate(&self, name: &str) -> Option<Location> {
        (**self).locate(name)
    }
}

/// In-memory resources, typically filled from `include_bytes!`.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    entries: HashMap<String, Arc<[u8]>>,
}

impl EmbeddedResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, data: impl AsRef<[u8]>) -> Self {
        self.insert(name, data);
        self
    }

    /// Register `data` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, data: impl AsRef<[u8]>) {
        self.entries.insert(name.into(), Arc::from(data.as_ref()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceLookup for EmbeddedResources {
    fn locate(&self, name: &str) -> Option<Location> {
        self.entries
            .get_key_value(name)
            .map(|(name, data)| Location::Embedded {
                name: name.clone(),
                data: data.clone(),
            })
    }
}

/// Resources stored as files under one or more root directories.
///
/// Roots are searched in order; the first root containing `name` as a regular
/// file wins.
#[derive(Debug, Clone, Default)]
pub struct ResourceDirs {
    roots: Vec<PathBuf>,
}

impl ResourceDirs {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl ResourceLookup for ResourceDirs {
    fn locate(&self, name: &str) -> Option<Location> {
        let relative = Path::new(name);
        // Names must stay inside their root
        let contained = !name.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if !contained {
            return None;
        }

        self.roots
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
            .map(Location::File)
    }
}

/// A context with no resources at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceLookup for NoResources {
    fn locate(&self, _name: &str) -> Option<Location> {
        None
    }
}
