//! Markdown vault as a graph source
//!
//! A vault is a directory tree of `.md` notes. Every note is identified by
//! its vault-relative path; hidden files and folders (including the
//! `.travel/` settings folder) are never part of the vault.

pub mod links;
pub mod resolve;
pub mod scope;

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::bail_usage;
use crate::error::{Result, TravelError};
use crate::graph::{GraphSource, LinkGraph};
use crate::note::{NoteId, NOTE_EXTENSION};
use crate::trace_time;

pub use links::{extract_links, RawLink};
pub use resolve::LinkResolver;
pub use scope::Scope;

type NoteFilter = Box<dyn Fn(&NoteId) -> bool>;

/// A directory of markdown notes
pub struct Vault {
    root: PathBuf,
    filter: Option<NoteFilter>,
}

impl fmt::Debug for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vault")
            .field("root", &self.root)
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

impl Vault {
    /// Open an existing vault directory
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(TravelError::VaultNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(Vault {
            root: root.to_path_buf(),
            filter: None,
        })
    }

    /// Restrict link targets to notes inside `scope`
    pub fn with_scope(self, scope: Scope) -> Self {
        match scope {
            Scope::All => Vault {
                filter: None,
                ..self
            },
            scope => self.with_filter(move |id| scope.contains(id)),
        }
    }

    /// Restrict link targets to notes accepted by `filter`
    pub fn with_filter<F>(self, filter: F) -> Self
    where
        F: Fn(&NoteId) -> bool + 'static,
    {
        Vault {
            filter: Some(Box::new(filter)),
            ..self
        }
    }

    /// File system path of a note
    pub fn note_path(&self, id: &NoteId) -> PathBuf {
        id.as_str()
            .split('/')
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    /// True when `id` names one of the vault's notes: a visible `.md` file
    pub fn contains(&self, id: &NoteId) -> bool {
        is_note_id(id.as_str()) && self.note_path(id).is_file()
    }

    /// Every note in the vault, sorted by id
    pub fn note_ids(&self) -> Result<Vec<NoteId>> {
        let mut ids = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable vault entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !has_note_extension(entry.path()) {
                continue;
            }
            if let Some(id) = self.id_for_path(entry.path()) {
                ids.push(id);
            }
        }

        ids.sort();
        Ok(ids)
    }

    /// Turn a user-supplied note reference into a note id.
    ///
    /// Accepts a note id (`topics/Rust.md`), an id without extension
    /// (`topics/Rust`), or a file path to a note inside the vault.
    pub fn resolve_note(&self, reference: &str) -> Result<NoteId> {
        let reference = reference.trim();
        if reference.is_empty() {
            bail_usage!("note reference cannot be empty");
        }

        let as_id = reference.replace('\\', "/");
        let as_id = as_id.trim_start_matches("./");
        let mut candidates = vec![NoteId::from(as_id)];
        if !has_note_extension(Path::new(as_id)) {
            candidates.push(NoteId::from(format!("{}.{}", as_id, NOTE_EXTENSION)));
        }
        if let Some(id) = candidates.into_iter().find(|id| self.contains(id)) {
            return Ok(id);
        }

        let path = Path::new(reference);
        if path.is_file() {
            if let Some(id) = path
                .canonicalize()
                .ok()
                .and_then(|absolute| self.id_for_path(&absolute))
                .filter(|id| self.contains(id))
            {
                return Ok(id);
            }
        }

        Err(TravelError::note_not_found(reference))
    }

    /// Read every note and resolve its links into a fresh snapshot
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build_graph(&self) -> Result<LinkGraph> {
        let started = Instant::now();
        let ids = self.note_ids()?;
        let resolver = LinkResolver::new(&ids);
        let mut graph = LinkGraph::new();

        for id in &ids {
            let content = match fs::read(self.note_path(id)) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    warn!(note = %id, error = %e, "Failed to read note");
                    continue;
                }
            };

            let mut seen = HashSet::new();
            let targets: Vec<NoteId> = extract_links(&content)
                .iter()
                .filter_map(|link| resolver.resolve(id, link))
                .filter(|target| seen.insert(target.clone()))
                .collect();
            graph.set_links(id.clone(), targets);
        }

        if let Some(filter) = &self.filter {
            graph.retain_targets(|target| filter(target));
        }

        trace_time!(started, "scan_vault", notes = ids.len());
        debug!(
            notes = graph.len(),
            edges = graph.edge_count(),
            "snapshot"
        );
        Ok(graph)
    }

    /// Vault-relative, `/`-separated id of a path under the root
    fn id_for_path(&self, path: &Path) -> Option<NoteId> {
        let relative = match path.strip_prefix(&self.root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => {
                let root = self.root.canonicalize().ok()?;
                let absolute = path.canonicalize().ok()?;
                absolute.strip_prefix(&root).ok()?.to_path_buf()
            }
        };

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => segments.push(segment.to_str()?.to_string()),
                _ => return None,
            }
        }
        (!segments.is_empty()).then(|| NoteId::from(segments.join("/")))
    }
}

impl GraphSource for Vault {
    fn snapshot(&self) -> Result<LinkGraph> {
        self.build_graph()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Relative `.md` path made of visible, non-`..` segments only
fn is_note_id(id: &str) -> bool {
    has_note_extension(Path::new(id))
        && !id
            .split('/')
            .any(|segment| segment.is_empty() || segment.starts_with('.'))
}

fn has_note_extension(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == NOTE_EXTENSION)
}
