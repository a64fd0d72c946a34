use std::collections::{HashMap, HashSet};

use super::links::RawLink;
use crate::note::{NoteId, NOTE_EXTENSION};

/// Resolves raw links against the notes that currently exist in a vault
#[derive(Debug, Default)]
pub struct LinkResolver {
    notes: HashSet<NoteId>,
    /// Notes grouped by file name, shallowest path first
    by_name: HashMap<String, Vec<NoteId>>,
}

impl LinkResolver {
    pub fn new<'a, I>(notes: I) -> Self
    where
        I: IntoIterator<Item = &'a NoteId>,
    {
        let mut resolver = LinkResolver::default();
        for id in notes {
            resolver.notes.insert(id.clone());
            resolver
                .by_name
                .entry(id.file_name().to_string())
                .or_default()
                .push(id.clone());
        }
        for candidates in resolver.by_name.values_mut() {
            candidates.sort_by(|a, b| a.depth().cmp(&b.depth()).then_with(|| a.cmp(b)));
        }
        resolver
    }

    /// Resolve a link written in `source`, or `None` if no note matches
    pub fn resolve(&self, source: &NoteId, link: &RawLink) -> Option<NoteId> {
        match link {
            RawLink::Wiki(target) => self.resolve_wiki(source, target),
            RawLink::Markdown(target) => self.resolve_markdown(source, target),
        }
    }

    /// Wiki targets: `./` and `../` targets are relative to the source
    /// folder only. Others try the vault path, then the source folder, then
    /// the shallowest note whose path ends with the target.
    fn resolve_wiki(&self, source: &NoteId, target: &str) -> Option<NoteId> {
        let target = with_extension(target.trim_start_matches('/'));
        let relative = normalize(&join(source.folder(), &target));

        if target.starts_with("./") || target.starts_with("../") {
            return relative.and_then(|p| self.existing(&p));
        }
        if let Some(id) = normalize(&target).and_then(|p| self.existing(&p)) {
            return Some(id);
        }
        if let Some(id) = relative.and_then(|p| self.existing(&p)) {
            return Some(id);
        }

        let file_name = target.rsplit('/').next().unwrap_or(&target);
        let suffix = format!("/{}", target);
        self.by_name.get(file_name)?.iter().find_map(|candidate| {
            let path = candidate.as_str();
            (path == target || path.ends_with(&suffix)).then(|| candidate.clone())
        })
    }

    /// Markdown targets are paths: relative to the source folder, or to the
    /// vault root when they start with `/`.
    fn resolve_markdown(&self, source: &NoteId, target: &str) -> Option<NoteId> {
        let path = match target.strip_prefix('/') {
            Some(rooted) => rooted.to_string(),
            None => join(source.folder(), target),
        };
        let path = normalize(&path)?;

        self.existing(&path)
            .or_else(|| self.existing(&with_extension(&path)))
    }

    fn existing(&self, path: &str) -> Option<NoteId> {
        self.notes.get(path).cloned()
    }
}

fn with_extension(target: &str) -> String {
    let suffix = format!(".{}", NOTE_EXTENSION);
    if target.ends_with(&suffix) {
        target.to_string()
    } else {
        format!("{}{}", target, suffix)
    }
}

fn join(folder: &str, target: &str) -> String {
    if folder.is_empty() {
        target.to_string()
    } else {
        format!("{}/{}", folder, target)
    }
}

/// Collapse `.` and `..` segments; `None` when the path climbs out of the vault
fn normalize(path: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    (!segments.is_empty()).then(|| segments.join("/"))
}
