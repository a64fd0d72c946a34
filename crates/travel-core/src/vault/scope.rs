use crate::config::ALL_FOLDERS;
use crate::note::NoteId;

/// Which notes a vault snapshot may link to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scope {
    /// Every note in the vault
    #[default]
    All,
    /// Only notes inside one of these vault-relative folders
    Folders(Vec<String>),
}

impl Scope {
    /// Parse a `;`-separated folder list. `*` or an empty list means all notes.
    pub fn parse(value: &str) -> Self {
        let folders: Vec<String> = value
            .split(';')
            .map(|folder| folder.trim().trim_matches('/'))
            .filter(|folder| !folder.is_empty())
            .map(str::to_string)
            .collect();

        if folders.is_empty() || folders.iter().any(|folder| folder == ALL_FOLDERS) {
            Scope::All
        } else {
            Scope::Folders(folders)
        }
    }

    pub fn contains(&self, id: &NoteId) -> bool {
        match self {
            Scope::All => true,
            Scope::Folders(folders) => folders.iter().any(|folder| {
                id.as_str()
                    .strip_prefix(folder.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
            }),
        }
    }
}
