use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dialogue::DialogueTree;
use super::location::Location;
use super::null_as_default;
use crate::error::LibraryError;

/// The project data file (`data.json`).
///
/// Only the sections edited as graphs are typed; characters, items,
/// variables and the rest are kept as raw JSON and written back unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<Location>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dialogues: Vec<DialogueTree>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn load(json_str: &str) -> Result<Self, LibraryError> {
        let project: Project = serde_json::from_str(json_str)?;
        Ok(project)
    }

    pub fn save(&self, pretty: bool) -> Result<String, LibraryError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LibraryError> {
        let content = fs::read_to_string(path)?;
        let project = Self::load(&content)?;
        info!(
            "Loaded project {} ({} locations, {} dialogue trees)",
            path.display(),
            project.locations.len(),
            project.dialogues.len()
        );
        Ok(project)
    }

    pub fn save_to_file(&self, path: &Path, pretty: bool) -> Result<(), LibraryError> {
        if path.is_dir() {
            return Err(LibraryError::Project(format!(
                "{} is a directory",
                path.display()
            )));
        }
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.save(pretty)?)?;
        Ok(())
    }

    pub fn dialogue_index(&self, id: &str) -> Option<usize> {
        self.dialogues.iter().position(|d| d.id == id)
    }

    /// Appends an empty dialogue tree and returns its index.
    pub fn add_dialogue_tree(&mut self) -> usize {
        self.dialogues.push(DialogueTree::new());
        self.dialogues.len() - 1
    }
}
