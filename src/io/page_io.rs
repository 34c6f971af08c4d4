use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::state::data_model::ListRow;
use crate::state::list_state::{ListOptions, ListState};
use crate::state::page::PageState;
use crate::state::relationship::{ItemKind, RelationshipBoard};

#[derive(Debug, Error)]
pub enum PageIoError {
    #[error("read page file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("page parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("list '{list}' has duplicate row id '{id}'")]
    DuplicateRow { list: String, id: String },
}

/// Server-rendered page content: the lists, the instant fields and the
/// relationship editor of one console screen.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageFile {
    #[serde(default)]
    pub lists: Vec<ListFile>,
    #[serde(default)]
    pub instant_fields: Vec<InstantFieldFile>,
    #[serde(default)]
    pub relationships: Option<RelationshipFile>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ListFile {
    pub name: String,
    pub main_column: String,
    pub identifier: String,
    #[serde(default)]
    pub search_columns: Vec<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub unsortable: Vec<String>,
    #[serde(default)]
    pub resizable: bool,
    #[serde(default)]
    pub auto_sortable: bool,
    #[serde(default)]
    pub rows: Vec<RowFile>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RowFile {
    pub id: String,
    #[serde(default)]
    pub columns: BTreeMap<String, String>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstantFieldKind {
    Text,
    Checkbox,
    Select,
    /// Button requesting its URL at once.
    Click,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InstantFieldFile {
    pub label: String,
    pub kind: InstantFieldKind,
    /// Base path the serialized value is appended to.
    pub url: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RelationshipFile {
    pub kind: RelationshipKindFile,
    pub items: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKindFile {
    User,
    Group,
}

impl ListFile {
    pub fn into_state(self) -> Result<ListState, PageIoError> {
        let mut rows: Vec<ListRow> = Vec::with_capacity(self.rows.len());
        let mut seen = std::collections::BTreeSet::new();
        for row in self.rows {
            if !seen.insert(row.id.clone()) {
                return Err(PageIoError::DuplicateRow {
                    list: self.name,
                    id: row.id,
                });
            }
            let list_row = row
                .columns
                .into_iter()
                .fold(ListRow::new(row.id), |acc, (column, text)| {
                    acc.with_column(column, text)
                })
                .with_disabled(row.disabled);
            rows.push(list_row);
        }

        let unsortable: Vec<&str> = self.unsortable.iter().map(String::as_str).collect();
        Ok(ListState::init(
            self.name,
            self.main_column,
            self.search_columns,
            self.identifier,
            rows,
        )
        .with_columns(self.columns)
        .with_unsortable(&unsortable)
        .with_options(ListOptions {
            resizable: self.resizable,
            auto_sortable: self.auto_sortable,
        }))
    }
}

impl RelationshipFile {
    pub fn into_board(self) -> RelationshipBoard {
        let kind = match self.kind {
            RelationshipKindFile::User => ItemKind::User,
            RelationshipKindFile::Group => ItemKind::Group,
        };
        let ids: Vec<&str> = self.items.iter().map(String::as_str).collect();
        RelationshipBoard::new(kind, &ids)
    }
}

pub fn parse_page(content: &str) -> Result<PageFile, PageIoError> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_page(path: &Path) -> Result<PageFile, PageIoError> {
    let content = fs::read_to_string(path).map_err(|source| PageIoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_page(&content)
}

/// Builds the page state for every list of `file`.
pub fn build_page(file: &PageFile) -> Result<PageState, PageIoError> {
    let mut page = PageState::new();
    for list in &file.lists {
        page.insert_list(list.clone().into_state()?);
    }
    Ok(page)
}
