use std::path::Path;

use wmilist::io::page_io::{self, InstantFieldKind, PageIoError};
use wmilist::state::data_model::RowView;
use wmilist::state::list_state::SortOrder;
use wmilist::state::relationship::ItemKind;

fn fixture() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/page.json"))
}

#[test]
fn test_load_page_fixture() {
    let file = page_io::load_page(fixture()).unwrap();
    assert_eq!(file.lists.len(), 2);
    assert_eq!(file.instant_fields.len(), 4);
    assert_eq!(
        file.instant_fields
            .iter()
            .map(|field| field.kind)
            .collect::<Vec<_>>(),
        vec![
            InstantFieldKind::Text,
            InstantFieldKind::Select,
            InstantFieldKind::Checkbox,
            InstantFieldKind::Click,
        ]
    );
}

#[test]
fn test_build_page_sorts_each_list() {
    let file = page_io::load_page(fixture()).unwrap();
    let page = page_io::build_page(&file).unwrap();

    let users = page.list("users").unwrap();
    let order: Vec<&str> = users.rows().iter().map(|row| row.id()).collect();
    assert_eq!(order, vec!["ann", "bob", "root"]);
    assert_eq!(users.sort_spec().map(|spec| spec.order), Some(SortOrder::Asc));
    assert_eq!(users.columns(), vec!["login", "gecos", "uidNumber", "locked"]);
    assert!(!users.is_sortable("locked"));
    assert!(users.options().resizable);
    assert!(users.row("root").unwrap().is_disabled());

    let groups = page.list("groups").unwrap();
    assert!(groups.options().auto_sortable);
    assert_eq!(groups.columns(), vec!["gidNumber", "name", "permissive"]);
}

#[test]
fn test_relationship_section_builds_a_board() {
    let file = page_io::load_page(fixture()).unwrap();
    let board = file.relationships.unwrap().into_board();
    assert_eq!(board.kind(), ItemKind::Group);
    assert_eq!(board.items().count(), 2);
    assert!(board.item("admins").is_some());
}

#[test]
fn test_empty_page() {
    let file = page_io::parse_page("{}").unwrap();
    assert!(file.lists.is_empty());
    assert!(file.relationships.is_none());
    assert_eq!(page_io::build_page(&file).unwrap().lists().count(), 0);
}

#[test]
fn test_duplicate_row_ids_are_rejected() {
    let file = page_io::parse_page(
        r#"{"lists":[{"name":"users","main_column":"login","identifier":"uidNumber",
            "rows":[{"id":"bob"},{"id":"bob"}]}]}"#,
    )
    .unwrap();

    let err = page_io::build_page(&file).unwrap_err();
    assert!(matches!(err, PageIoError::DuplicateRow { ref id, .. } if id == "bob"));
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let err = page_io::parse_page("[1, 2").unwrap_err();
    assert!(matches!(err, PageIoError::Parse(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = page_io::load_page(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, PageIoError::Io { .. }));
}
