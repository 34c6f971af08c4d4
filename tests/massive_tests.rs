use wmilist::io::backend::{self, Backend, RecordingBackend};
use wmilist::state::data_model::ListRow;
use wmilist::state::i18n::Language;
use wmilist::state::list_state::ListState;
use wmilist::state::massive::{self, ConfirmOptions, MassiveAction, MassiveDialog};

fn users() -> ListState {
    ListState::init(
        "users",
        "login",
        vec!["login".to_string()],
        "uidNumber",
        vec![
            ListRow::new("bob")
                .with_column("login", "bob")
                .with_column("uidNumber", "1000"),
            ListRow::new("ann")
                .with_column("login", "ann marie")
                .with_column("uidNumber", "1001"),
            ListRow::new("carl")
                .with_column("login", "carl")
                .with_column("uidNumber", "1002"),
        ],
    )
}

fn groups() -> ListState {
    ListState::init(
        "groups",
        "name",
        vec!["name".to_string()],
        "gidNumber",
        vec![
            ListRow::new("staff")
                .with_column("name", "staff")
                .with_column("gidNumber", "10000"),
            ListRow::new("admins")
                .with_column("name", "admins")
                .with_column("gidNumber", "10001"),
        ],
    )
}

#[test]
fn test_nothing_checked_shows_info_dialog() {
    let list = users();
    let dialog = massive::prepare(&list, MassiveAction::Delete, Language::En);

    assert_eq!(
        dialog,
        MassiveDialog::Info {
            title: "Massive removal".to_string(),
            message: "Please select at least one account.".to_string(),
        }
    );
    assert!(!dialog.needs_confirmation());
    assert_eq!(
        massive::confirm(&list, MassiveAction::Delete, &ConfirmOptions::default()),
        None
    );
}

#[test]
fn test_delete_dialog_lists_checked_rows() {
    let mut list = users();
    list.set_row_checked("bob", true);
    list.set_row_checked("ann", true);

    let MassiveDialog::Confirm(dialog) = massive::prepare(&list, MassiveAction::Delete, Language::En)
    else {
        panic!("expected a confirmation dialog");
    };
    assert_eq!(dialog.items, vec!["ann marie", "bob"]);
    assert_eq!(dialog.list_name, "users");
    assert_eq!(
        dialog.no_archive_label.as_deref(),
        Some("Definitely remove account data (no archiving)")
    );
    assert_eq!(dialog.extra_html, None);
}

#[test]
fn test_delete_builds_a_single_request_path() {
    let mut list = users();
    list.massive_select(true);
    list.set_row_checked("carl", false);

    let archive = ConfirmOptions::default();
    assert_eq!(
        massive::confirm(&list, MassiveAction::Delete, &archive).as_deref(),
        Some("/users/massive/delete/1001%2C1000/")
    );

    let no_archive = ConfirmOptions {
        no_archive: true,
        skel: None,
    };
    assert_eq!(
        massive::confirm(&list, MassiveAction::Delete, &no_archive).as_deref(),
        Some("/users/massive/delete/1001%2C1000/True")
    );
}

#[test]
fn test_skel_encodes_the_chosen_skeleton() {
    let mut list = users();
    list.set_row_checked("carl", true);

    let options = ConfirmOptions {
        no_archive: false,
        skel: Some("/etc/skel dev".to_string()),
    };
    assert_eq!(
        massive::confirm(&list, MassiveAction::Skel, &options).as_deref(),
        Some("/users/massive/skel/1002/%2Fetc%2Fskel+dev")
    );

    let MassiveDialog::Confirm(dialog) = massive::prepare(&list, MassiveAction::Skel, Language::En)
    else {
        panic!("expected a confirmation dialog");
    };
    assert_eq!(dialog.items, vec!["carl"]);
    assert_eq!(dialog.no_archive_label, None);
}

#[test]
fn test_permissiveness_uses_group_columns() {
    let mut list = groups();
    list.massive_select(true);

    assert_eq!(
        massive::confirm(&list, MassiveAction::Permissiveness, &ConfirmOptions::default())
            .as_deref(),
        Some("/groups/massive/permissiveness/10001%2C10000")
    );
}

#[test]
fn test_confirm_rescans_checked_rows() {
    let mut list = users();
    list.set_row_checked("bob", true);
    let dialog = massive::prepare(&list, MassiveAction::Delete, Language::En);
    assert!(dialog.needs_confirmation());

    list.set_row_checked("bob", false);
    assert_eq!(
        massive::confirm(&list, MassiveAction::Delete, &ConfirmOptions::default()),
        None
    );
}

#[test]
fn test_dialog_text_follows_language() {
    let list = groups();
    let dialog = massive::prepare(&list, MassiveAction::Permissiveness, Language::Fr);
    assert_eq!(dialog.title(), "Permissivité massive des groupes");
}

#[test]
fn test_action_buttons() {
    assert_eq!(MassiveAction::Delete.button_id("users"), "users_massive_delete");
    assert_eq!(MassiveAction::Skel.button_id("users"), "users_massive_skel");
    assert!(MassiveAction::Skel.applies_to("users"));
    assert!(!MassiveAction::Skel.applies_to("groups"));
    assert!(MassiveAction::Permissiveness.applies_to("groups"));
    assert!(MassiveAction::Delete.applies_to("machines"));
    assert_eq!(MassiveAction::Delete.label(Language::Fr), "Supprimer");
}

#[tokio::test]
async fn test_confirmed_action_reaches_the_backend_once() {
    let mut list = users();
    list.massive_select(true);
    let path = massive::confirm(&list, MassiveAction::Delete, &ConfirmOptions::default())
        .expect("rows are checked");

    let recorder = RecordingBackend::new();
    backend::fire_and_forget(&recorder, &path).await;

    assert_eq!(
        recorder.requests(),
        vec!["/users/massive/delete/1001%2C1000%2C1002/".to_string()]
    );
}

#[tokio::test]
async fn test_skel_picker_is_fetched_from_the_backend() {
    let recorder = RecordingBackend::new();
    recorder.respond_with(massive::SKEL_MESSAGE_PATH, "<select name=\"skel\"></select>");

    let html = recorder.get(massive::SKEL_MESSAGE_PATH).await.unwrap();
    assert_eq!(html, "<select name=\"skel\"></select>");
    assert_eq!(recorder.get("/unknown").await.unwrap(), "");
    assert_eq!(recorder.requests().len(), 2);
}

#[test]
fn test_every_dialog_starts_with_safe_defaults() {
    let mut list = users();
    list.set_row_checked("bob", true);

    let MassiveDialog::Confirm(mut first) = massive::prepare(&list, MassiveAction::Delete, Language::En)
    else {
        panic!("expected a confirmation dialog");
    };
    assert_eq!(first.options, ConfirmOptions::default());
    // Ticked, then cancelled.
    first.options.no_archive = true;
    drop(first);

    let MassiveDialog::Confirm(second) = massive::prepare(&list, MassiveAction::Delete, Language::En)
    else {
        panic!("expected a confirmation dialog");
    };
    assert!(!second.options.no_archive);
    assert_eq!(second.options.skel, None);
    assert_eq!(second.error, None);
}

#[test]
fn test_skel_without_a_template_is_refused() {
    let mut list = users();
    list.set_row_checked("carl", true);

    assert_eq!(
        massive::confirm(&list, MassiveAction::Skel, &ConfirmOptions::default()),
        None
    );
    let blank = ConfirmOptions {
        no_archive: false,
        skel: Some(String::new()),
    };
    assert_eq!(massive::confirm(&list, MassiveAction::Skel, &blank), None);

    let MassiveDialog::Confirm(mut dialog) = massive::prepare(&list, MassiveAction::Skel, Language::Fr)
    else {
        panic!("expected a confirmation dialog");
    };
    assert!(!dialog.is_ready());
    dialog.refuse(Language::Fr);
    assert_eq!(
        dialog.error.as_deref(),
        Some("Veuillez choisir un squelette à appliquer.")
    );

    dialog.options.skel = Some("/etc/skel".to_string());
    assert!(dialog.is_ready());
    assert_eq!(
        massive::confirm(&list, dialog.action, &dialog.options).as_deref(),
        Some("/users/massive/skel/1002/%2Fetc%2Fskel")
    );
}

#[test]
fn test_delete_and_permissiveness_need_no_extra_choice() {
    let mut list = groups();
    list.massive_select(true);
    let MassiveDialog::Confirm(dialog) =
        massive::prepare(&list, MassiveAction::Permissiveness, Language::En)
    else {
        panic!("expected a confirmation dialog");
    };
    assert!(dialog.is_ready());
    assert_eq!(dialog.no_archive_label, None);
}
