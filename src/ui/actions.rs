use std::path::Path;

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::io::backend::{fire_and_forget, Backend, ConsoleBackend};
use crate::io::page_io::{self, InstantFieldFile};
use crate::state::i18n::Language;
use crate::state::massive::{self, ConfirmDialog, MassiveAction, MassiveDialog};
use crate::state::page::PageState;
use crate::state::relationship::RelationshipBoard;

/// Spawns the request and forgets about it.
pub fn fire(backend: ConsoleBackend, path: String) {
    spawn(async move {
        fire_and_forget(&backend, &path).await;
    });
}

pub fn load_page(
    path: &Path,
    mut page: Signal<PageState>,
    mut board: Signal<Option<RelationshipBoard>>,
    mut fields: Signal<Vec<InstantFieldFile>>,
    mut error_message: Signal<Option<String>>,
) {
    let built = page_io::load_page(path)
        .and_then(|file| page_io::build_page(&file).map(|state| (file, state)));
    match built {
        Ok((file, state)) => {
            info!(path = %path.display(), lists = file.lists.len(), "page loaded");
            page.set(state);
            board.set(file.relationships.map(|rel| rel.into_board()));
            fields.set(file.instant_fields);
            error_message.set(None);
        }
        Err(err) => {
            warn!(error = %err, path = %path.display(), "cannot load page");
            error_message.set(Some(err.to_string()));
        }
    }
}

/// Opens the dialog of a massive action button. The skel confirmation waits
/// for the skeleton picker HTML before showing.
pub fn open_massive_dialog(
    page: Signal<PageState>,
    list_name: &str,
    action: MassiveAction,
    language: Language,
    mut dialog: Signal<Option<MassiveDialog>>,
    backend: ConsoleBackend,
) {
    let prepared = page
        .read()
        .list(list_name)
        .map(|list| massive::prepare(list, action, language));

    match prepared {
        Some(MassiveDialog::Confirm(mut confirm)) if action == MassiveAction::Skel => {
            spawn(async move {
                match backend.get(massive::SKEL_MESSAGE_PATH).await {
                    Ok(html) => confirm.extra_html = Some(html),
                    Err(err) => warn!(error = %err, "cannot fetch skeleton picker"),
                }
                dialog.set(Some(MassiveDialog::Confirm(confirm)));
            });
        }
        other => dialog.set(other),
    }
}

/// Value of the skeleton `select` the server sent with the skel dialog.
pub async fn read_skel_picker() -> Option<String> {
    let script = format!(
        "let picker = document.getElementById('{}'); return picker ? picker.value : null;",
        massive::SKEL_PICKER_ID
    );
    match document::eval(&script).join::<Option<String>>().await {
        Ok(value) => value.filter(|skel| !skel.is_empty()),
        Err(err) => {
            warn!(error = ?err, "cannot read skeleton picker");
            None
        }
    }
}

/// Sends the confirmed action. A dialog that is not ready stays open with an
/// error line instead.
pub fn confirm_massive(
    page: Signal<PageState>,
    mut confirm: ConfirmDialog,
    language: Language,
    mut dialog: Signal<Option<MassiveDialog>>,
    backend: ConsoleBackend,
) {
    if !confirm.is_ready() {
        warn!(list = %confirm.list_name, action = confirm.action.slug(), "confirmation refused");
        confirm.refuse(language);
        dialog.set(Some(MassiveDialog::Confirm(confirm)));
        return;
    }

    let path = page
        .read()
        .list(&confirm.list_name)
        .and_then(|list| massive::confirm(list, confirm.action, &confirm.options));
    if let Some(path) = path {
        info!(list = %confirm.list_name, action = confirm.action.slug(), "massive action confirmed");
        fire(backend, path);
    }
    dialog.set(None);
}
