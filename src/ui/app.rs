use dioxus::prelude::*;
use std::path::PathBuf;

use crate::io::config::Config;
use crate::io::page_io::InstantFieldFile;
use crate::state::i18n::Language;
use crate::state::massive::MassiveDialog;
use crate::state::page::PageState;
use crate::state::relationship::RelationshipBoard;
use crate::ui::actions;
use crate::ui::dialog::Dialog;
use crate::ui::instant::InstantField;
use crate::ui::list::ListView;
use crate::ui::relationship::RelationshipPanel;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();
    let page = use_signal(PageState::new);
    let board = use_signal::<Option<RelationshipBoard>>(|| None);
    let fields = use_signal::<Vec<InstantFieldFile>>(Vec::new);
    let dialog = use_signal::<Option<MassiveDialog>>(|| None);
    let error_message = use_signal::<Option<String>>(|| None);
    let mut language = use_signal(|| config.ui.language);

    use_effect({
        let page_path = std::env::var_os("WMILIST_PAGE")
            .map(PathBuf::from)
            .or_else(|| config.ui.page.clone());
        move || {
            if let Some(path) = page_path.as_deref() {
                actions::load_page(path, page, board, fields, error_message);
            }
        }
    });

    let current_language = *language.read();
    let list_names: Vec<String> = page
        .read()
        .lists()
        .map(|list| list.name().to_string())
        .collect();
    let instant_delay = config.instant_delay();
    let toggle = config.toggle.clone();

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            div { class: "app-header",
                select {
                    class: "language-select",
                    id: "select-language",
                    value: "{current_language.code()}",
                    onchange: move |evt| {
                        if let Some(next) = Language::from_code(&evt.value()) {
                            language.set(next);
                        }
                    },
                    for lang in Language::all().iter().copied() {
                        option { value: "{lang.code()}", "{lang.code()}" }
                    }
                }
                if let Some(err) = error_message.read().as_ref() {
                    span { class: "error-message", "{err}" }
                }
            }
            if list_names.is_empty() {
                p { class: "empty-message", id: "empty-message", "No page loaded. Set WMILIST_PAGE to a page description." }
            }
            for name in list_names {
                ListView {
                    key: "{name}",
                    page,
                    list_name: name.clone(),
                    language,
                    dialog,
                }
            }
            div { class: "instant-fields",
                for field in fields.read().iter().cloned() {
                    InstantField {
                        key: "{field.url}",
                        field,
                        delay: instant_delay,
                        toggle: toggle.clone(),
                    }
                }
            }
            RelationshipPanel { board }
            Dialog { page, dialog, language }
        }
    }
}
