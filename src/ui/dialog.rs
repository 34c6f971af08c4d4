use dioxus::prelude::*;

use crate::io::backend::ConsoleBackend;
use crate::state::i18n::{self, Language};
use crate::state::massive::{MassiveAction, MassiveDialog};
use crate::state::page::PageState;
use crate::ui::actions;

/// Confirm/cancel dialog of the massive actions. Option state lives in the
/// dialog value itself, so closing it discards any choice.
#[component]
pub fn Dialog(
    page: Signal<PageState>,
    dialog: Signal<Option<MassiveDialog>>,
    language: Signal<Language>,
) -> Element {
    let backend = use_context::<ConsoleBackend>();

    let Some(current) = dialog.read().clone() else {
        return rsx! {};
    };
    let current_language = *language.read();
    let close_label = i18n::gettext(current_language, "Close");
    let cancel_label = i18n::gettext(current_language, "Cancel");
    let confirm_label = i18n::gettext(current_language, "Confirm");

    match current {
        MassiveDialog::Info { title, message } => rsx! {
            div { class: "dialog-backdrop",
                div { class: "dialog", id: "dialog",
                    h3 { class: "dialog-title", "{title}" }
                    p { class: "dialog-message", "{message}" }
                    div { class: "dialog-buttons",
                        button {
                            class: "dialog-btn",
                            id: "dialog-close",
                            onclick: move |_| {
                                let mut dialog = dialog;
                                dialog.set(None);
                            },
                            "{close_label}"
                        }
                    }
                }
            }
        },
        MassiveDialog::Confirm(confirm) => rsx! {
            div { class: "dialog-backdrop",
                div { class: "dialog", id: "dialog",
                    h3 { class: "dialog-title", "{confirm.title}" }
                    p { class: "dialog-message", "{confirm.message}" }
                    ul { class: "dialog-items",
                        for item in confirm.items.iter() {
                            li { "{item}" }
                        }
                    }
                    if let Some(label) = confirm.no_archive_label.as_ref() {
                        div { class: "dialog-option",
                            input {
                                r#type: "checkbox",
                                id: "massive_delete_no_archive",
                                checked: confirm.options.no_archive,
                                onchange: move |evt: FormEvent| {
                                    let checked = evt.checked();
                                    let mut dialog = dialog;
                                    dialog.with_mut(|dialog| {
                                        if let Some(MassiveDialog::Confirm(confirm)) = dialog.as_mut() {
                                            confirm.options.no_archive = checked;
                                        }
                                    });
                                },
                            }
                            label { r#for: "massive_delete_no_archive", "{label}" }
                        }
                    }
                    if let Some(html) = confirm.extra_html.as_ref() {
                        div { class: "dialog-extra", dangerous_inner_html: "{html}" }
                    }
                    if let Some(error) = confirm.error.as_ref() {
                        p { class: "dialog-error", "{error}" }
                    }
                    div { class: "dialog-buttons",
                        button {
                            class: "dialog-btn",
                            id: "dialog-cancel",
                            onclick: move |_| {
                                let mut dialog = dialog;
                                dialog.set(None);
                            },
                            "{cancel_label}"
                        }
                        button {
                            class: "dialog-btn dialog-btn-primary",
                            id: "dialog-confirm",
                            onclick: {
                                let backend = backend.clone();
                                move |_| {
                                    let Some(MassiveDialog::Confirm(mut confirm)) = dialog.peek().clone()
                                    else {
                                        return;
                                    };
                                    let backend = backend.clone();
                                    spawn(async move {
                                        if confirm.action == MassiveAction::Skel {
                                            confirm.options.skel = actions::read_skel_picker().await;
                                        }
                                        actions::confirm_massive(
                                            page,
                                            confirm,
                                            *language.peek(),
                                            dialog,
                                            backend,
                                        );
                                    });
                                }
                            },
                            "{confirm_label}"
                        }
                    }
                }
            }
        },
    }
}
