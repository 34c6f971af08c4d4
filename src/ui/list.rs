use dioxus::prelude::*;

use crate::io::backend::ConsoleBackend;
use crate::state::data_model::{ListRow, RowView, ROW_HEIGHT_PX};
use crate::state::i18n::{self, Language};
use crate::state::list_state::{SortOrder, SortSpec};
use crate::state::massive::{MassiveAction, MassiveDialog};
use crate::state::page::PageState;
use crate::ui::actions;

#[component]
pub fn ListView(
    page: Signal<PageState>,
    list_name: String,
    language: Signal<Language>,
    dialog: Signal<Option<MassiveDialog>>,
) -> Element {
    let backend = use_context::<ConsoleBackend>();
    let mut master_checked = use_signal(|| false);

    let Some(list) = page.read().list(&list_name).cloned() else {
        return rsx! {};
    };
    let current_language = *language.read();
    let columns = list.columns();
    let sort_spec = list.sort_spec().cloned();
    let search_query = list.search_query().to_string();
    let visible = list.visible_rows().count();
    let search_placeholder = i18n::gettext(current_language, "Search");
    let actions: Vec<MassiveAction> = MassiveAction::all()
        .iter()
        .copied()
        .filter(|action| action.applies_to(&list_name))
        .collect();

    rsx! {
        div { class: "list", id: "{list.element_id()}",
            div { class: "list_toolbar",
                input {
                    r#type: "checkbox",
                    id: "{list_name}_massive_select",
                    checked: *master_checked.read(),
                    onchange: {
                        let list_name = list_name.clone();
                        let mut page = page;
                        move |evt: FormEvent| {
                            let checked = evt.checked();
                            master_checked.set(checked);
                            page.with_mut(|page| {
                                if let Some(list) = page.list_mut(&list_name) {
                                    list.massive_select(checked);
                                }
                            });
                        }
                    }
                }
                input {
                    class: "search_box",
                    id: "search_box",
                    placeholder: "{search_placeholder}",
                    value: "{search_query}",
                    oninput: {
                        let list_name = list_name.clone();
                        let mut page = page;
                        move |evt: FormEvent| {
                            let query = evt.value();
                            page.with_mut(|page| {
                                if let Some(list) = page.list_mut(&list_name) {
                                    list.search(&query);
                                }
                            });
                        }
                    }
                }
                for action in actions {
                    button {
                        class: "massive_button",
                        id: "{action.button_id(&list_name)}",
                        onclick: {
                            let list_name = list_name.clone();
                            let backend = backend.clone();
                            move |_| {
                                actions::open_massive_dialog(
                                    page,
                                    &list_name,
                                    action,
                                    *language.peek(),
                                    dialog,
                                    backend.clone(),
                                );
                            }
                        },
                        "{action.label(current_language)}"
                    }
                }
            }
            div { class: "list_header", id: "{list_name}_list_header",
                for col in columns.iter().cloned() {
                    div {
                        class: header_class(&col, &sort_spec, list.is_sortable(&col)),
                        id: "{col}",
                        onclick: {
                            let list_name = list_name.clone();
                            let col = col.clone();
                            let mut page = page;
                            move |_| {
                                page.with_mut(|page| {
                                    if let Some(list) = page.list_mut(&list_name) {
                                        list.header_click(&col);
                                    }
                                });
                            }
                        },
                        "{col}"
                        span { class: "item_header_sort", "{sort_arrow(&col, &sort_spec)}" }
                    }
                }
            }
            div {
                class: "list_items",
                style: "height: {visible * ROW_HEIGHT_PX}px;",
                for (id, row) in list.rows().iter().map(|row| (row.id().to_string(), row.clone())) {
                    ListItem {
                        key: "{id}",
                        page,
                        list_name: list_name.clone(),
                        columns: columns.clone(),
                        row,
                    }
                }
            }
        }
    }
}

#[component]
fn ListItem(page: Signal<PageState>, list_name: String, columns: Vec<String>, row: ListRow) -> Element {
    let id = row.id().to_string();
    let stripe = row.stripe().classes(&list_name);
    let mut row_class = format!("row {list_name}_row");
    if row.is_selected() {
        row_class.push_str(" item_selected");
    }
    if !row.is_visible() {
        row_class.push_str(" row_hidden");
    }
    let style = row_style(&row);

    rsx! {
        div {
            class: "{row_class}",
            id: "{id}",
            style: "{style}",
            onclick: {
                let list_name = list_name.clone();
                let id = id.clone();
                let mut page = page;
                move |_| {
                    page.with_mut(|page| {
                        page.select_row(&list_name, &id);
                    });
                }
            },
            input {
                r#type: "checkbox",
                class: "{list_name}_checkbox",
                checked: row.is_checked(),
                disabled: row.is_disabled(),
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                onchange: {
                    let list_name = list_name.clone();
                    let id = id.clone();
                    let mut page = page;
                    move |evt: FormEvent| {
                        let checked = evt.checked();
                        page.with_mut(|page| {
                            if let Some(list) = page.list_mut(&list_name) {
                                list.set_row_checked(&id, checked);
                            }
                        });
                    }
                }
            }
            for col in columns {
                span {
                    class: cell_class(&list_name, &col, &row, &stripe),
                    "{row.column_text(&col).unwrap_or_default()}"
                }
            }
            if row.is_selected() {
                div { class: "item_menu",
                    button {
                        class: "item_menu_btn",
                        onclick: {
                            let mut page = page;
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                page.with_mut(|page| page.unselect_row());
                            }
                        },
                        "\u{2715}"
                    }
                }
            }
        }
    }
}

fn row_style(row: &ListRow) -> String {
    let mut style = format!(
        "top: {}px; transition: top {}ms ease-in-out, opacity {}ms;",
        row.offset_px(),
        row.move_duration().as_millis(),
        row.fade_duration().as_millis()
    );
    if row.is_visible() {
        style.push_str(" opacity: 1;");
    } else {
        style.push_str(" opacity: 0; pointer-events: none;");
    }
    if let Some(width) = row.width() {
        style.push_str(&format!(" width: {width}px;"));
    }
    style
}

fn header_class(col: &str, sort_spec: &Option<SortSpec>, sortable: bool) -> String {
    let mut class = format!("list_header_item header_{col}");
    if !sortable {
        class.push_str(" not_sortable");
    }
    if sort_spec.as_ref().is_some_and(|spec| spec.column == col) {
        class.push_str(" current_sort");
    }
    class
}

fn sort_arrow(col: &str, sort_spec: &Option<SortSpec>) -> &'static str {
    match sort_spec.as_ref() {
        Some(spec) if spec.column == col => match spec.order {
            SortOrder::Asc => "\u{25B2}",
            SortOrder::Desc => "\u{25BC}",
        },
        _ => "",
    }
}

fn cell_class(list_name: &str, col: &str, row: &ListRow, stripe: &str) -> String {
    let mut class = format!("{list_name}_{col} odd_even_typed {stripe}");
    if let Some(cell) = row.cell(col) {
        for extra in &cell.classes {
            class.push(' ');
            class.push_str(extra);
        }
    }
    class
}
