use dioxus::prelude::*;

use crate::state::relationship::{ClickItem, Relationship, RelationshipBoard};

/// Clickable users or groups of an edit form, each with a relationship popover.
#[component]
pub fn RelationshipPanel(board: Signal<Option<RelationshipBoard>>) -> Element {
    let items: Vec<ClickItem> = match board.read().as_ref() {
        Some(current) => current.items().cloned().collect(),
        None => return rsx! {},
    };

    rsx! {
        div { class: "click_items",
            for item in items {
                ClickItemView { key: "{item.id}", board, item }
            }
        }
    }
}

#[component]
fn ClickItemView(board: Signal<Option<RelationshipBoard>>, item: ClickItem) -> Element {
    let title_class = item.title_class.clone().unwrap_or_default();
    let item_id = item.id.clone();

    rsx! {
        div { class: "click_item", id: "item_{item.id}",
            span { class: "click_item_title {title_class}", "{item.id}" }
            button {
                class: "btn {item.button_class}",
                id: "btn_{item.id}",
                onclick: {
                    let item_id = item_id.clone();
                    let open = item.popover_open;
                    move |evt: MouseEvent| {
                        evt.stop_propagation();
                        let mut board = board;
                        board.with_mut(|board| {
                            if let Some(board) = board.as_mut() {
                                if open {
                                    board.close_popover(&item_id);
                                } else {
                                    board.open_popover(&item_id);
                                }
                            }
                        });
                    }
                },
                if let Some(image) = item.image {
                    img { src: "{image}" }
                }
            }
            for (name, value) in item.hidden_inputs.iter() {
                input {
                    r#type: "hidden",
                    class: "item_hidden_input",
                    name: "{name}",
                    value: "{value}",
                }
            }
            if item.popover_open {
                div { class: "popover", id: "popover_{item.id}",
                    for rel in Relationship::ALL {
                        if !is_hidden(&item, rel) {
                            button {
                                class: "rel_{rel.name()} rel_{rel.index()}",
                                onclick: {
                                    let item_id = item_id.clone();
                                    move |_| {
                                        let mut board = board;
                                        board.with_mut(|board| {
                                            if let Some(board) = board.as_mut() {
                                                board.pick(&item_id, rel.name());
                                            }
                                        });
                                    }
                                },
                                "{rel.name()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn is_hidden(item: &ClickItem, rel: Relationship) -> bool {
    item.hidden_buttons.contains(&format!("rel_{}", rel.name()))
        || item.hidden_buttons.contains(&format!("rel_{}", rel.index()))
}
