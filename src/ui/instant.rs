use std::time::Duration;

use dioxus::prelude::*;

use crate::io::backend::{fire_and_forget, ConsoleBackend};
use crate::io::page_io::{InstantFieldFile, InstantFieldKind};
use crate::state::instant::{InstantSubmitter, InstantValue};
use crate::state::toggle::ToggleConfig;
use crate::ui::actions;
use crate::ui::checkbox::ToggleCheckbox;

/// Form field saved on the server shortly after the user stops editing it.
#[component]
pub fn InstantField(field: InstantFieldFile, delay: Duration, toggle: ToggleConfig) -> Element {
    let backend = use_context::<ConsoleBackend>();
    let mut submitter = use_signal(|| InstantSubmitter::new(field.url.clone()).with_delay(delay));
    let checked = use_signal(|| field.value == "True");

    let click_backend = backend.clone();
    let mut schedule = move |value: InstantValue| {
        let ticket = submitter.with_mut(|submitter| submitter.edit(&value));
        let delay = submitter.peek().delay();
        let backend = backend.clone();
        spawn(async move {
            tokio::time::sleep(delay).await;
            let url = submitter.with_mut(|submitter| submitter.fire(ticket));
            if let Some(url) = url {
                fire_and_forget(&backend, &url).await;
            }
        });
    };

    let input_id = format!("instant_{}", field.url.replace('/', "_"));

    rsx! {
        div { class: "instant-field",
            label { r#for: "{input_id}", "{field.label}" }
            match field.kind {
                InstantFieldKind::Text => rsx! {
                    input {
                        r#type: "text",
                        class: "instant",
                        id: "{input_id}",
                        initial_value: "{field.value}",
                        oninput: move |evt: FormEvent| schedule(InstantValue::Text(evt.value())),
                    }
                },
                InstantFieldKind::Checkbox => rsx! {
                    ToggleCheckbox {
                        id: input_id.clone(),
                        checked,
                        config: toggle.clone(),
                        onchange: move |value: bool| schedule(InstantValue::Checkbox(value)),
                    }
                },
                InstantFieldKind::Select => rsx! {
                    select {
                        class: "instant",
                        id: "{input_id}",
                        onchange: move |evt: FormEvent| schedule(InstantValue::Select(evt.value())),
                        for option_value in field.options.iter() {
                            option {
                                value: "{option_value}",
                                selected: *option_value == field.value,
                                "{option_value}"
                            }
                        }
                    }
                },
                InstantFieldKind::Click => rsx! {
                    button {
                        class: "instant_click",
                        id: "{input_id}",
                        onclick: {
                            let url = field.url.clone();
                            move |_| actions::fire(click_backend.clone(), url.clone())
                        },
                        "{field.value}"
                    }
                },
            }
        }
    }
}
