use dioxus::prelude::*;

use crate::state::toggle::{ToggleConfig, ToggleControl};

/// Image-backed ON/OFF proxy for a hidden checkbox input.
#[component]
pub fn ToggleCheckbox(
    id: String,
    checked: Signal<bool>,
    config: ToggleConfig,
    onchange: Option<EventHandler<bool>>,
) -> Element {
    let mut control = use_signal(|| ToggleControl::new(config.clone(), *checked.peek()));

    // Change events of the backing input, programmatic ones included.
    use_effect(move || {
        let value = *checked.read();
        control.with_mut(|control| control.set_checked(value));
    });

    let view = control.read().view().clone();

    rsx! {
        input {
            r#type: "checkbox",
            id: "{id}",
            style: "position: absolute; z-index: -1; visibility: hidden;",
            checked: *checked.read(),
            onchange: move |evt: FormEvent| {
                let mut checked = checked;
                checked.set(evt.checked());
            }
        }
        span {
            class: "jquery_checkbox",
            style: "background: {view.background};",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                evt.stop_propagation();
                let next = control.with_mut(|control| control.click());
                let mut checked = checked;
                checked.set(next);
                if let Some(handler) = onchange.as_ref() {
                    handler.call(next);
                }
            },
            span { class: "jquery_checkbox_text {view.text_class}", "{view.text}" }
        }
    }
}
