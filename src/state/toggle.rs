use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub on_image: String,
    pub off_image: String,
    pub on_text: String,
    pub off_text: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            on_image: "/media/images/jquery_checkbox/on.png".to_string(),
            off_image: "/media/images/jquery_checkbox/off.png".to_string(),
            on_text: "ON".to_string(),
            off_text: "OFF".to_string(),
        }
    }
}

/// What the visual proxy shows for one state of the backing input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleView {
    pub background: String,
    pub text: String,
    pub text_class: &'static str,
}

/// Two-state control mirroring a boolean input. The view is recomputed on
/// every change, including the first render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleControl {
    config: ToggleConfig,
    checked: bool,
    view: ToggleView,
}

impl ToggleControl {
    pub fn new(config: ToggleConfig, checked: bool) -> Self {
        let view = render(&config, checked);
        Self {
            config,
            checked,
            view,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn view(&self) -> &ToggleView {
        &self.view
    }

    /// A click on the proxy is forwarded to the backing input, which flips.
    pub fn click(&mut self) -> bool {
        self.set_checked(!self.checked);
        self.checked
    }

    /// Change event of the backing input, user-driven or programmatic.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
        self.view = render(&self.config, checked);
    }
}

fn render(config: &ToggleConfig, checked: bool) -> ToggleView {
    if checked {
        ToggleView {
            background: format!("url('{}')", config.on_image),
            text: config.on_text.clone(),
            text_class: "jquery_checkbox_on",
        }
    } else {
        ToggleView {
            background: format!("url('{}')", config.off_image),
            text: config.off_text.clone(),
            text_class: "jquery_checkbox_off",
        }
    }
}
