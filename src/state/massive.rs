use crate::state::codec;
use crate::state::i18n::{self, Language};
use crate::state::list_state::ListState;

/// Fetched before the skel confirmation is shown; the returned HTML (the
/// skeleton picker) is appended to the dialog.
pub const SKEL_MESSAGE_PATH: &str = "/users/message/massive_skel/";

/// DOM id of the skeleton `select` inside the fetched picker HTML.
pub const SKEL_PICKER_ID: &str = "id_skel_to_apply";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MassiveAction {
    Delete,
    Skel,
    Permissiveness,
}

impl MassiveAction {
    pub fn all() -> &'static [Self] {
        &[Self::Delete, Self::Skel, Self::Permissiveness]
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Skel => "skel",
            Self::Permissiveness => "permissiveness",
        }
    }

    /// DOM id of the button triggering the action, e.g. `users_massive_delete`.
    pub fn button_id(self, list_name: &str) -> String {
        format!("{list_name}_massive_{}", self.slug())
    }

    pub fn label(self, language: Language) -> &'static str {
        i18n::gettext(
            language,
            match self {
                Self::Delete => "Delete",
                Self::Skel => "Reapply skeleton",
                Self::Permissiveness => "Toggle permissiveness",
            },
        )
    }

    /// Whether the action makes sense on `list_name`. Deletion works on any
    /// list; skel is a users-only action and permissiveness groups-only.
    pub fn applies_to(self, list_name: &str) -> bool {
        match self {
            Self::Delete => true,
            Self::Skel => list_name == "users",
            Self::Permissiveness => list_name == "groups",
        }
    }

    fn scope(self, list: &ListState) -> &str {
        match self {
            Self::Delete => list.name(),
            Self::Skel => "users",
            Self::Permissiveness => "groups",
        }
    }

    /// Column listed in the dialog.
    fn display_column(self, list: &ListState) -> &str {
        match self {
            Self::Delete => list.main_column(),
            Self::Skel => "login",
            Self::Permissiveness => "name",
        }
    }

    /// Column whose values go to the backend.
    fn identifier_column(self, list: &ListState) -> &str {
        match self {
            Self::Delete => list.identifier(),
            Self::Skel => "uidNumber",
            Self::Permissiveness => "gidNumber",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Delete => "Massive removal",
            Self::Skel => "Massive skeleton reapplying",
            Self::Permissiveness => "Massive group permissiveness",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            Self::Delete => "Please select at least one account.",
            Self::Skel => "Please select at least one user account.",
            Self::Permissiveness => "Please select at least one group.",
        }
    }

    fn confirm_message(self) -> &'static str {
        match self {
            Self::Delete => "Are you sure you want to remove these account(s):",
            Self::Skel => {
                "Are you sure you want to reapply their skeleton to these user account(s):"
            }
            Self::Permissiveness => "Are you sure you want to toggle permissiveness of group(s):",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub action: MassiveAction,
    pub list_name: String,
    pub title: String,
    pub message: String,
    pub items: Vec<String>,
    /// Label of the "no archive" checkbox; only the delete dialog has one.
    pub no_archive_label: Option<String>,
    pub extra_html: Option<String>,
    /// Choices made in this dialog; every dialog starts from the defaults.
    pub options: ConfirmOptions,
    /// Shown when a confirmation is refused, e.g. no skeleton picked.
    pub error: Option<String>,
}

impl ConfirmDialog {
    /// Skel needs a template; the other actions can always be confirmed.
    pub fn is_ready(&self) -> bool {
        match self.action {
            MassiveAction::Skel => self
                .options
                .skel
                .as_deref()
                .is_some_and(|skel| !skel.is_empty()),
            MassiveAction::Delete | MassiveAction::Permissiveness => true,
        }
    }

    pub fn refuse(&mut self, language: Language) {
        let message = i18n::gettext(language, "Please choose a skeleton to apply.");
        self.error = Some(message.to_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MassiveDialog {
    /// Nothing is checked: tell the user, never contact the backend.
    Info { title: String, message: String },
    Confirm(ConfirmDialog),
}

impl MassiveDialog {
    pub fn title(&self) -> &str {
        match self {
            Self::Info { title, .. } => title,
            Self::Confirm(dialog) => &dialog.title,
        }
    }

    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Self::Confirm(_))
    }
}

/// User choices made inside a confirmation dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub no_archive: bool,
    pub skel: Option<String>,
}

pub fn prepare(list: &ListState, action: MassiveAction, language: Language) -> MassiveDialog {
    let title = i18n::gettext(language, action.title()).to_string();
    let items = list.checked_values(action.display_column(list));

    if items.is_empty() {
        return MassiveDialog::Info {
            title,
            message: i18n::gettext(language, action.empty_message()).to_string(),
        };
    }

    let no_archive_label = matches!(action, MassiveAction::Delete).then(|| {
        i18n::gettext(language, "Definitely remove account data (no archiving)").to_string()
    });

    MassiveDialog::Confirm(ConfirmDialog {
        action,
        list_name: list.name().to_string(),
        title,
        message: i18n::gettext(language, action.confirm_message()).to_string(),
        items,
        no_archive_label,
        extra_html: None,
        options: ConfirmOptions::default(),
        error: None,
    })
}

/// Re-scans the checked rows and builds the single request path of the
/// action. Returns `None` when nothing is checked anymore, or when skel has
/// no template to apply.
pub fn confirm(list: &ListState, action: MassiveAction, options: &ConfirmOptions) -> Option<String> {
    if action == MassiveAction::Skel && options.skel.as_deref().unwrap_or_default().is_empty() {
        return None;
    }
    let ids = list.checked_values(action.identifier_column(list));
    if ids.is_empty() {
        return None;
    }

    let scope = action.scope(list);
    let csv = codec::encode_component(&ids.join(","));
    let path = match action {
        MassiveAction::Delete => format!(
            "/{scope}/massive/delete/{csv}/{}",
            codec::python_bool(options.no_archive)
        ),
        MassiveAction::Skel => format!(
            "/{scope}/massive/skel/{csv}/{}",
            codec::encode_component(options.skel.as_deref().unwrap_or_default())
        ),
        MassiveAction::Permissiveness => format!("/{scope}/massive/permissiveness/{csv}"),
    };
    Some(path)
}
