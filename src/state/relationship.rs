use std::collections::{BTreeMap, BTreeSet};

/// Membership of a user in a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Relationship {
    NoMembership,
    Guest,
    Member,
    Resp,
}

impl Relationship {
    pub const ALL: [Self; 4] = [Self::NoMembership, Self::Guest, Self::Member, Self::Resp];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NoMembership => "no_membership",
            Self::Guest => "guest",
            Self::Member => "member",
            Self::Resp => "resp",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rel| rel.name() == name)
    }

    /// Background class of the item title.
    pub fn background_class(self) -> String {
        format!("{}_bkg", self.name())
    }
}

/// Relationships arrive either as an index or as a name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelationshipRef {
    Index(usize),
    Name(String),
}

impl RelationshipRef {
    pub fn resolve(&self) -> Option<Relationship> {
        match self {
            Self::Index(index) => Relationship::from_index(*index),
            Self::Name(name) => Relationship::from_name(name),
        }
    }
}

impl From<usize> for RelationshipRef {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl From<&str> for RelationshipRef {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

/// Bootstrap button flavour per relationship index.
pub const BUTTON_TYPES: [&str; 5] = ["default", "primary", "success", "danger", "warning"];

pub const RELATIONSHIP_IMAGES: [Option<&str>; 5] = [
    None,
    Some("/media/images/24x24/guest+3px.png"),
    Some("/media/images/24x24/member+3px.png"),
    Some("/media/images/24x24/resp+3px.png"),
    None,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    User,
    Group,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
        }
    }
}

/// One clickable user or group in an edit form, with its popover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickItem {
    pub id: String,
    pub value: Option<Relationship>,
    /// Hidden form inputs by name, e.g. `member_users`.
    pub hidden_inputs: BTreeMap<String, String>,
    pub title_class: Option<String>,
    /// Popover buttons currently hidden, by class (`rel_guest`, `rel_2`).
    pub hidden_buttons: BTreeSet<String>,
    pub popover_open: bool,
    pub button_class: String,
    pub image: Option<&'static str>,
}

impl ClickItem {
    fn new(id: &str, kind: ItemKind) -> Self {
        let hidden_inputs = Relationship::ALL
            .into_iter()
            .map(|rel| (input_name(rel, kind), String::new()))
            .collect();
        Self {
            id: id.to_string(),
            value: None,
            hidden_inputs,
            title_class: None,
            hidden_buttons: BTreeSet::new(),
            popover_open: false,
            button_class: format!("btn-{}", BUTTON_TYPES[0]),
            image: None,
        }
    }

    /// The value posted with the form for `rel`, if the item holds it.
    pub fn input_value(&self, rel: Relationship, kind: ItemKind) -> Option<&str> {
        self.hidden_inputs
            .get(&input_name(rel, kind))
            .map(String::as_str)
    }

    fn set_membership(&mut self, rel: Relationship, kind: ItemKind) {
        for value in self.hidden_inputs.values_mut() {
            value.clear();
        }
        self.hidden_inputs.insert(input_name(rel, kind), self.id.clone());
    }
}

fn input_name(rel: Relationship, kind: ItemKind) -> String {
    format!("{}_{}s", rel.name(), kind.as_str())
}

/// Typed form of both relationship call shapes. With a membership scope the
/// form inputs and title follow; without one, the button styling does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationshipUpdate {
    pub item_id: String,
    pub relationship: RelationshipRef,
    pub membership: bool,
}

/// Relationship editor of a user or group form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationshipBoard {
    kind: ItemKind,
    items: BTreeMap<String, ClickItem>,
}

impl RelationshipBoard {
    pub fn new(kind: ItemKind, ids: &[&str]) -> Self {
        let items = ids
            .iter()
            .map(|id| (id.to_string(), ClickItem::new(id, kind)))
            .collect();
        Self { kind, items }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn item(&self, id: &str) -> Option<&ClickItem> {
        self.items.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = &ClickItem> {
        self.items.values()
    }

    pub fn open_popover(&mut self, id: &str) {
        for item in self.items.values_mut() {
            item.popover_open = item.id == id;
        }
    }

    pub fn close_popover(&mut self, id: &str) {
        if let Some(item) = self.items.get_mut(id) {
            item.popover_open = false;
        }
    }

    /// Membership shape: the board kind decides whether `user_id` or
    /// `group_id` names the edited item.
    pub fn update_membership(
        &mut self,
        user_id: &str,
        group_id: &str,
        relationship: impl Into<RelationshipRef>,
    ) -> bool {
        let item_id = match self.kind {
            ItemKind::User => user_id,
            ItemKind::Group => group_id,
        };
        self.apply(RelationshipUpdate {
            item_id: item_id.to_string(),
            relationship: relationship.into(),
            membership: true,
        })
    }

    /// Button shape: restyles the item button for relationship `index`.
    pub fn update_button(&mut self, item_id: &str, index: usize) -> bool {
        self.apply(RelationshipUpdate {
            item_id: item_id.to_string(),
            relationship: RelationshipRef::Index(index),
            membership: false,
        })
    }

    /// Popover item click: the membership shape (inputs, title background)
    /// then the button shape (class, image), and the popover closes.
    pub fn pick(&mut self, item_id: &str, relationship: &str) -> bool {
        let Some(rel) = Relationship::from_name(relationship) else {
            return false;
        };
        let picked = self.apply(RelationshipUpdate {
            item_id: item_id.to_string(),
            relationship: RelationshipRef::Index(rel.index()),
            membership: true,
        }) && self.update_button(item_id, rel.index());
        self.close_popover(item_id);
        picked
    }

    pub fn apply(&mut self, update: RelationshipUpdate) -> bool {
        let kind = self.kind;
        let Some(item) = self.items.get_mut(&update.item_id) else {
            return false;
        };

        if update.membership {
            let Some(rel) = update.relationship.resolve() else {
                return false;
            };
            item.hidden_buttons = BTreeSet::from([format!("rel_{}", rel.name())]);
            item.value = Some(rel);
            item.set_membership(rel, kind);
            item.title_class = Some(rel.background_class());
            return true;
        }

        let index = match &update.relationship {
            RelationshipRef::Index(index) => *index,
            RelationshipRef::Name(name) => match Relationship::from_name(name) {
                Some(rel) => rel.index(),
                None => return false,
            },
        };
        let Some(button_type) = BUTTON_TYPES.get(index) else {
            return false;
        };
        item.hidden_buttons = BTreeSet::from([format!("rel_{index}")]);
        item.button_class = format!("btn-{button_type}");
        item.image = RELATIONSHIP_IMAGES[index];
        item.value = Relationship::from_index(index);
        true
    }
}
