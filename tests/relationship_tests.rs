use std::collections::BTreeSet;

use wmilist::state::relationship::{
    ItemKind, Relationship, RelationshipBoard, RelationshipRef, RelationshipUpdate,
};

fn board() -> RelationshipBoard {
    RelationshipBoard::new(ItemKind::User, &["alice", "bob"])
}

#[test]
fn test_relationship_lookup() {
    assert_eq!(Relationship::from_index(2), Some(Relationship::Member));
    assert_eq!(Relationship::from_index(4), None);
    assert_eq!(Relationship::from_name("resp"), Some(Relationship::Resp));
    assert_eq!(Relationship::from_name("owner"), None);
    assert_eq!(Relationship::Guest.background_class(), "guest_bkg");
    assert_eq!(RelationshipRef::from(3usize).resolve(), Some(Relationship::Resp));
    assert_eq!(RelationshipRef::from("guest").resolve(), Some(Relationship::Guest));
}

#[test]
fn test_new_items_have_empty_inputs() {
    let board = board();
    let alice = board.item("alice").unwrap();
    assert_eq!(alice.hidden_inputs.len(), 4);
    assert_eq!(alice.input_value(Relationship::Member, ItemKind::User), Some(""));
    assert_eq!(alice.button_class, "btn-default");
    assert_eq!(alice.value, None);
}

#[test]
fn test_membership_update_sets_inputs_and_title() {
    let mut board = board();
    assert!(board.update_membership("alice", "staff", 2usize));

    let alice = board.item("alice").unwrap();
    assert_eq!(alice.value, Some(Relationship::Member));
    assert_eq!(alice.input_value(Relationship::Member, ItemKind::User), Some("alice"));
    assert_eq!(alice.input_value(Relationship::Guest, ItemKind::User), Some(""));
    assert_eq!(alice.title_class.as_deref(), Some("member_bkg"));
    assert_eq!(alice.hidden_buttons, BTreeSet::from(["rel_member".to_string()]));

    // A later change replaces the former membership.
    assert!(board.update_membership("alice", "staff", "guest"));
    let alice = board.item("alice").unwrap();
    assert_eq!(alice.input_value(Relationship::Member, ItemKind::User), Some(""));
    assert_eq!(alice.input_value(Relationship::Guest, ItemKind::User), Some("alice"));
}

#[test]
fn test_group_board_uses_the_group_id() {
    let mut board = RelationshipBoard::new(ItemKind::Group, &["staff"]);
    assert!(board.update_membership("alice", "staff", "resp"));
    let staff = board.item("staff").unwrap();
    assert_eq!(staff.input_value(Relationship::Resp, ItemKind::Group), Some("staff"));
}

#[test]
fn test_invalid_updates_are_rejected() {
    let mut board = board();
    assert!(!board.update_membership("nobody", "staff", 1usize));
    assert!(!board.update_membership("alice", "staff", 9usize));
    assert!(!board.update_button("alice", 5));
    assert!(!board.apply(RelationshipUpdate {
        item_id: "alice".to_string(),
        relationship: RelationshipRef::Name("owner".to_string()),
        membership: false,
    }));
    assert_eq!(board.item("alice").unwrap().value, None);
}

#[test]
fn test_button_update_restyles_the_item() {
    let mut board = board();
    assert!(board.update_button("bob", 3));
    let bob = board.item("bob").unwrap();
    assert_eq!(bob.button_class, "btn-danger");
    assert_eq!(bob.image, Some("/media/images/24x24/resp+3px.png"));
    assert_eq!(bob.hidden_buttons, BTreeSet::from(["rel_3".to_string()]));
    assert_eq!(bob.value, Some(Relationship::Resp));

    assert!(board.update_button("bob", 0));
    let bob = board.item("bob").unwrap();
    assert_eq!(bob.button_class, "btn-default");
    assert_eq!(bob.image, None);
}

#[test]
fn test_popover_pick_closes_the_popover() {
    let mut board = board();
    board.open_popover("alice");
    assert!(board.item("alice").unwrap().popover_open);

    board.open_popover("bob");
    assert!(!board.item("alice").unwrap().popover_open);
    assert!(board.item("bob").unwrap().popover_open);

    assert!(board.pick("bob", "guest"));
    let bob = board.item("bob").unwrap();
    assert!(!bob.popover_open);
    assert_eq!(bob.input_value(Relationship::Guest, ItemKind::User), Some("bob"));

    assert!(!board.pick("bob", "owner"));
    board.close_popover("bob");
    assert_eq!(board.items().filter(|item| item.popover_open).count(), 0);
}

#[test]
fn test_popover_pick_restyles_title_and_button() {
    let mut board = board();
    board.open_popover("bob");
    assert!(board.pick("bob", "resp"));

    let bob = board.item("bob").unwrap();
    assert!(!bob.popover_open);
    assert_eq!(bob.value, Some(Relationship::Resp));
    assert_eq!(bob.title_class.as_deref(), Some("resp_bkg"));
    assert_eq!(bob.button_class, "btn-danger");
    assert_eq!(bob.image, Some("/media/images/24x24/resp+3px.png"));
    assert_eq!(bob.input_value(Relationship::Resp, ItemKind::User), Some("bob"));
    assert_eq!(bob.hidden_buttons, BTreeSet::from(["rel_3".to_string()]));

    // The other item is untouched.
    let alice = board.item("alice").unwrap();
    assert_eq!(alice.title_class, None);
    assert_eq!(alice.button_class, "btn-default");
}
