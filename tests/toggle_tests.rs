use wmilist::state::toggle::{ToggleConfig, ToggleControl};

#[test]
fn test_initial_render_matches_input_state() {
    let off = ToggleControl::new(ToggleConfig::default(), false);
    assert!(!off.is_checked());
    assert_eq!(off.view().text, "OFF");
    assert_eq!(off.view().text_class, "jquery_checkbox_off");
    assert_eq!(
        off.view().background,
        "url('/media/images/jquery_checkbox/off.png')"
    );

    let on = ToggleControl::new(ToggleConfig::default(), true);
    assert_eq!(on.view().text, "ON");
    assert_eq!(on.view().text_class, "jquery_checkbox_on");
}

#[test]
fn test_click_flips_the_backing_input() {
    let mut control = ToggleControl::new(ToggleConfig::default(), false);
    assert!(control.click());
    assert_eq!(control.view().text, "ON");
    assert!(!control.click());
    assert_eq!(control.view().text, "OFF");
}

#[test]
fn test_programmatic_change_rerenders() {
    let mut control = ToggleControl::new(ToggleConfig::default(), false);
    control.set_checked(true);
    assert!(control.is_checked());
    assert_eq!(
        control.view().background,
        "url('/media/images/jquery_checkbox/on.png')"
    );

    // Same value again keeps the same view.
    let before = control.view().clone();
    control.set_checked(true);
    assert_eq!(control.view(), &before);
}

#[test]
fn test_custom_images_and_texts() {
    let config = ToggleConfig {
        on_image: "/img/yes.png".to_string(),
        off_image: "/img/no.png".to_string(),
        on_text: "Oui".to_string(),
        off_text: "Non".to_string(),
    };
    let mut control = ToggleControl::new(config, true);
    assert_eq!(control.view().text, "Oui");
    assert_eq!(control.view().background, "url('/img/yes.png')");
    control.click();
    assert_eq!(control.view().text, "Non");
}
