use super::*;
use crate::fixtures::demo_profile;

fn editor() -> ProfileEditor {
    ProfileEditor::new(demo_profile())
}

#[test]
fn editor_starts_in_view_mode() {
    let editor = editor();
    assert_eq!(editor.mode(), EditorMode::View);
    assert_eq!(editor.form(), &ProfileForm::from_profile(&demo_profile()));
}

#[test]
fn cancel_restores_original_email() {
    let mut editor = editor();
    editor.begin_edit();
    editor.set_field(ProfileField::Email, "someone@else.com");
    assert_eq!(editor.form().email, "someone@else.com");

    editor.cancel();
    assert_eq!(editor.mode(), EditorMode::View);
    assert_eq!(editor.profile().email, "john.doe@example.com");
    assert_eq!(editor.form().email, "john.doe@example.com");
}

#[test]
fn save_returns_edits_without_applying_them() {
    let mut editor = editor();
    editor.begin_edit();
    editor.set_field(ProfileField::Bio, "New bio");
    editor.set_field(ProfileField::Location, "Boston, MA");

    let edits = editor.save();
    assert_eq!(edits.bio, "New bio");
    assert_eq!(edits.location, "Boston, MA");
    assert_eq!(editor.mode(), EditorMode::View);
    assert_eq!(editor.profile(), &demo_profile());

    editor.begin_edit();
    assert_eq!(editor.form().bio, demo_profile().bio);
}

#[test]
fn toggle_enters_and_leaves_edit_mode() {
    let mut editor = editor();
    editor.toggle_edit();
    assert!(editor.is_editing());
    editor.set_field(ProfileField::Phone, "000");
    editor.toggle_edit();
    assert!(!editor.is_editing());
    assert_eq!(editor.form().phone, "+1 (555) 123-4567");
}

#[test]
fn set_field_outside_edit_mode_is_ignored() {
    let mut editor = editor();
    editor.set_field(ProfileField::FirstName, "Jane");
    assert_eq!(editor.form().first_name, "John");
}

#[test]
fn form_get_set_by_field() {
    let mut form = ProfileForm::default();
    form.set(ProfileField::LastName, "Smith");
    assert_eq!(form.get(ProfileField::LastName), "Smith");
    assert_eq!(form.get(ProfileField::FirstName), "");
}

#[test]
fn profile_display_helpers() {
    let profile = demo_profile();
    assert_eq!(profile.full_name(), "John Doe");
    assert_eq!(profile.initials(), "JD");
    assert_eq!(profile.member_since(), "January 2024");
}

#[test]
fn profile_tab_default_and_labels() {
    assert_eq!(ProfileTab::default(), ProfileTab::Profile);
    let labels: Vec<_> = ProfileTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Profile", "Activity", "Settings"]);
}
