use super::*;
use crate::draft::{DraftField, DraftImage};

fn ready_form() -> CreateForm {
    let mut form = CreateForm::default();
    let draft = &mut form.draft;
    draft.set_field(DraftField::Title, "Desk Lamp").unwrap();
    draft.set_field(DraftField::Description, "Warm light").unwrap();
    draft.set_field(DraftField::Price, "25").unwrap();
    draft.set_field(DraftField::Category, "Home & Garden").unwrap();
    draft.set_field(DraftField::Condition, "Good").unwrap();
    draft.set_field(DraftField::Location, "Seattle, WA").unwrap();
    form
}

fn receipt() -> SubmitReceipt {
    SubmitReceipt { receipt_id: "r-1".to_owned() }
}

#[test]
fn form_starts_editing() {
    let form = CreateForm::default();
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.error(), None);
    assert!(!form.is_submitting());
}

#[test]
fn success_discards_draft() {
    let mut form = ready_form();
    form.draft
        .attach_images(vec![DraftImage { name: "lamp.jpg".to_owned(), preview_url: "blob:1".to_owned() }])
        .unwrap();

    let ticket = form.begin_submit().unwrap();
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert_eq!(ticket.listing.title, "Desk Lamp");

    let outcome = form.complete(&ticket, Ok(receipt()));
    assert_eq!(outcome, SubmitOutcome::Accepted(receipt()));
    assert_eq!(form.phase(), FormPhase::Submitted);
    assert_eq!(form.draft, DraftListing::default());
}

#[test]
fn failure_returns_to_editing_with_message() {
    let mut form = ready_form();
    let ticket = form.begin_submit().unwrap();
    let outcome = form.complete(&ticket, Err("connection reset".to_owned()));

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.error(), Some(SUBMIT_FAILED_MESSAGE));
    assert_eq!(form.draft.title, "Desk Lamp");
}

#[test]
fn retry_after_failure_clears_error() {
    let mut form = ready_form();
    let first = form.begin_submit().unwrap();
    form.complete(&first, Err("boom".to_owned()));

    let second = form.begin_submit().unwrap();
    assert_eq!(form.error(), None);
    assert_eq!(form.complete(&second, Ok(receipt())), SubmitOutcome::Accepted(receipt()));
}

#[test]
fn invalid_draft_stays_editing() {
    let mut form = CreateForm::default();
    let err = form.begin_submit().unwrap_err();
    assert_eq!(err, DraftError::MissingField(DraftField::Title));
    assert_eq!(form.phase(), FormPhase::Editing);
}

#[test]
fn double_submit_is_rejected() {
    let mut form = ready_form();
    let _ticket = form.begin_submit().unwrap();
    assert_eq!(form.begin_submit(), Err(DraftError::AlreadySubmitting));
}

#[test]
fn only_one_transition_per_ticket() {
    let mut form = ready_form();
    let ticket = form.begin_submit().unwrap();
    form.complete(&ticket, Err("boom".to_owned()));
    assert_eq!(form.complete(&ticket, Ok(receipt())), SubmitOutcome::Stale);
    assert_eq!(form.phase(), FormPhase::Editing);
}

#[test]
fn cancel_makes_late_completion_stale() {
    let mut form = ready_form();
    let ticket = form.begin_submit().unwrap();
    form.cancel_submit();
    assert_eq!(form.phase(), FormPhase::Editing);

    assert_eq!(form.complete(&ticket, Ok(receipt())), SubmitOutcome::Stale);
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.draft.title, "Desk Lamp");
}

#[test]
fn resubmit_after_cancel_ignores_old_ticket() {
    let mut form = ready_form();
    let old = form.begin_submit().unwrap();
    form.cancel_submit();
    let new = form.begin_submit().unwrap();

    assert_eq!(form.complete(&old, Err("late".to_owned())), SubmitOutcome::Stale);
    assert!(form.is_submitting());
    assert_eq!(form.complete(&new, Ok(receipt())), SubmitOutcome::Accepted(receipt()));
}

#[test]
fn cancel_while_editing_is_noop() {
    let mut form = ready_form();
    let before = form.clone();
    form.cancel_submit();
    assert_eq!(form, before);
}
