use super::*;

fn filled() -> ContactFields {
    ContactFields::new("Ada", "ada@example.com", "Hello")
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_page_starts_idle_with_given_theme() {
    let page = PageState::new(Theme::Light);
    assert_eq!(page.theme, Theme::Light);
    assert!(!page.menu.is_open());
    assert_eq!(page.filter, ProjectFilter::All);
    assert!(page.notices.is_empty());
    assert!(page.revealed.is_empty());
    assert!(!page.contact.is_sending());
}

// =============================================================
// Contact end-to-end
// =============================================================

#[test]
fn empty_name_posts_error_notice_and_stays_idle() {
    let mut page = PageState::default();
    let mut fields = filled();
    fields.name.clear();

    let err = page.submit_contact(fields).expect_err("empty name");
    assert_eq!(err, ValidationError::MissingField(motion::form::Field::Name));
    assert!(!page.contact.is_sending());
    let notices = page.notices.items();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].text, "Please fill in all fields");
    assert_eq!(notices[0].kind, NoticeKind::Error);
}

#[test]
fn invalid_email_posts_email_notice() {
    let mut page = PageState::default();
    let fields = ContactFields::new("Ada", "ada@nowhere", "Hello");
    assert!(page.submit_contact(fields).is_err());
    assert_eq!(page.notices.items()[0].text, "Please enter a valid email");
}

#[test]
fn valid_form_sends_then_succeeds_with_reset() {
    let mut page = PageState::default();
    page.submit_contact(filled()).expect("valid form");
    assert!(page.contact.is_sending());
    assert!(page.notices.is_empty());

    let done = page.complete_contact(Ok(()));
    assert!(done.reset);
    assert!(!page.contact.is_sending());
    let notice = &page.notices.items()[0];
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.text, motion::form::SENT_MESSAGE);
}

#[test]
fn repeat_submit_while_sending_posts_nothing() {
    let mut page = PageState::default();
    page.submit_contact(filled()).expect("first");
    assert_eq!(page.submit_contact(filled()), Err(ValidationError::Busy));
    assert!(page.notices.is_empty());
}

#[test]
fn failed_delivery_posts_error_and_keeps_fields() {
    let mut page = PageState::default();
    page.submit_contact(filled()).expect("valid");
    let done = page.complete_contact(Err(SubmitError::Unreachable));
    assert!(!done.reset);
    assert_eq!(page.notices.items()[0].kind, NoticeKind::Error);
}

// =============================================================
// Section extents
// =============================================================

#[test]
fn record_extents_replaces_previous_pass() {
    let mut page = PageState::default();
    page.record_extents([
        ("hero".to_owned(), SectionExtent::from_rect(-200.0, 400.0, 800.0)),
        ("about".to_owned(), SectionExtent::from_rect(400.0, 1200.0, 800.0)),
        ("contact".to_owned(), SectionExtent::from_rect(2000.0, 2600.0, 800.0)),
    ]);
    assert_eq!(page.sections_in_view().collect::<Vec<_>>(), vec!["about", "hero"]);

    page.record_extents([("contact".to_owned(), SectionExtent::from_rect(0.0, 600.0, 800.0))]);
    assert_eq!(page.extents.len(), 1);
    assert_eq!(page.sections_in_view().collect::<Vec<_>>(), vec!["contact"]);
}
