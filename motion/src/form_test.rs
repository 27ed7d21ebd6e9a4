use super::*;

fn filled() -> ContactFields {
    ContactFields::new("Ada", "ada@example.com", "Hello there")
}

struct Instant(bool);

impl Submitter for Instant {
    async fn submit(&self, _fields: &ContactFields) -> Result<(), SubmitError> {
        if self.0 { Ok(()) } else { Err(SubmitError::Unreachable) }
    }
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_examples() {
    assert!(is_valid_email("a@b.c"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email(""));
}

#[test]
fn email_requires_single_at() {
    assert!(!is_valid_email("a@b@c.d"));
    assert!(!is_valid_email("@b.c"));
    assert!(!is_valid_email("abc.d"));
}

#[test]
fn email_dot_needs_both_sides() {
    assert!(!is_valid_email("a@.c"));
    assert!(!is_valid_email("a@b."));
    assert!(is_valid_email("a@b.c.d"));
    assert!(is_valid_email("first.last@sub.example.org"));
}

#[test]
fn email_rejects_any_whitespace() {
    assert!(!is_valid_email("a@b.c\t"));
    assert!(!is_valid_email("a@b .c"));
}

// =============================================================
// Field validation
// =============================================================

#[test]
fn complete_fields_validate() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn missing_fields_are_reported_in_order() {
    let mut fields = filled();
    fields.message.clear();
    assert_eq!(fields.validate(), Err(ValidationError::MissingField(Field::Message)));
    fields.name = "   ".to_owned();
    assert_eq!(fields.validate(), Err(ValidationError::MissingField(Field::Name)));
}

#[test]
fn bad_email_is_reported_after_presence() {
    let fields = ContactFields::new("Ada", "ada@example", "Hi");
    assert_eq!(fields.validate(), Err(ValidationError::InvalidEmail));
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email");
}

#[test]
fn surrounding_whitespace_in_email_is_tolerated() {
    let fields = ContactFields::new("Ada", " ada@example.com ", "Hi");
    assert_eq!(fields.validate(), Ok(()));
}

// =============================================================
// ContactFlow
// =============================================================

#[test]
fn empty_name_is_rejected_without_state_change() {
    let mut flow = ContactFlow::new();
    let mut fields = filled();
    fields.name.clear();
    let err = flow.begin(fields).expect_err("empty name must be rejected");
    assert_eq!(err.to_string(), "Please fill in all fields");
    assert_eq!(flow.phase(), SubmitPhase::Idle);
    assert!(flow.in_flight().is_none());
}

#[test]
fn valid_submit_enters_sending() {
    let mut flow = ContactFlow::new();
    flow.begin(filled()).expect("valid form should start sending");
    assert!(flow.is_sending());
    assert_eq!(flow.in_flight(), Some(&filled()));
}

#[test]
fn second_submit_while_sending_is_busy() {
    let mut flow = ContactFlow::new();
    flow.begin(filled()).expect("first submit");
    assert_eq!(flow.begin(filled()), Err(ValidationError::Busy));
    assert!(flow.is_sending());
}

#[test]
fn successful_delivery_resets_form() {
    let mut flow = ContactFlow::new();
    flow.begin(filled()).expect("valid");
    let result = futures::executor::block_on(Instant(true).submit(&filled()));
    let done = flow.finish(result);
    assert_eq!(done.kind, NoticeKind::Success);
    assert_eq!(done.message, SENT_MESSAGE);
    assert!(done.reset);
    assert_eq!(flow.phase(), SubmitPhase::Idle);
}

#[test]
fn failed_delivery_keeps_fields() {
    let mut flow = ContactFlow::new();
    flow.begin(filled()).expect("valid");
    let result = futures::executor::block_on(Instant(false).submit(&filled()));
    let done = flow.finish(result);
    assert_eq!(done.kind, NoticeKind::Error);
    assert!(!done.reset);
    assert!(!flow.is_sending());
}
