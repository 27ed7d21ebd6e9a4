use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut q = NoticeQueue::new();
    let a = q.push("one", NoticeKind::Success);
    let b = q.push("two", NoticeKind::Error);
    assert!(a < b);
    assert_eq!(q.items().len(), 2);
    assert_eq!(q.items()[0].text, "one");
    assert_eq!(q.items()[1].phase, NoticePhase::Shown);
}

#[test]
fn lifecycle_shown_leaving_removed() {
    let mut q = NoticeQueue::new();
    let id = q.push("hi", NoticeKind::Success);
    assert!(q.begin_exit(id));
    assert_eq!(q.items()[0].phase, NoticePhase::Leaving);
    assert!(q.remove(id));
    assert!(q.is_empty());
}

#[test]
fn unknown_ids_are_ignored() {
    let mut q = NoticeQueue::new();
    let id = q.push("hi", NoticeKind::Error);
    assert!(q.remove(id));
    assert!(!q.begin_exit(id));
    assert!(!q.remove(id));
}

#[test]
fn kinds_have_distinct_presentation() {
    assert_ne!(NoticeKind::Success.accent(), NoticeKind::Error.accent());
    assert_eq!(NoticeKind::Error.class(), "notice notice--error");
}
