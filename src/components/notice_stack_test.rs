use super::*;

#[test]
fn accents_follow_kind() {
    assert!(notice_style(NoticeKind::Success, NoticePhase::Shown).contains("background: #00d4ff"));
    assert!(notice_style(NoticeKind::Error, NoticePhase::Shown).contains("background: #ff6b9d"));
}

#[test]
fn leaving_notice_plays_exit_animation() {
    assert!(notice_style(NoticeKind::Success, NoticePhase::Shown).contains("slideInRight"));
    let leaving = notice_style(NoticeKind::Success, NoticePhase::Leaving);
    assert!(leaving.contains("slideInLeft 0.3s ease forwards"));
}
