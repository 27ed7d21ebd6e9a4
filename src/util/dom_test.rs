#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn missing_element_message_names_selector() {
    assert_eq!(DomError::Missing("#navbar".to_owned()).to_string(), "missing element `#navbar`");
    assert_eq!(DomError::WrongType("#email".to_owned()).to_string(), "element `#email` has an unexpected type");
}

#[test]
fn scroll_helpers_are_inert_outside_browser() {
    assert!(scroll_y().abs() < f64::EPSILON);
    assert!(viewport_height().abs() < f64::EPSILON);
    assert!(now_ms().abs() < f64::EPSILON);
    scroll_to(120.0);
}
