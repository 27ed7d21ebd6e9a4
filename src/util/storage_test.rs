#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn local_store_is_unavailable_outside_browser() {
    assert!(matches!(LocalStore.load("darkMode"), Err(StoreError::Unavailable)));
    assert!(matches!(LocalStore.save("darkMode", "true"), Err(StoreError::Unavailable)));
}
