use futures::executor::block_on;
use motion::form::ContactFlow;

use super::*;

#[test]
fn simulated_submit_succeeds() {
    let fields = ContactFields::new("Ada", "ada@example.com", "Hi");
    assert!(block_on(SimulatedSubmitter::new(1500).submit(&fields)).is_ok());
}

#[test]
fn simulated_submit_settles_contact_flow() {
    let fields = ContactFields::new("Ada", "ada@example.com", "Hi");
    let mut flow = ContactFlow::new();
    flow.begin(fields.clone()).expect("valid");
    let done = flow.finish(block_on(SimulatedSubmitter::new(0).submit(&fields)));
    assert!(done.reset);
    assert!(!flow.is_sending());
}
