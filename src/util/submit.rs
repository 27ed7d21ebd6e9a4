//! Stand-in delivery for the contact form.
//!
//! The page has no backend; [`SimulatedSubmitter`] waits the configured
//! delay and reports success so the sending state is visible.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use motion::form::{ContactFields, SubmitError, Submitter};

#[derive(Clone, Copy, Debug)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError> {
        log::debug!("simulating delivery for {} <{}>", fields.name.trim(), fields.email.trim());
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(self.delay_ms))).await;
        Ok(())
    }
}
