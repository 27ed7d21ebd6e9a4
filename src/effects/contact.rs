//! Contact form submission.
//!
//! Validation failures never reach the DOM beyond their notice. A valid
//! message disables the submit button (label "Sending...") until the
//! submitter settles, then the form is reset on success and the button
//! restored either way.

use motion::form::{ContactFields, SENDING_LABEL, Submitter};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::state::page::PageHandle;
use crate::util::dom::{self, DomError};
use crate::util::submit::SimulatedSubmitter;

pub fn install(page: PageHandle) -> Result<(), DomError> {
    let form = dom::by_id_as::<HtmlFormElement>("contactForm")?;
    let submitter = SimulatedSubmitter::new(page.config().submit_delay_ms);
    let target = form.clone();
    dom::on(&target, "submit", move |event: Event| {
        event.prevent_default();
        let fields = match read_fields() {
            Ok(fields) => fields,
            Err(err) => {
                log::warn!("contact form unreadable: {err}");
                return;
            }
        };
        if !matches!(page.update(|p| p.submit_contact(fields.clone())), Some(Ok(()))) {
            return;
        }

        let button = submit_button(&form);
        let label = button.as_ref().and_then(|b| b.text_content());
        if let Some(button) = &button {
            button.set_disabled(true);
            button.set_text_content(Some(SENDING_LABEL));
        }
        let form = form.clone();
        leptos::task::spawn_local(async move {
            let result = submitter.submit(&fields).await;
            let Some(done) = page.update(|p| p.complete_contact(result)) else {
                return;
            };
            if done.reset {
                form.reset();
            }
            if let Some(button) = button {
                button.set_disabled(false);
                button.set_text_content(label.as_deref());
            }
        });
    })
}

fn read_fields() -> Result<ContactFields, DomError> {
    Ok(ContactFields { name: field_value("name")?, email: field_value("email")?, message: field_value("message")? })
}

/// Value of an `<input>` or `<textarea>`.
fn field_value(id: &str) -> Result<String, DomError> {
    match dom::by_id(id)?.dyn_into::<HtmlInputElement>() {
        Ok(input) => Ok(input.value()),
        Err(el) => el
            .dyn_into::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .map_err(|_| DomError::WrongType(format!("#{id}"))),
    }
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    form.query_selector("button[type=\"submit\"]").ok().flatten()?.dyn_into().ok()
}
