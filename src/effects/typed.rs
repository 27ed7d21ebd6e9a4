//! Hero title typing effect.

use motion::animate::Typewriter;

use crate::state::page::PageHandle;
use crate::util::dom::{self, DomError};
use crate::util::ticker;

pub fn install(page: PageHandle) -> Result<(), DomError> {
    let cfg = page.config();
    let lines = dom::query_all(".title-line")?;
    if lines.is_empty() {
        return Ok(());
    }
    let texts: Vec<String> = lines.iter().map(|l| l.text_content().unwrap_or_default()).collect();
    for line in &lines {
        line.set_text_content(Some(""));
    }

    let writer = Typewriter::new(texts.iter().map(String::as_str), cfg.typed_char_ms, cfg.typed_line_stagger_ms);
    let mut shown = vec![0; lines.len()];
    ticker::drive(writer, cfg.typed_char_ms, move |writer| {
        for ((el, line), last) in lines.iter().zip(writer.lines()).zip(shown.iter_mut()) {
            if line.shown() != *last {
                *last = line.shown();
                el.set_text_content(Some(&line.text()));
            }
        }
    });
    Ok(())
}
