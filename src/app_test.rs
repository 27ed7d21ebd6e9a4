use super::*;

fn ok(_: ()) -> Result<(), DomError> {
    Ok(())
}

fn no_navbar(_: ()) -> Result<(), DomError> {
    Err(DomError::Missing("#navbar".to_owned()))
}

fn no_hamburger(_: ()) -> Result<(), DomError> {
    Err(DomError::Missing("#hamburger".to_owned()))
}

// =============================================================
// Effect install isolation
// =============================================================

#[test]
fn all_steps_installed_reports_nothing_disabled() {
    let steps: [Step<()>; 2] = [("scroll", ok), ("anchors", ok)];
    assert!(run_steps((), &steps).is_empty());
}

#[test]
fn missing_navbar_disables_only_sticky() {
    use std::cell::Cell;

    thread_local! {
        static SCROLL_RAN: Cell<bool> = const { Cell::new(false) };
    }
    fn scroll(_: ()) -> Result<(), DomError> {
        SCROLL_RAN.with(|ran| ran.set(true));
        Ok(())
    }

    let steps: [Step<()>; 3] = [("sticky", no_navbar), ("scroll", scroll), ("sections", ok)];
    assert_eq!(run_steps((), &steps), vec!["sticky"]);
    assert!(SCROLL_RAN.with(Cell::get));
}

#[test]
fn missing_hamburger_still_runs_later_steps() {
    let steps: [Step<()>; 3] = [("menu", no_hamburger), ("anchors", ok), ("sticky", no_navbar)];
    assert_eq!(run_steps((), &steps), vec!["menu", "sticky"]);
}
