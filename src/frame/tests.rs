use super::*;

use pretty_assertions::assert_eq;

fn rendered(frame: &dyn Frame, with_functions: bool) -> String {
    let mut out = String::new();
    frame.render(&mut out, with_functions).unwrap();
    out
}

#[test]
fn capture_records_the_call_site() {
    let frame = CallerFrame::capture();
    assert_eq!(frame.file(), file!());
    assert_eq!(frame.line(), line!() - 2);
}

#[test]
fn renders_one_indented_location_line() {
    let frame = CallerFrame::capture();
    assert_eq!(
        rendered(&frame, false),
        format!("    {}:{}\n", frame.file(), frame.line())
    );
}

#[test]
fn unnamed_frame_ignores_the_functions_flag() {
    let frame = CallerFrame::capture();
    assert_eq!(rendered(&frame, true), rendered(&frame, false));
}

#[test]
fn named_frame_prints_the_function_first() {
    let frame = CallerFrame::named("index::save");
    assert_eq!(
        rendered(&frame, true),
        format!("    index::save\n    {}:{}\n", frame.file(), frame.line())
    );
    // Without the flag, the name is withheld.
    assert_eq!(
        rendered(&frame, false),
        format!("    {}:{}\n", frame.file(), frame.line())
    );
}
