use crate::support::{wrapped_twice, NotFound};
use rail_result::Outcome;

#[test]
fn display_renders_success() {
    assert_eq!(Outcome::Ok(5).to_string(), "Ok(5)");
    assert_eq!(format!("{}", Outcome::Ok("hi")), "Ok(hi)");
}

#[test]
fn display_renders_failure_message() {
    let failed: Outcome<i32> = Outcome::from_err(NotFound { key: "k" });
    assert_eq!(failed.to_string(), "Err(key not found: k)");

    let from_value: Outcome<i32> = Outcome::from_val("boom");
    assert_eq!(from_value.to_string(), "Err(boom)");
}

#[test]
fn alternate_display_renders_the_chain() {
    let failed: Outcome<i32> = Outcome::from_err(wrapped_twice(NotFound { key: "k" }));
    assert_eq!(failed.to_string(), "Err(reading manifest)");
    assert_eq!(format!("{failed:#}"), "Err(reading manifest: opening file: key not found: k)");
}

#[test]
fn debug_names_the_variant() {
    assert_eq!(format!("{:?}", Outcome::Ok(1)), "Ok(1)");
    let failed: Outcome<i32> = Outcome::from_err(NotFound { key: "d" });
    assert!(format!("{failed:?}").starts_with("Err(NotFound"));
}
