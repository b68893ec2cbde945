use crate::support::NotFound;
use rail_result::{ErrVal, Outcome};

#[test]
fn err_val_is_none_on_success() {
    assert!(Outcome::Ok(1).err_val().is_none());
    assert!(Outcome::Ok("text").downcast_err_val::<&str>().is_none());
}

#[test]
fn err_val_returns_the_original_payload() {
    let failed: Outcome<()> = Outcome::from_val(vec!["a", "b"]);
    match failed.err_val() {
        Some(ErrVal::Payload(value)) => {
            assert_eq!(value.downcast_ref::<Vec<&str>>(), Some(&vec!["a", "b"]));
        }
        other => panic!("expected a payload, got {other:?}"),
    }
    assert_eq!(failed.downcast_err_val::<Vec<&str>>().map(Vec::len), Some(2));
}

#[test]
fn err_val_returns_the_error_for_carried_errors() {
    let failed: Outcome<()> = Outcome::from_err(NotFound { key: "carried" });
    let view = failed.err_val().expect("failure has a value");
    assert!(!view.is_payload());
    assert_eq!(view.downcast_error::<NotFound>(), Some(&NotFound { key: "carried" }));
    assert!(view.downcast_payload::<NotFound>().is_none());
    assert_eq!(view.as_error().map(|e| e.to_string()), Some("key not found: carried".into()));
}

#[test]
fn err_val_for_string_payload() {
    let failed: Outcome<i32> = Outcome::from_val(String::from("boom"));
    let view = failed.err_val().unwrap();
    assert!(view.is_payload());
    assert!(view.as_error().is_none());
    assert_eq!(view.downcast_payload::<String>().map(String::as_str), Some("boom"));
    assert!(view.downcast_error::<NotFound>().is_none());
}
