use crate::support::{wrapped_twice, Layer, NotFound, Refused, Unrelated};
use rail_result::{BoxError, Outcome, ValueError};
use std::io;

#[test]
fn ok_and_err_are_complementary() {
    let ok: Outcome<i32> = Outcome::Ok(1);
    assert!(ok.is_ok());
    assert!(!ok.is_err());

    let err: Outcome<i32> = Outcome::from_err(NotFound { key: "a" });
    assert!(err.is_err());
    assert!(!err.is_ok());
}

#[test]
fn wrap_without_error_is_success() {
    let outcome = Outcome::wrap(42, None::<io::Error>);
    assert!(outcome.is_ok());
    assert_eq!(outcome.unwrap(), 42);
}

#[test]
fn wrap_with_error_is_failure_and_drops_value() {
    let outcome = Outcome::wrap(0, Some(NotFound { key: "user" }));
    assert!(outcome.is_err());
    assert!(outcome.contains_err(&NotFound { key: "user" }));
    assert!(outcome.ok().is_none());
}

#[test]
fn from_err_keeps_the_concrete_error() {
    let outcome: Outcome<()> = Outcome::from_err(NotFound { key: "k" });
    let err = outcome.err().unwrap();
    assert_eq!(err.downcast_ref::<NotFound>(), Some(&NotFound { key: "k" }));
    assert!(err.downcast_ref::<ValueError>().is_none());
}

#[test]
fn from_val_wraps_non_error_payloads() {
    let outcome: Outcome<()> = Outcome::from_val(404_u16);
    let err = outcome.err().unwrap();
    assert!(err.is::<ValueError>());
    assert_eq!(err.to_string(), "404");
}

#[test]
fn from_val_stores_boxed_errors_directly() {
    let boxed: BoxError = Box::new(NotFound { key: "direct" });
    let outcome: Outcome<()> = Outcome::from_val(boxed);
    let err = outcome.err().unwrap();
    assert!(err.is::<NotFound>());
    assert!(outcome.contains_err(&NotFound { key: "direct" }));
}

#[test]
fn from_val_wraps_concrete_errors_as_payloads() {
    let outcome: Outcome<()> = Outcome::from_val(NotFound { key: "typed" });
    let err = outcome.err().unwrap();
    assert!(err.is::<ValueError>());
    assert_eq!(err.to_string(), r#"NotFound { key: "typed" }"#);
    assert!(!outcome.contains_err(&NotFound { key: "typed" }));
    assert!(outcome.err_val().is_some_and(|v| v.is_payload()));
    assert_eq!(outcome.downcast_err_val::<NotFound>(), Some(&NotFound { key: "typed" }));
}

#[test]
fn from_result_and_into_result() {
    let parsed: Outcome<i32> = "12".parse::<i32>().into();
    assert_eq!(parsed.into_result().unwrap(), 12);

    let failed: Outcome<i32> = Outcome::from_result("x".parse::<i32>());
    let back: Result<i32, BoxError> = failed.into();
    assert!(back.is_err());
}

#[test]
fn is_ok_and_skips_predicate_on_failure() {
    let mut called = false;
    let failed: Outcome<i32> = Outcome::from_err("nope");
    assert!(!failed.is_ok_and(|_| {
        called = true;
        true
    }));
    assert!(!called, "predicate must not run on a failure");

    assert!(Outcome::Ok(10).is_ok_and(|x| *x == 10));
    assert!(!Outcome::Ok(10).is_ok_and(|x| *x == 11));
}

#[test]
fn is_err_and_skips_predicate_on_success() {
    let mut called = false;
    assert!(!Outcome::Ok(1).is_err_and(|_| {
        called = true;
        true
    }));
    assert!(!called, "predicate must not run on a success");

    let failed: Outcome<i32> = Outcome::from_err(NotFound { key: "p" });
    assert!(failed.is_err_and(|e| e.is::<NotFound>()));
    assert!(!failed.is_err_and(|e| e.is::<io::Error>()));
}

#[test]
fn accessors_never_panic() {
    let ok: Outcome<&str> = Outcome::Ok("v");
    assert_eq!(ok.ok(), Some(&"v"));
    assert!(ok.err().is_none());
    assert_eq!(ok.into_ok(), Some("v"));

    let failed: Outcome<&str> = Outcome::from_err("bad");
    assert!(failed.ok().is_none());
    assert_eq!(failed.err().map(|e| e.to_string()), Some("bad".to_string()));
    assert_eq!(failed.into_err().unwrap().to_string(), "bad");
}

#[test]
fn as_result_borrows_both_sides() {
    let ok: Outcome<i32> = Outcome::Ok(2);
    assert_eq!(ok.as_result().ok(), Some(&2));

    let failed: Outcome<i32> = Outcome::from_err("gone");
    assert_eq!(failed.as_result().unwrap_err().to_string(), "gone");
}

#[test]
fn contains_compares_success_value() {
    assert!(Outcome::Ok(5).contains(&5));
    assert!(!Outcome::Ok(5).contains(&6));
    assert!(!Outcome::<i32>::from_err("e").contains(&5));
    assert!(Outcome::Ok(String::from("abc")).contains(&"abc"));
}

#[test]
fn contains_err_matches_the_stored_error() {
    let outcome: Outcome<()> = Outcome::from_err(NotFound { key: "id" });
    assert!(outcome.contains_err(&NotFound { key: "id" }));
    assert!(!outcome.contains_err(&NotFound { key: "other" }));
}

#[test]
fn contains_err_searches_two_levels_deep() {
    let outcome: Outcome<()> = Outcome::from_err(wrapped_twice(NotFound { key: "deep" }));
    assert!(outcome.contains_err(&NotFound { key: "deep" }));
    assert!(!outcome.contains_err(&NotFound { key: "shallow" }));
}

#[test]
fn contains_err_is_false_for_unrelated_errors_and_successes() {
    let outcome: Outcome<()> = Outcome::from_err(Layer::new("outer", "inner text"));
    assert!(!outcome.contains_err(&NotFound { key: "inner text" }));
    assert!(!Outcome::Ok(()).contains_err(&NotFound { key: "x" }));
}

#[test]
fn contains_err_rejects_a_different_zero_sized_error() {
    let outcome: Outcome<()> = Outcome::from_err(Refused);
    assert!(outcome.contains_err(&Refused));
    assert!(!outcome.contains_err(&Unrelated));

    let wrapped: Outcome<()> = Outcome::from_err(Layer::new("dialing", Refused));
    assert!(wrapped.contains_err(&Refused));
    assert!(!wrapped.contains_err(&Unrelated));
}

#[test]
fn contains_err_by_runs_the_comparator_over_each_link() {
    let outcome: Outcome<()> = Outcome::from_err(wrapped_twice(NotFound { key: "z" }));
    let mut seen = Vec::new();
    let found = outcome.contains_err_by(|link| {
        seen.push(link.to_string());
        false
    });
    assert!(!found);
    assert_eq!(seen, vec!["reading manifest", "opening file", "key not found: z"]);

    assert!(outcome.contains_err_by(|link| link.to_string() == "opening file"));
}
