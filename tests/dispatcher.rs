//! First-match dispatch over callables and registered controllers.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use route_dispatch::dispatch::{Args, Dispatcher, Handler, Packed, Param};
use serde_json::{json, Value};

fn dispatcher(path: &str) -> Dispatcher {
    Dispatcher::new(path).with_classes(common::registry())
}

#[test]
fn test_callable_route() {
    let mut d = dispatcher("/");
    d.set("/", Handler::callable(|| 100));
    d.set("/any", Handler::callable(|| 200));

    assert!(d.run());
    assert_eq!(d.result(), Some(&json!(100)));
}

#[test]
fn test_has_and_get() {
    let mut d = dispatcher("/");
    d.set("/", Handler::class_method("SampleController", "index"));

    assert!(d.has("/"));
    assert!(!d.has("/missing"));
    assert_eq!(
        d.get("/").and_then(Handler::target),
        Some(("SampleController", "index"))
    );
    assert!(d.get("/missing").is_none());
}

#[test]
fn test_class_methods() {
    for (target, expected) in [
        ("SampleController::static_index", "A"),
        ("SampleController::index", "B"),
        (r"\MyNameSpace\ExampleTestClass::static_index", "Test-A"),
        (r"MyNameSpace\ExampleTestClass::index", "Test-B"),
    ] {
        let mut d = dispatcher("/");
        d.set("/", Handler::parse_target(target).expect("valid target"));
        assert!(d.run(), "{} should dispatch", target);
        assert_eq!(d.result(), Some(&json!(expected)), "{}", target);
    }
}

#[test]
fn test_missing_method_fails() {
    for method in ["non_index", "non_static_index"] {
        let mut d = dispatcher("/");
        d.set("/", Handler::class_method("SampleController", method));
        assert!(!d.run());
        assert_eq!(d.result(), None);
    }
}

#[test]
fn test_missing_class_fails() {
    let mut d = dispatcher("/");
    d.set("/", Handler::class_method("NoSuchClass", "index"));
    assert!(!d.run());
    assert_eq!(d.result(), None);
}

#[test]
fn test_unit_return_is_null() {
    let mut d = dispatcher("/");
    d.set("/", Handler::class_method("SampleController", "static_method"));
    assert!(d.run());
    assert_eq!(d.result(), Some(&Value::Null));
}

#[test]
fn test_spread_arities() {
    let cases = [
        ("/@p1", "param1", "/ali", "ali"),
        ("/@p1/@p2", "param2", "/ali/reza", "reza"),
        ("/@p1/@p2/@p3", "param3", "/ali/reza/sara", "sara"),
        ("/@p1/@p2/@p3/@p4", "param4", "/a/b/c/d", "d"),
        ("/@p1/@p2/@p3/@p4/@p5", "param5", "/a/b/c/d/e", "e"),
    ];

    for (pattern, method, path, expected) in cases {
        let mut d = dispatcher(path);
        d.set(pattern, Handler::class_method("SampleController", method));
        assert!(d.run(), "{} should dispatch", method);
        assert_eq!(d.result(), Some(&json!(expected)), "{}", method);
    }
}

#[test]
fn test_six_values_are_packed() {
    let mut d = dispatcher("/a/b/c/d/e/f");
    d.set(
        "/@p1/@p2/@p3/@p4/@p5/@p6",
        Handler::class_method("SampleController", "param6"),
    );
    assert!(d.run());
    assert_eq!(d.result(), Some(&json!("f")));
}

#[test]
fn test_packed_callable() {
    let mut d = dispatcher(&common::segments(7));
    d.set(
        "/@a/@b/@c/@d/@e/@f/@g",
        Handler::callable(|p: Packed| p.len()),
    );
    assert!(d.run());
    assert_eq!(d.result(), Some(&json!(7)));
}

#[test]
fn test_arity_mismatch_fails() {
    let mut d = dispatcher("/only");
    d.set("/@one", Handler::callable(|_: Param, b: Param| b));
    assert!(!d.run());
    assert_eq!(d.result(), None);
}

#[test]
fn test_trailing_slash_paths() {
    let mut d = dispatcher("/ali/reza/");
    d.set(
        "/@name/@name2/@name3/",
        Handler::callable(|_: Param, _: Param, c: Param| c),
    );
    d.set("/@name/@name2/", Handler::callable(|a: Param, b: Param| (a, b)));

    assert!(d.run());
    assert_eq!(d.result(), Some(&json!(["ali", "reza"])));
}

#[test]
fn test_case_sensitive_dispatch() {
    let mut d = dispatcher("/A/b").case_sensitive(true);
    d.set("/a/@x", Handler::callable(|x: Param| x));
    assert!(!d.run());

    d.set_case_sensitive(false);
    assert!(d.run());
    assert_eq!(d.result(), Some(&json!("b")));
}

#[test]
fn test_first_match_wins() {
    let mut d = dispatcher("/post/42");
    d.set("/post/@id", Handler::callable(|id: Param| format!("first {}", id.unwrap_or_default())));
    d.set("*", Handler::callable(|| "fallback"));

    assert!(d.run());
    assert_eq!(d.result(), Some(&json!("first 42")));
}

#[test]
fn test_failing_first_match_does_not_fall_through() {
    let mut d = dispatcher("/post/42");
    d.set("/post/@id", Handler::class_method("NoSuchClass", "show"));
    d.set("*", Handler::callable(|| "fallback"));

    assert!(!d.run());
    assert_eq!(d.result(), None);
}

#[test]
fn test_failed_run_keeps_previous_result() {
    let mut d = dispatcher("/");
    d.set("/", Handler::callable(|| "kept"));
    assert!(d.run());

    d.set("/", Handler::class_method("NoSuchClass", "index"));
    assert!(!d.run());
    assert_eq!(d.result(), Some(&json!("kept")));
}

#[test]
fn test_reregistration_keeps_position() {
    let mut d = dispatcher("/x");
    d.set("/@any", Handler::callable(|| "first"));
    d.set("*", Handler::callable(|| "second"));
    d.set("/@any", Handler::callable(|| "replaced"));

    assert_eq!(d.routes().collect::<Vec<_>>(), vec!["/@any", "*"]);
    assert!(d.run());
    assert_eq!(d.result(), Some(&json!("replaced")));
}

#[test]
fn test_no_route_matches() {
    let mut d = dispatcher("/nothing/here");
    d.set("/", Handler::callable(|| 1));
    assert!(!d.run());
    assert_eq!(d.result(), None);

    let mut empty = dispatcher("/");
    assert!(!empty.run());
}

#[test]
fn test_wildcard_value_is_last_argument() {
    let mut d = dispatcher("/files/docs/2020/report.pdf");
    d.set(
        "/files/@kind/*",
        Handler::callable(|kind: Param, rest: Param| json!({ "kind": kind, "rest": rest })),
    );
    assert!(d.run());
    assert_eq!(
        d.result(),
        Some(&json!({ "kind": "docs", "rest": "2020/report.pdf" }))
    );
}

#[test]
fn test_callable_state_persists_across_runs() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&calls);

    let mut d = dispatcher("/hit/1");
    d.set(
        "/hit/@n",
        Handler::callable(move |args: Args| {
            seen.borrow_mut().extend(args.into_vec());
        }),
    );

    assert!(d.run());
    assert!(d.run());
    assert_eq!(
        *calls.borrow(),
        vec![Some("1".to_string()), Some("1".to_string())]
    );
}
