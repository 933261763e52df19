//! Shared controllers and helpers for integration tests.

#![allow(dead_code)]

use route_dispatch::dispatch::{
    invoke, Args, Controller, ControllerRegistry, HandlerError, Packed, Param,
};
use serde_json::Value;

/// Controller exercising every arity of the calling convention.
#[derive(Default)]
pub struct SampleController;

impl Controller for SampleController {
    fn call(&mut self, method: &str, args: Args) -> Option<Result<Value, HandlerError>> {
        let outcome = match method {
            "static_index" => invoke(|| "A", args),
            "index" => invoke(|| "B", args),
            "static_method" => invoke(|| (), args),
            "param1" => invoke(|a: Param| a, args),
            "param2" => invoke(|_: Param, b: Param| b, args),
            "param3" => invoke(|_: Param, _: Param, c: Param| c, args),
            "param4" => invoke(|_: Param, _: Param, _: Param, d: Param| d, args),
            "param5" => invoke(|_: Param, _: Param, _: Param, _: Param, e: Param| e, args),
            "param6" => invoke(|p: Packed| p.str(5).map(str::to_string), args),
            _ => return None,
        };
        Some(outcome)
    }
}

/// Controller registered under a namespaced name.
#[derive(Default)]
pub struct NamespacedController;

impl Controller for NamespacedController {
    fn call(&mut self, method: &str, args: Args) -> Option<Result<Value, HandlerError>> {
        match method {
            "static_index" => Some(invoke(|| "Test-A", args)),
            "index" => Some(invoke(|| "Test-B", args)),
            _ => None,
        }
    }
}

/// Registry holding both sample controllers.
pub fn registry() -> ControllerRegistry {
    let mut classes = ControllerRegistry::new();
    classes
        .register::<SampleController>("SampleController")
        .register::<NamespacedController>(r"\MyNameSpace\ExampleTestClass");
    classes
}

/// Path with `n` segments: `/s0/s1/...`.
pub fn segments(n: usize) -> String {
    (0..n).map(|i| format!("/s{}", i)).collect()
}
