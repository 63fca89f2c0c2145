// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Object lifecycle specs
//!
//! Verify construction, naming, deletion, and the handle discipline over
//! a real channel.

use tether_core::Value;

use crate::prelude::*;

#[test]
fn new_returns_fresh_handles_in_order() {
    let mut session = Session::open();
    assert_eq!(session.ok(&varr!["new", "queue"]), vec![Value::Integer(0)]);
    assert_eq!(session.ok(&varr!["new", "cache"]), vec![Value::Integer(1)]);
}

#[test]
fn get_name_defaults_to_type_and_handle() {
    let mut session = Session::open();
    session.ok(&varr!["new", "storage"]);
    assert_eq!(session.ok(&varr![0, "get_name"]), vec!["storage-0".into()]);
}

#[test]
fn a_config_name_overrides_the_default() {
    let mut session = Session::open();
    session.ok(&varr!["new", "queue", vobj! { "name" => "jobs" }]);
    assert_eq!(session.ok(&varr![0, "get_name"]), vec!["jobs".into()]);
}

#[test]
fn a_rejected_config_registers_nothing() {
    let mut session = Session::open();
    assert_eq!(
        session.fail(&varr!["new", "queue", vobj! { "name" => 7 }]),
        "queue: config key 'name' must be a string"
    );
    assert_eq!(session.ok(&varr!["new", "queue"]), vec![Value::Integer(0)]);
}

#[test]
fn del_unregisters_the_handle() {
    let mut session = Session::open();
    session.ok(&varr!["new", "queue"]);
    session.ok(&varr!["del", 0]);
    assert_eq!(session.fail(&varr![0, "len"]), "Object with id '0' does not exist");
}

#[test]
fn handles_are_never_recycled() {
    let mut session = Session::open();
    session.ok(&varr!["new", "queue"]);
    session.ok(&varr!["del", 0]);
    assert_eq!(session.ok(&varr!["new", "worker"]), vec![Value::Integer(1)]);
}

#[test]
fn call_routes_exactly_like_a_bare_handle() {
    let mut session = Session::open();
    session.ok(&varr!["new", "queue"]);
    assert_eq!(session.ok(&varr!["call", 0, "push", "job"]), vec![Value::Integer(1)]);
    assert_eq!(session.ok(&varr![0, "pop"]), vec!["job".into()]);
}

#[test]
fn methods_never_cross_object_types() {
    let mut session = Session::open();
    session.ok(&varr!["new", "cache"]);
    assert_eq!(session.fail(&varr![0, "submit", "job"]), "unknown command 'submit'");
}

#[test]
fn whatis_classifies_tokens() {
    let mut session = Session::open();
    session.ok(&varr!["new", "queue"]);
    assert_eq!(session.ok(&varr!["whatis", "new"]), vec!["command".into()]);
    assert_eq!(session.ok(&varr!["whatis", "queue"]), vec!["object-type".into()]);
    assert_eq!(session.ok(&varr!["whatis", "0"]), vec!["handle".into()]);
    assert_eq!(session.ok(&varr!["whatis", "123"]), vec!["integer".into()]);
    assert_eq!(session.ok(&varr!["whatis", "sideways"]), vec!["unknown".into()]);
}
