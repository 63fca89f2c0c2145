// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Automation object behavior specs
//!
//! One realistic flow per object type, over a real channel, including
//! the warning envelope a queue emits past its high-water mark.

use tether_core::Value;

use crate::prelude::*;

#[test]
fn queues_are_fifo_and_warn_past_high_water() {
    let mut session = Session::open();
    session.ok(&varr!["new", "queue", vobj! { "name" => "jobs", "high_water" => 2 }]);

    assert_eq!(session.ok(&varr![0, "push", "a", "b"]), vec![Value::Integer(2)]);

    let (warnings, reply) = session.request(&varr![0, "push", "c"]);
    assert_eq!(
        warnings,
        vec![varr![false, "warning: queue depth 3 exceeds high water mark 2", "queue", 0]]
    );
    assert_eq!(payload(reply), vec![Value::Integer(3)]);

    assert_eq!(session.ok(&varr![0, "pop"]), vec!["a".into()]);
    assert_eq!(session.ok(&varr![0, "pop"]), vec!["b".into()]);
    assert_eq!(session.ok(&varr![0, "len"]), vec![Value::Integer(1)]);
    assert_eq!(session.ok(&varr![0, "clear"]), Vec::<Value>::new());
    assert_eq!(session.fail(&varr![0, "pop"]), "queue 'jobs' is empty");
}

#[test]
fn caches_store_and_forget_by_key() {
    let mut session = Session::open();
    session.ok(&varr!["new", "cache"]);

    session.ok(&varr![0, "put", "color", "teal"]);
    assert_eq!(session.ok(&varr![0, "get", "color"]), vec!["teal".into()]);
    assert_eq!(session.ok(&varr![0, "get", "shape"]), vec![Value::Null]);

    session.ok(&varr![0, "put", "color", varr![0, 128, 128]]);
    assert_eq!(session.ok(&varr![0, "get", "color"]), vec![varr![0, 128, 128]]);
    assert_eq!(session.ok(&varr![0, "len"]), vec![Value::Integer(1)]);

    assert_eq!(session.ok(&varr![0, "delete", "color"]), vec![Value::Boolean(true)]);
    assert_eq!(session.ok(&varr![0, "delete", "color"]), vec![Value::Boolean(false)]);
}

#[test]
fn storage_keeps_documents_in_insertion_order() {
    let mut session = Session::open();
    session.ok(&varr!["new", "storage"]);

    session.ok(&varr![0, "write", "beta", vobj! { "n" => 2 }]);
    session.ok(&varr![0, "write", "alpha", vobj! { "n" => 1 }]);
    assert_eq!(session.ok(&varr![0, "list"]), vec![varr!["beta", "alpha"]]);
    assert_eq!(session.ok(&varr![0, "read", "alpha"]), vec![vobj! { "n" => 1 }]);

    assert_eq!(
        session.fail(&varr![0, "write", "gamma", "not an object"]),
        "write: argument 'doc' must be object"
    );
    assert_eq!(session.fail(&varr![0, "read", "gamma"]), "no entry 'gamma'");

    session.ok(&varr![0, "remove", "beta"]);
    assert_eq!(session.fail(&varr![0, "remove", "beta"]), "no entry 'beta'");
    assert_eq!(session.ok(&varr![0, "list"]), vec![varr!["alpha"]]);
}

#[test]
fn workers_hold_one_job_at_a_time() {
    let mut session = Session::open();
    session.ok(&varr!["new", "worker", vobj! { "name" => "miner" }]);

    assert_eq!(session.ok(&varr![0, "status"]), vec!["idle".into()]);
    session.ok(&varr![0, "submit", "dig"]);
    assert_eq!(session.ok(&varr![0, "status"]), vec!["busy".into()]);
    assert_eq!(session.fail(&varr![0, "submit", "haul"]), "worker 'miner' is busy");

    assert_eq!(session.ok(&varr![0, "finish"]), vec!["dig".into()]);
    assert_eq!(session.ok(&varr![0, "status"]), vec!["idle".into()]);
    assert_eq!(session.fail(&varr![0, "finish"]), "worker 'miner' is idle");

    assert_eq!(session.ok(&varr![0, "wait", 0]), Vec::<Value>::new());
}
