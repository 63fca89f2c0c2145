// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The object-handle registry.
//!
//! Handles are minted monotonically (collection size at insertion) and are
//! never reused within a process run: `del` nulls a slot instead of popping
//! it, so every stale handle stays permanently distinguishable from a live
//! one.

use tether_core::Value;

use crate::protocol::Warning;
use crate::schema::{Args, CommandError};

/// A stateful, handle-addressed object plugged into the dispatcher.
///
/// Objects never see the wire; they receive schema-validated arguments and
/// may emit out-of-band warnings through the sink supplied per invocation.
pub trait AutomationObject {
    fn type_name(&self) -> &'static str;

    fn invoke(
        &mut self,
        method: &str,
        args: &Args,
        warn: &mut WarnSink<'_>,
    ) -> Result<Vec<Value>, CommandError>;
}

/// Collects warnings raised during one invocation, pre-tagged with the
/// emitting object's identity.
pub struct WarnSink<'a> {
    type_name: &'static str,
    handle: i64,
    out: &'a mut Vec<Warning>,
}

impl WarnSink<'_> {
    pub fn warn(&mut self, text: impl Into<String>) {
        let warning = Warning { text: text.into(), type_name: self.type_name, handle: self.handle };
        tracing::warn!(object = self.type_name, handle = self.handle, text = %warning.text, "object warning");
        self.out.push(warning);
    }
}

/// Arena of automation objects: a growable slot vector, exclusive owner of
/// every object it holds.
#[derive(Default)]
pub struct Registry {
    slots: Vec<Option<Box<dyn AutomationObject>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The handle the next insertion will mint.
    pub fn next_handle(&self) -> i64 {
        self.slots.len() as i64
    }

    pub fn insert(&mut self, object: Box<dyn AutomationObject>) -> i64 {
        let handle = self.next_handle();
        self.slots.push(Some(object));
        tracing::debug!(handle, "object registered");
        handle
    }

    /// Null the slot. The handle is dead for the rest of the process run.
    pub fn remove(&mut self, handle: i64) -> Result<(), CommandError> {
        let slot = usize::try_from(handle)
            .ok()
            .and_then(|index| self.slots.get_mut(index))
            .ok_or(CommandError::NoSuchObject { handle })?;
        match slot.take() {
            Some(_) => {
                tracing::debug!(handle, "object removed");
                Ok(())
            }
            None => Err(CommandError::NoSuchObject { handle }),
        }
    }

    pub fn contains(&self, handle: i64) -> bool {
        self.live(handle).is_some()
    }

    /// Type name of the live object behind `handle`.
    pub fn type_of(&self, handle: i64) -> Option<&'static str> {
        self.live(handle).map(AutomationObject::type_name)
    }

    /// Route one method call to the object behind `handle`. Warnings the
    /// object raises are appended to `warnings` in emission order.
    pub fn invoke(
        &mut self,
        handle: i64,
        method: &str,
        args: &Args,
        warnings: &mut Vec<Warning>,
    ) -> Result<Vec<Value>, CommandError> {
        let object = usize::try_from(handle)
            .ok()
            .and_then(|index| self.slots.get_mut(index))
            .and_then(|slot| slot.as_deref_mut())
            .ok_or(CommandError::NoSuchObject { handle })?;
        let mut sink = WarnSink { type_name: object.type_name(), handle, out: warnings };
        object.invoke(method, args, &mut sink)
    }

    fn live(&self, handle: i64) -> Option<&dyn AutomationObject> {
        usize::try_from(handle)
            .ok()
            .and_then(|index| self.slots.get(index))
            .and_then(|slot| slot.as_deref())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
