// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use tether_core::Value;

use super::args::{Arg, Args, CommandError};
use crate::dispatch::Invocation;

/// Leaf handler: bound arguments in, reply payload (the elements after the
/// success boolean) or a caught error out.
pub type Handler = fn(&mut Invocation<'_>, &Args) -> Result<Vec<Value>, CommandError>;

/// How a group consumes one element to select a child.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// A string element selects the child with that name.
    Name,
    /// Name matching, plus: an integer element resolves an object handle
    /// and selects the method table matching the object's type, making the
    /// handle the invocation target.
    Dispatch { objects: Vec<Command> },
}

#[derive(Debug, Clone)]
pub enum Shape {
    /// Positional descriptors validated before the handler runs.
    Fixed { args: Vec<Arg>, handler: Handler },
    /// Every remaining element is passed through unvalidated. `doc` is the
    /// usage placeholder, e.g. `[values...]`.
    Variadic { doc: &'static str, handler: Handler },
    /// One element selects a child command.
    Group { matcher: Matcher, children: Vec<Command> },
}

/// An immutable command descriptor. Tables are built once before the
/// dispatch loop starts and are read-only thereafter.
#[derive(Debug, Clone)]
pub struct Command {
    name: &'static str,
    summary: &'static str,
    shape: Shape,
}

impl Command {
    pub fn fixed(
        name: &'static str,
        summary: &'static str,
        args: Vec<Arg>,
        handler: Handler,
    ) -> Self {
        Self { name, summary, shape: Shape::Fixed { args, handler } }
    }

    pub fn variadic(
        name: &'static str,
        summary: &'static str,
        doc: &'static str,
        handler: Handler,
    ) -> Self {
        Self { name, summary, shape: Shape::Variadic { doc, handler } }
    }

    /// A group matching children by name.
    pub fn group(name: &'static str, summary: &'static str, children: Vec<Command>) -> Self {
        Self { name, summary, shape: Shape::Group { matcher: Matcher::Name, children } }
    }

    /// A group whose matcher also routes object handles to method tables.
    pub fn dispatch_group(
        name: &'static str,
        summary: &'static str,
        children: Vec<Command>,
        objects: Vec<Command>,
    ) -> Self {
        Self { name, summary, shape: Shape::Group { matcher: Matcher::Dispatch { objects }, children } }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn summary(&self) -> &'static str {
        self.summary
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Named children of a group; empty for leaves.
    pub fn children(&self) -> &[Command] {
        match &self.shape {
            Shape::Group { children, .. } => children,
            _ => &[],
        }
    }

    /// Handle-routed method tables of a dispatch group.
    pub fn objects(&self) -> &[Command] {
        match &self.shape {
            Shape::Group { matcher: Matcher::Dispatch { objects }, .. } => objects,
            _ => &[],
        }
    }
}
