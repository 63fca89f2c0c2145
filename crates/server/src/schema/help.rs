// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help text rendered from the command descriptors themselves.

use super::{Command, Matcher, Shape};

/// One-line usage: name plus `<required:kind>` / `[optional:kind]` slots,
/// the variadic placeholder, or the group selector.
pub fn usage_line(command: &Command) -> String {
    match command.shape() {
        Shape::Fixed { args, .. } => {
            let mut line = command.name().to_string();
            for arg in args {
                if arg.is_required() {
                    line.push_str(&format!(" <{}:{}>", arg.name(), arg.kind()));
                } else {
                    line.push_str(&format!(" [{}:{}]", arg.name(), arg.kind()));
                }
            }
            line
        }
        Shape::Variadic { doc, .. } => format!("{} {doc}", command.name()),
        Shape::Group { matcher: Matcher::Name, .. } => format!("{} <command>", command.name()),
        Shape::Group { matcher: Matcher::Dispatch { .. }, .. } => {
            format!("{} <handle> <method> [args...]", command.name())
        }
    }
}

/// Render one command and, for groups, its named children. Method tables
/// hanging off a dispatch matcher are deliberately not expanded here; the
/// root renderer lists them once under their own heading.
pub fn describe(command: &Command, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&indent);
    out.push_str(&usage_line(command));
    out.push_str(" -- ");
    out.push_str(command.summary());
    out.push('\n');
    for child in command.children() {
        describe(child, depth + 1, out);
    }
}

/// The full table: named commands, then object method tables.
pub fn render_root(root: &Command) -> String {
    let mut out = String::from("commands:\n");
    for child in root.children() {
        describe(child, 1, &mut out);
    }
    let objects = root.objects();
    if !objects.is_empty() {
        out.push_str("objects:\n");
        for table in objects {
            describe(table, 1, &mut out);
        }
    }
    out
}

/// Describe one subtree addressed by name path. An unrecognized segment
/// produces an empty description so an enclosing search can continue.
pub fn render_path(root: &Command, path: &[&str]) -> String {
    match find(root, path) {
        Some(command) => {
            let mut out = String::new();
            describe(command, 0, &mut out);
            out
        }
        None => String::new(),
    }
}

fn find<'a>(command: &'a Command, path: &[&str]) -> Option<&'a Command> {
    let Some((head, rest)) = path.split_first() else {
        return Some(command);
    };
    command
        .children()
        .iter()
        .chain(command.objects().iter())
        .find(|child| child.name() == *head)
        .and_then(|child| find(child, rest))
}
