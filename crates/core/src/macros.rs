// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.
//!
//! - [`varr!`] — build an array [`Value`](crate::Value) from expressions
//! - [`vobj!`] — build an object [`Value`](crate::Value) from `key => value` pairs
//! - [`simple_display!`] — `Display` impl mapping enum variants to string literals
//! - [`setters!`] — setter methods for builder/config structs

/// Build an array [`Value`](crate::Value); every element goes through
/// `Value::from`.
///
/// ```ignore
/// let reply = varr![true, "queue-0", 3];
/// ```
#[macro_export]
macro_rules! varr {
    () => { $crate::Value::array() };
    ($( $elem:expr ),+ $(,)?) => {
        $crate::Value::Array(vec![ $( $crate::Value::from($elem) ),+ ])
    };
}

/// Build an object [`Value`](crate::Value) from `key => value` pairs.
///
/// ```ignore
/// let config = vobj! { "name" => "jobs", "high_water" => 8 };
/// ```
#[macro_export]
macro_rules! vobj {
    () => { $crate::Value::object() };
    ($( $key:expr => $val:expr ),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $( map.insert(String::from($key), $crate::Value::from($val)); )+
        $crate::Value::Object(map)
    }};
}

/// Generate a `Display` impl that maps enum variants to string literals.
///
/// Unit variants match directly; data-carrying variants use `(..)` to ignore fields.
///
/// ```ignore
/// crate::simple_display! {
///     MyEnum {
///         Foo => "foo",
///         Bar(..) => "bar",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident $(( $($ignore:tt)* ))? => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $(( $($ignore)* ))? => $str, )+
                })
            }
        }
    };
}

/// Generate setter methods inside an existing `impl` block.
///
/// Field groups:
/// - `into { field: Type }` — setter uses `impl Into<Type>`
/// - `set { field: Type }` — setter takes `Type` directly
/// - `option { field: Type }` — setter wraps in `Some(v.into())`
///
/// ```ignore
/// impl MyConfig {
///     tether_core::setters! {
///         into { name: String }
///         set { count: u32 }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (
        $(into {
            $( $into_field:ident : $into_ty:ty ),* $(,)?
        })?
        $(set {
            $( $set_field:ident : $set_ty:ty ),* $(,)?
        })?
        $(option {
            $( $opt_field:ident : $opt_ty:ty ),* $(,)?
        })?
    ) => {
        $($(
            pub fn $into_field(mut self, v: impl Into<$into_ty>) -> Self {
                self.$into_field = v.into();
                self
            }
        )*)?

        $($(
            pub fn $set_field(mut self, v: $set_ty) -> Self {
                self.$set_field = v;
                self
            }
        )*)?

        $($(
            pub fn $opt_field(mut self, v: impl Into<$opt_ty>) -> Self {
                self.$opt_field = Some(v.into());
                self
            }
        )*)?
    };
}
