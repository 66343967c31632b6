//! # Data Projection
//!
//! `data-projection` is a scope-filtered structural projection engine.
//! Given a possibly nested [`Value`] and a scope token, [`project`]
//! produces a copy containing only the fields whose metadata marks
//! them visible under that scope, recursing through aggregates,
//! references, sequences and mappings. It is the mechanism behind
//! serving "public" vs "internal" views of one domain object without
//! hand-written per-view types.
//!
//! Fields opt into scopes through struct-tag-shaped metadata:
//!
//! ```
//! use data_projection::{project, Field, Value};
//!
//! let user = Value::Aggregate(vec![
//!     Field::new("Name", r#"scope:"public,admin""#, Value::from("ada")),
//!     Field::new("Email", r#"scope:"admin""#, Value::from("a@b.c")),
//! ]);
//!
//! let public = project(&user, "public");
//! assert_eq!(
//!     public,
//!     Value::Aggregate(vec![Field::new(
//!         "Name",
//!         r#"scope:"public,admin""#,
//!         Value::from("ada"),
//!     )])
//! );
//! ```
//!
//! Projection is pure and infallible: malformed metadata excludes the
//! field, unrecognized shapes are logged and treated as absent, and
//! the caller always gets a [`Value`] back. Encoding the result is a
//! separate concern; [`Value`] implements serde's `Serialize` for
//! that.

mod errors;
mod project;
mod serde;
pub mod tag;
mod value;

pub use errors::{Result, TagError};
pub use project::{project, SCOPE_KEY};
pub use value::{Field, Kind, Value};
