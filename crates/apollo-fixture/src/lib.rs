#![doc = include_str!("../README.md")]

mod error;
mod info;
mod leaf;
mod root;

pub use crate::error::FixtureError;
pub use crate::info::JsonMap;
pub use crate::info::JsonValue;
pub use crate::info::Operation;
pub use crate::info::PathSegment;
pub use crate::info::ResolveInfo;
pub use crate::leaf::is_leaf_type;
pub use crate::root::root_field_type;
