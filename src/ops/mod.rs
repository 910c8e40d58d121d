//! Hash map operations over a [`Table`](crate::table::Table).

pub mod get;
pub mod insert;
pub mod rehash;
pub mod remove;
