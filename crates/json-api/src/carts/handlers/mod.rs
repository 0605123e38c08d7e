//! Cart Handlers

pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod merge;
pub(crate) mod sync;
