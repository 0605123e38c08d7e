//! Admin Handlers

pub(crate) mod status;
