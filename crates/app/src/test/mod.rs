//! Shared fixtures for service tests.


pub(crate) use context::TestContext;
