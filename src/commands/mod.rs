//! Command implementations
//!
//! keep-ours exposes a single user-facing operation: `resolve`, which walks
//! the project tree and rewrites every well-formed conflict block in place,
//! keeping the local side. It is kept under `porcelain` since it composes the
//! workspace and the resolver into a user-visible workflow.

pub mod porcelain;
