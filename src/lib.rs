//! keep-ours: resolve leftover merge-conflict markers by keeping the local side.
//!
//! After a merge or rebase leaves conflict markers behind, this crate walks a
//! project tree once and rewrites every well-formed conflict block in place,
//! discarding the incoming ("theirs") side and keeping the local ("ours"/HEAD)
//! side. Malformed or partial blocks are never touched.

pub mod areas;
pub mod artifacts;
pub mod commands;
