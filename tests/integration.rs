//! Integration test suite: the `dirlist` binary end to end.

#[path = "common/mod.rs"]
mod common;
#[path = "integration/end_to_end.rs"]
mod end_to_end;
#[path = "integration/smoke.rs"]
mod smoke;
