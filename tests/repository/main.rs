//! Repository Integration Tests
//!
//! End-to-end behaviour of the repository over real backends:
//! - loading an existing inventory file
//! - deferred writes becoming durable only on flush
//! - reload from a fresh repository over the same backend

#[path = "../common/mod.rs"]
mod common;

mod durability;
