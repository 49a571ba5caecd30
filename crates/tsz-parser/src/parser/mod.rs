//! Node storage and access.

pub mod base;
pub mod node;
pub mod node_access;
pub mod node_arena;
