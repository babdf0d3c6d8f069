//! # camsim Resolver
//!
//! Resolves a machining project snapshot into the two inputs the
//! simulator document needs: the conflict-checked tool table and the
//! representative stock envelope. Both resolvers read the same
//! immutable snapshot and are independent of each other.

pub mod stock;
pub mod tools;

pub use stock::{resolve_stock, ResolvedStock};
pub use tools::{resolve_tools, ResolvedTool, ToolTable};
