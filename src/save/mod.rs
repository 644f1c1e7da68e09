//! Persistence: the learned counts that survive between sessions and
//! the plain-text report that does not need to.

mod report;
mod store;

pub use report::Report;
pub use store::Json;
pub use store::Store;

#[cfg(test)]
pub use store::Memory;
