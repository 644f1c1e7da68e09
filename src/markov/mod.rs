//! First-order opponent modeling: count transitions, normalize them
//! into a distribution, sample a prediction, counter it.

mod chain;
mod predict;

pub use chain::Chain;
pub use predict::forecast;
pub use predict::predict;
