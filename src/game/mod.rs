//! The round loop and everything it resolves: throws, outcomes, the
//! running transcript, and the session that drives them to a target.

mod outcome;
mod session;
mod throw;
mod transcript;

pub use outcome::Outcome;
pub use session::Session;
pub use throw::Throw;
pub use transcript::Record;
pub use transcript::Transcript;
