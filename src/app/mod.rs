pub mod interaction;

pub use interaction::{Action, InteractionLoop, LoopState, SessionSummary};
