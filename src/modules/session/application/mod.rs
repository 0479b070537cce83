pub mod service;
pub mod session_state;

pub use service::SearchSession;
pub use session_state::{SearchOutcome, SessionState};
