pub mod application;

pub use application::{SearchOutcome, SearchSession, SessionState};
