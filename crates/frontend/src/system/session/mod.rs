pub mod context;

pub use context::{use_session, SessionContext};
