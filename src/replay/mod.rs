pub mod accessor;
pub mod cursor;
pub mod error;
pub mod session;

pub use cursor::Cursor;
pub use error::{ReplayError, ReplayResult, SessionError};
pub use session::Session;
