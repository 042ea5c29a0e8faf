mod error;
mod functions;
mod serialization;
mod traits;
mod types;

pub use error::SessionError;
pub use functions::{generate_session_id, persist_action, SESSION_ID_LEN};
pub use serialization::{deserialize_data, serialize_data};
pub use traits::{Result, Session, SessionExt, SessionStore};
pub use types::{CookieOptions, PersistAction, SessionData, Value};
