//! Shared types for the scribe editor bridge.
//!
//! Everything the host UI reads about the embedded editor lives here:
//! the formatting status reported by the engine, the host-owned
//! `BridgeState`, the error taxonomy and the event bus used to observe
//! bridge activity.

pub mod errors;
pub mod events;
pub mod id;
pub mod state;
pub mod status;

pub use errors::{BridgeError, ChannelError, ConfigError};
pub use events::{BridgeEvent, EventBus};
pub use id::{new_correlation_id, new_id, RequestId, SessionId};
pub use state::{BridgeState, Panel};
pub use status::{EditorStatus, ParaType, UndoState};
