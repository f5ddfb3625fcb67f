//! Headless explorer core (state/action/effect).

pub mod action;
pub mod drag;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use drag::{decode_drag_payload, encode_drag_payload, DragPayloadError};
pub use effect::Effect;
pub use state::{
    AppState, ContextMenuEntry, ContextMenuState, ExplorerMenuAction, ExplorerState,
};
pub use store::{DispatchResult, Store};
