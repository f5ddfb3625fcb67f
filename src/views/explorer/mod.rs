#[cfg(feature = "tui")]
pub mod explorer_view;
pub mod projection;

#[cfg(feature = "tui")]
pub use explorer_view::{ExplorerTheme, ExplorerView};
pub use projection::{project, Chevron, EntryRow, ExplorerRow, RowKind, RowLabel};
