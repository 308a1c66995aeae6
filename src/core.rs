//! Client core
//!
//! Pure state for the history list: snapshot store, filtering, keyboard
//! navigation and the window session. Nothing here talks to the host directly
//! except through the `HistorySource` port.

pub mod filter;
pub mod history;
pub mod navigation;
pub mod session;
pub mod view;

pub use filter::{filter_entries, Category, FilterEngine};
pub use history::{HistoryPoller, HistoryStore, PollerHandle};
pub use navigation::{NavAction, NavCommand, NavigationController};
pub use session::{WindowMode, WindowSession};
pub use view::ClipboardView;
