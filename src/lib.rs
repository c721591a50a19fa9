pub mod catalog;
pub mod cli;
pub mod export;
pub mod schema;
pub mod state;
pub mod store;
pub mod ui;
pub mod view;

pub use catalog::{load_catalog, Catalog, CatalogSource, ShipRecord};
pub use cli::{Cli, Commands};
pub use state::{AppState, Event};
pub use store::{FileStorage, Flag, MemoryStorage, OverrideEntry, OverrideStore, Storage};
pub use ui::{Browser, BrowserModel};
