mod app_context;

pub use app_context::{AppContext, ensure_fetched, load_config};
