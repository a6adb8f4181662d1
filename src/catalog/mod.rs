mod models;
pub mod consenthub;

pub use models::{ScriptCatalog, ScriptEntry, ScriptGroup};
pub use consenthub::consenthub_catalog;
