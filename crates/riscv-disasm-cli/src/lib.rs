pub mod listing;
pub mod model;

// Re-export commonly used types/functions for the binary
pub use listing::{format_line, listing, render_json, render_text, ListingLine};
pub use model::{load_raw_bin, Image};
