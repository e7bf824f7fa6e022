//! Azure Management Groups API interaction.
//!
//! - [`fetch`] - Authenticated GET of the descendants list
//! - [`descendants`] - Loading (network or saved file) and parsing the response

mod descendants;
mod fetch;

pub use descendants::{load_descendants, parse_descendants, read_descendants_file};
pub use fetch::fetch_descendants;
