pub use crate::app::App;
pub use sitecms_types::error::{ClResult, Error};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
