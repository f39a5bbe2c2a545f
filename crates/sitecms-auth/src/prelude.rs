pub use sitecms_core::prelude::*;

// vim: ts=4
