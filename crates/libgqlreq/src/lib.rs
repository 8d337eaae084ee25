pub use libgqlreq_core::*;
