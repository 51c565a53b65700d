//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only process-wide reactive state is the authenticated identity;
//! everything else (lists, forms) lives in page-local resources so pages
//! stay independently refreshable.

pub mod auth;
