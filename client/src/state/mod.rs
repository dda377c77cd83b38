//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only cross-page state lives here. Page-scoped state (catalog filters,
//! the owner's listing set, the draft form, the profile editor) is the
//! matching `market` type held in a page-local `RwSignal`.

pub mod session;
