//! Pure client-side state machines.
//!
//! DESIGN
//! ======
//! The fetch lifecycle (`resource`) and the edit workflow (`edit`) are
//! plain types with no view or network code, so every transition the UI
//! depends on is unit tested natively.

pub mod edit;
pub mod resource;
