//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the router from Leptos context; none of them own
//! navigation state.

pub mod link;
pub mod nav_bar;
