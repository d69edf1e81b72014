//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per route of the shared route table plus a not-found fallback.
//! Pages are shells: they read their route params from the router context
//! and leave data loading to the services behind them.

pub mod application_list;
pub mod my_application;
pub mod not_found;
pub mod review_detail;
pub mod system_overview;
