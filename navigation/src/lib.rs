//! Route table and history-mode router for the graduate pathway frontend.
//!
//! This crate owns the mapping from URL paths to page-level views for the
//! three user roles (student, reviewer, admin). It has no browser dependency:
//! the `client` crate plugs a `window.history` backend into [`router::Router`],
//! and the server uses the same [`table::RouteTable`] to decide which paths
//! get the SPA shell with a `200` and which get it with a `404`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`view`] | View identifiers and the roles that own them |
//! | [`pattern`] | `:param` path patterns: parse, match, build |
//! | [`params`] | Captured dynamic segment values |
//! | [`location`] | Parsed request target (path, query, hash) and base-path config |
//! | [`table`] | Ordered route table, first-match resolution, reverse routing |
//! | [`state`] | [`state::NavigationState`] snapshot produced by each navigation |
//! | [`history`] | History backend seam plus an in-memory implementation |
//! | [`router`] | Router binding the table to a history backend |

pub mod history;
pub mod location;
pub mod params;
pub mod pattern;
pub mod router;
pub mod state;
pub mod table;
pub mod view;

pub use history::{HistoryBackend, HistoryCall, MemoryHistory};
pub use location::{Location, RouterConfig};
pub use params::Params;
pub use pattern::{BuildError, PathPattern, PatternError};
pub use router::Router;
pub use state::NavigationState;
pub use table::{Resolved, Route, RouteError, RouteTable};
pub use view::{Role, ViewId};
