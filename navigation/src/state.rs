//! Navigation snapshot.

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::table::{Resolved, RouteTable};
use crate::view::ViewId;

/// Result of resolving one location. Replaced wholesale on every navigation.
///
/// `resolution` is `None` when no route matched (the not-found state).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub location: Location,
    pub resolution: Option<Resolved>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self { location: Location::root(), resolution: None }
    }
}

impl NavigationState {
    #[must_use]
    pub fn resolve(table: &RouteTable, location: Location) -> Self {
        let resolution = table.resolve(&location);
        Self { location, resolution }
    }

    #[must_use]
    pub fn view(&self) -> Option<ViewId> {
        self.resolution.as_ref().map(|r| r.view)
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.resolution.as_ref().and_then(|r| r.params.get(name))
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.resolution.is_none()
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.location.path
    }

    /// App-relative href of this state (base not included).
    #[must_use]
    pub fn href(&self) -> String {
        self.location.href()
    }
}
