//! Ordered route table.
//!
//! DESIGN
//! ======
//! Routes are tried in declaration order and the first match wins. Patterns
//! with the same shape (see [`PathPattern::shape`]) are rejected at insert
//! time, so declaration order only matters between genuinely different
//! patterns.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::params::Params;
use crate::pattern::{BuildError, PathPattern, PatternError};
use crate::view::ViewId;

/// The application's routes, in match order.
pub const GRADPATH_ROUTES: [(&str, ViewId); 4] = [
    ("/student/application/:id", ViewId::MyApplication),
    ("/reviewer/applications", ViewId::ApplicationList),
    ("/reviewer/application/:id", ViewId::ReviewDetail),
    ("/admin/overview", ViewId::SystemOverview),
];

/// Error returned while building a table or reversing a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("pattern {pattern:?} duplicates existing route {existing:?}")]
    DuplicatePattern { pattern: String, existing: String },
    #[error("no route renders {0}")]
    UnknownView(ViewId),
    #[error("route for {view} needs parameter {name:?}")]
    MissingParam { view: ViewId, name: String },
    #[error("route for {view} cannot take {value:?} as parameter {name:?}")]
    DotSegmentParam { view: ViewId, name: String, value: String },
}

/// A single pattern → view binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pattern: PathPattern,
    view: ViewId,
}

impl Route {
    #[must_use]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    #[must_use]
    pub fn view(&self) -> ViewId {
        self.view
    }
}

/// Result of a successful match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved {
    pub view: ViewId,
    /// Pattern of the route that matched, as written in the table.
    pub pattern: String,
    pub params: Params,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::gradpath()
    }
}

impl RouteTable {
    /// An empty table. Every path resolves to not-found.
    #[must_use]
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// The graduate pathway route table ([`GRADPATH_ROUTES`]).
    #[must_use]
    pub fn gradpath() -> Self {
        Self::from_routes(GRADPATH_ROUTES).unwrap_or_else(|err| {
            tracing::error!(error = %err, "built-in route table rejected");
            Self::new()
        })
    }

    /// Build a table from `(pattern, view)` pairs in match order.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouteError`] raised by [`RouteTable::push`].
    pub fn from_routes<'a>(routes: impl IntoIterator<Item = (&'a str, ViewId)>) -> Result<Self, RouteError> {
        routes.into_iter().try_fold(Self::new(), |table, (pattern, view)| table.route(pattern, view))
    }

    /// Builder form of [`RouteTable::push`].
    ///
    /// # Errors
    ///
    /// See [`RouteTable::push`].
    pub fn route(mut self, pattern: &str, view: ViewId) -> Result<Self, RouteError> {
        self.push(pattern, view)?;
        Ok(self)
    }

    /// Append a route.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Pattern`] for a malformed pattern and
    /// [`RouteError::DuplicatePattern`] when an existing route has the same
    /// shape.
    pub fn push(&mut self, pattern: &str, view: ViewId) -> Result<(), RouteError> {
        let pattern = PathPattern::parse(pattern)?;
        let shape = pattern.shape();
        if let Some(existing) = self.routes.iter().find(|r| r.pattern.shape() == shape) {
            return Err(RouteError::DuplicatePattern {
                pattern: pattern.as_str().to_owned(),
                existing: existing.pattern.as_str().to_owned(),
            });
        }
        self.routes.push(Route { pattern, view });
        Ok(())
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// First route matching `location`, with its captured params.
    #[must_use]
    pub fn resolve(&self, location: &Location) -> Option<Resolved> {
        let segments = location.segments();
        self.routes.iter().find_map(|route| {
            let params = route.pattern.matches(&segments)?;
            tracing::trace!(pattern = %route.pattern, path = %location.path, "route matched");
            Some(Resolved { view: route.view, pattern: route.pattern.as_str().to_owned(), params })
        })
    }

    /// Parse `href` and resolve it.
    #[must_use]
    pub fn resolve_path(&self, href: &str) -> Option<Resolved> {
        self.resolve(&Location::parse(href))
    }

    /// Build the href of the first route rendering `view`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownView`] if no route renders `view` and
    /// [`RouteError::MissingParam`] if `params` lacks a dynamic segment.
    /// A param of `.` or `..` yields [`RouteError::DotSegmentParam`].
    pub fn href_for(&self, view: ViewId, params: &Params) -> Result<String, RouteError> {
        let route = self.routes.iter().find(|r| r.view == view).ok_or(RouteError::UnknownView(view))?;
        route.pattern.build(params).map_err(|err| match err {
            BuildError::MissingParam(name) => RouteError::MissingParam { view, name },
            BuildError::DotSegment { name, value } => RouteError::DotSegmentParam { view, name, value },
        })
    }
}
