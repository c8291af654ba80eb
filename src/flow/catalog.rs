use crate::models::Route;

pub const NO_ROUTES: &str = "No routes available at the moment.";
pub const NO_MATCHES: &str = "No routes match your search.";

/// Route list fetched once when the catalog opens
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Vec<Route>),
    Failed(String),
}

impl CatalogState {
    #[must_use]
    pub fn from_result(result: Result<Vec<Route>, String>) -> Self {
        match result {
            Ok(routes) => Self::Loaded(routes),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Routes whose bus name, origin or destination contain `term`, ignoring case
#[must_use]
pub fn filter_routes(routes: &[Route], term: &str) -> Vec<Route> {
    routes
        .iter()
        .filter(|route| route.matches_search(term))
        .cloned()
        .collect()
}

/// Message to show in place of an empty list, or `None` when something matched
#[must_use]
pub fn empty_message(total: usize, matching: usize) -> Option<&'static str> {
    match (total, matching) {
        (0, _) => Some(NO_ROUTES),
        (_, 0) => Some(NO_MATCHES),
        _ => None,
    }
}
