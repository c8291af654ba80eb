use crate::models::TravelTime;

/// Backend base URL baked in at build time, e.g. `BUS_API_URL=https://api.example.com trunk build`
const BUILD_API_URL: Option<&str> = option_env!("BUS_API_URL");

/// Host used when neither a build-time URL nor a browser origin is available
const FALLBACK_API_URL: &str = "http://localhost:8081";

/// Where the reservation backend lives.
///
/// Constructed once by the app and handed to whatever issues requests, so each
/// test can point a client at its own fake backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the backend for the running app: the build-time `BUS_API_URL`
    /// when set, otherwise the page's own origin (served behind the `/api` proxy).
    #[must_use]
    pub fn from_environment() -> Self {
        match BUILD_API_URL.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => Self::same_origin(),
        }
    }

    /// Target the origin the page was loaded from
    #[must_use]
    pub fn same_origin() -> Self {
        Self::new(page_origin().unwrap_or_else(|| FALLBACK_API_URL.to_string()))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn routes_url(&self) -> String {
        format!("{}/api/routes", self.base_url)
    }

    #[must_use]
    pub fn reservations_url(&self) -> String {
        format!("{}/api/reservations", self.base_url)
    }

    #[must_use]
    pub fn occupied_seats_url(&self, route_id: u64, travel_time: TravelTime) -> String {
        format!(
            "{}/api/reservations/occupied?routeId={route_id}&travelTime={travel_time}",
            self.base_url
        )
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .filter(|origin| origin.starts_with("http"))
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
