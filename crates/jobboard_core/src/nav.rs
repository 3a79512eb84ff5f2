use url::Url;

pub const BRAND_TITLE: &str = "AI-Powered Job Portal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Profile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Profile => "/profile",
        }
    }
}

/// Which job list the board is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    All,
    Recommended,
}

/// Absolute address of `route` under `site_url`.
///
/// Falls back to plain concatenation when `site_url` is not a valid base.
pub fn page_url(site_url: &str, route: Route) -> String {
    match Url::parse(site_url).and_then(|base| base.join(route.path())) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", site_url.trim_end_matches('/'), route.path()),
    }
}
