//! Navigable locations and routes.
//!
//! Locations use web-style paths with an optional query string
//! (`/recipes?view=list`). Parsing is delegated to the `url` crate by
//! resolving the input against a fixed base, which takes care of relative
//! inputs, percent-decoding, and repeated parameters.

use crate::app::modes::ViewMode;
use std::fmt;
use url::Url;

const BASE_URL: &str = "http://recipe-explorer.local/";

/// Screen a location resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Recipes,
    SignIn,
}

/// A resolved location.
///
/// `/` and unknown paths redirect to `/recipes`, dropping their query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    route: Route,
    view: Option<String>,
}

impl Location {
    /// Parses a location string.
    ///
    /// Never fails: input that cannot be resolved is treated like an unknown
    /// path and redirects to `/recipes`.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_explorer::navigation::{Location, Route};
    ///
    /// let loc = Location::parse("/recipes?view=list");
    /// assert_eq!(loc.route(), Route::Recipes);
    /// assert_eq!(loc.view_param(), Some("list"));
    ///
    /// assert_eq!(Location::parse("/").to_string(), "/recipes");
    /// assert_eq!(Location::parse("/nowhere?view=list").view_param(), None);
    /// assert_eq!(Location::parse("/signin").route(), Route::SignIn);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let Ok(url) = Url::parse(BASE_URL).and_then(|base| base.join(input.trim())) else {
            tracing::debug!(location = %input, "unparseable location, redirecting to recipes");
            return Self::default();
        };

        match url.path().trim_end_matches('/') {
            "/recipes" => Self {
                route: Route::Recipes,
                view: url
                    .query_pairs()
                    .find(|(key, _)| key == "view")
                    .map(|(_, value)| value.into_owned()),
            },
            "/signin" => Self::sign_in(),
            other => {
                tracing::debug!(path = %other, "unknown path, redirecting to recipes");
                Self::default()
            }
        }
    }

    /// Location a view mode change maps back to.
    #[must_use]
    pub fn recipes(mode: ViewMode) -> Self {
        Self {
            route: Route::Recipes,
            view: Some(mode.as_str().to_string()),
        }
    }

    #[must_use]
    pub const fn sign_in() -> Self {
        Self {
            route: Route::SignIn,
            view: None,
        }
    }

    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Raw value of the first `view` query parameter, if present.
    #[must_use]
    pub fn view_param(&self) -> Option<&str> {
        self.view.as_deref()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            route: Route::Recipes,
            view: None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.route, &self.view) {
            (Route::SignIn, _) => f.write_str("/signin"),
            (Route::Recipes, None) => f.write_str("/recipes"),
            (Route::Recipes, Some(view)) => {
                let query: String = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("view", view)
                    .finish();
                write!(f, "/recipes?{query}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_view_parameter_wins() {
        let loc = Location::parse("/recipes?view=list&view=grid");
        assert_eq!(loc.view_param(), Some("list"));
    }

    #[test]
    fn relative_and_trailing_slash_paths_resolve() {
        assert_eq!(Location::parse("recipes?view=list").view_param(), Some("list"));
        assert_eq!(Location::parse("/recipes/").route(), Route::Recipes);
        assert_eq!(Location::parse("signin").route(), Route::SignIn);
    }

    #[test]
    fn view_parameter_is_percent_decoded() {
        assert_eq!(Location::parse("/recipes?view=gr%69d").view_param(), Some("grid"));
    }

    #[test]
    fn unrecognized_view_is_kept_raw() {
        // Validation belongs to the controller, not the parser.
        assert_eq!(Location::parse("/recipes?view=bogus").view_param(), Some("bogus"));
    }

    #[test]
    fn display_round_trips_view_mode_locations() {
        let loc = Location::recipes(ViewMode::List);
        assert_eq!(loc.to_string(), "/recipes?view=list");
        assert_eq!(Location::parse(&loc.to_string()), loc);
        assert_eq!(Location::sign_in().to_string(), "/signin");
    }
}
