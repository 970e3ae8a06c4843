//! Path translation between host and plugin sandbox.

use std::path::PathBuf;

/// Directory holding the plugin's trace files.
///
/// `/host` is the cwd of the last focused terminal (normally the home
/// directory), so this is usually `~/.local/share/zellij/recipe-explorer`.
///
/// # Examples
///
/// ```
/// use recipe_explorer::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/recipe-explorer"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("recipe-explorer")
}

/// Maps a `~` prefix onto the sandbox `/host` mount.
///
/// # Examples
///
/// ```
/// use recipe_explorer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/recipes.json"), "/host/recipes.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/srv/recipes.json"), "/srv/recipes.json");
/// assert_eq!(expand_tilde("~bob/recipes.json"), "~bob/recipes.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Inverse of [`expand_tilde`] for status messages.
///
/// # Examples
///
/// ```
/// use recipe_explorer::infrastructure::display_path;
///
/// assert_eq!(display_path("/host/recipes.json"), "~/recipes.json");
/// assert_eq!(display_path("/host"), "~");
/// assert_eq!(display_path("/hostile/recipes.json"), "/hostile/recipes.json");
/// ```
#[must_use]
pub fn display_path(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}
