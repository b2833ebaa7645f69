//! Path utilities: expand `~` in user-supplied paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::expand_tilde;
    use std::path::PathBuf;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/feed.json"), PathBuf::from("/tmp/feed.json"));
        assert_eq!(expand_tilde("feed.json"), PathBuf::from("feed.json"));
    }
}
