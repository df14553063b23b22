pub const OWNER: &str = "Salman Azeez Syed";
/// Day the site was built, as `YYYY-MM-DD`.
pub const BUILD_DATE: &str = env!("BUILD_DATE");
pub const WELCOME: &str = "Welcome to Salman's Portfolio!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Experiences,
    Blogs,
    Gallery,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Experiences,
        Page::Blogs,
        Page::Gallery,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Experiences => "/experiences",
            Page::Blogs => "/blogs",
            Page::Gallery => "/gallery",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Experiences => "Experiences",
            Page::Blogs => "Blogs",
            Page::Gallery => "Gallery",
        }
    }

    /// Ignores a trailing slash, so `/about/` is still the about page.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL.into_iter().find(|p| p.path() == trimmed)
    }
}

/// HTTP status the server answers with for `path`.
pub fn response_status(path: &str) -> u16 {
    match Page::from_path(path) {
        Some(_) => 200,
        None => 404,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn lookup_edge_cases() {
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/gallery/"), Some(Page::Gallery));
        assert_eq!(Page::from_path("/nope"), None);
        assert_eq!(Page::from_path("/about/me"), None);
    }

    #[test]
    fn build_date_is_a_calendar_day() {
        let parts: Vec<&str> = BUILD_DATE.split('-').collect();
        assert_eq!(parts.iter().map(|p| p.len()).collect::<Vec<_>>(), [4, 2, 2]);
        assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn unknown_paths_answer_not_found() {
        assert_eq!(response_status("/"), 200);
        assert_eq!(response_status("/blogs/"), 200);
        assert_eq!(response_status("/missing"), 404);
        assert_eq!(response_status("/about/me"), 404);
    }
}
