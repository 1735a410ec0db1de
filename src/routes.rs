//! Route table

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    FocusArea,
    Projects,
    Team,
    News,
    Contact,
    Dashboard,
    GetInvolved,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::FocusArea,
        Page::Projects,
        Page::Team,
        Page::News,
        Page::Contact,
        Page::Dashboard,
        Page::GetInvolved,
    ];

    /// Header navigation, in display order
    pub const NAV: [Page; 6] = [
        Page::Home,
        Page::FocusArea,
        Page::Projects,
        Page::Team,
        Page::News,
        Page::Contact,
    ];

    /// Footer quick links
    pub const QUICK_LINKS: [Page; 4] = [Page::FocusArea, Page::Projects, Page::Team, Page::News];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::FocusArea => "/focus-area",
            Page::Projects => "/projects",
            Page::Team => "/team",
            Page::News => "/news",
            Page::Contact => "/contact",
            Page::Dashboard => "/dashboard",
            Page::GetInvolved => "/get-involved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::FocusArea => "Focus Areas",
            Page::Projects => "Projects",
            Page::Team => "Our Team",
            Page::News => "News",
            Page::Contact => "Contact",
            Page::Dashboard => "Dashboard",
            Page::GetInvolved => "Get Involved",
        }
    }

    /// Unmapped paths give `None`; a trailing slash is ignored
    pub fn from_path(path: &str) -> Option<Page> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_unmapped_paths() {
        assert_eq!(Page::from_path("/about"), None);
        assert_eq!(Page::from_path("/projects/1"), None);
        assert_eq!(Page::from_path("/news/"), Some(Page::News));
        assert_eq!(Page::from_path(""), Some(Page::Home));
    }
}
