//! Route table for the navigation shell

/// Screens reachable from the nav bar, plus whatever path matched none of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Users,
    Courses,
    Skills,
    NotFound(String),
}

impl Route {
    /// Routes listed in the nav bar, in display order
    pub const NAV: [Route; 4] = [Route::Home, Route::Users, Route::Courses, Route::Skills];

    /// Map a requested path onto a route. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        match trimmed {
            "/" => Route::Home,
            "/users" => Route::Users,
            "/courses" => Route::Courses,
            "/skills" => Route::Skills,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Users => "/users",
            Route::Courses => "/courses",
            Route::Skills => "/skills",
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Route::Home => "Home",
            Route::Users => "Users",
            Route::Courses => "Courses",
            Route::Skills => "Skills",
            Route::NotFound(_) => "Not Found",
        }
    }

    /// Shortcut key shown next to the nav link
    pub fn shortcut(&self) -> Option<char> {
        match self {
            Route::Home => Some('1'),
            Route::Users => Some('2'),
            Route::Courses => Some('3'),
            Route::Skills => Some('4'),
            Route::NotFound(_) => None,
        }
    }

    /// Route bound to a key, by number or by initial
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' | 'h' => Some(Route::Home),
            '2' | 'u' => Some(Route::Users),
            '3' | 'c' => Some(Route::Courses),
            '4' | 's' => Some(Route::Skills),
            _ => None,
        }
    }

    /// Position in the nav bar, `None` for unknown paths
    pub fn nav_index(&self) -> Option<usize> {
        Self::NAV.iter().position(|route| route == self)
    }

    /// Nav link after this one, wrapping around
    pub fn next(&self) -> Self {
        let next = self.nav_index().map_or(0, |i| (i + 1) % Self::NAV.len());
        Self::NAV[next].clone()
    }

    /// Nav link before this one, wrapping around
    pub fn previous(&self) -> Self {
        let len = Self::NAV.len();
        let previous = self.nav_index().map_or(0, |i| (i + len - 1) % len);
        Self::NAV[previous].clone()
    }
}
