//! Navigation bar.
//!
//! "Contact" and "Login" both point at `/contact`, so both light up there. The Login target
//! is kept as it is until someone decides where it should go.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

pub const DEFAULT_LINKS: [NavLink; 4] = [
    NavLink { path: "/", label: "Home" },
    NavLink { path: "/about", label: "About" },
    NavLink { path: "/contact", label: "Contact" },
    NavLink { path: "/contact", label: "Login" },
];

#[derive(Debug, Clone)]
pub struct NavBar {
    links: Vec<NavLink>,
    current_path: String,
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new(DEFAULT_LINKS.to_vec(), "/")
    }
}

impl NavBar {
    pub fn new(links: Vec<NavLink>, current_path: impl Into<String>) -> Self {
        Self {
            links,
            current_path: current_path.into(),
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn navigate(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    pub fn is_active(&self, link: &NavLink) -> bool {
        link.path == self.current_path
    }

    /// Labels of the highlighted entries.
    pub fn active_labels(&self) -> Vec<&'static str> {
        self.links
            .iter()
            .filter(|l| self.is_active(l))
            .map(|l| l.label)
            .collect()
    }
}

impl Display for NavBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items: Vec<String> = self
            .links
            .iter()
            .map(|l| {
                if self.is_active(l) {
                    format!("[{}]", l.label)
                } else {
                    format!(" {} ", l.label)
                }
            })
            .collect();
        write!(f, "{}", items.join(" "))
    }
}
