//! Pages of the client application and the transitions between them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Entry page
    #[default]
    Login,
    Register,
    Dashboard,
}

impl Page {
    /// Route path served by the single entry page
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Where a successful submission on this page leads
    pub fn on_success(&self) -> Self {
        match self {
            Self::Login => Self::Dashboard,
            Self::Register => Self::Login,
            Self::Dashboard => Self::Dashboard,
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
