//! Tab catalogue
//!
//! The dashboard has a fixed, ordered set of top-level tabs. Each tab id
//! selects exactly one content view.

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    /// Payment initiation
    #[default]
    Payment,
    /// Transaction history
    History,
}

impl TabId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Payment => "payment",
            TabId::History => "history",
        }
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabId {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "payment" => Ok(TabId::Payment),
            "history" => Ok(TabId::History),
            _ => Err(ShellError::UnknownTab(s.to_string())),
        }
    }
}

/// Icons the shell draws. The markup maps each one to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    CreditCard,
    History,
    Menu,
    Close,
    LogOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub id: TabId,
    pub label: &'static str,
    pub icon: Icon,
}

/// Navigation order of the dashboard tabs
pub const TABS: [TabSpec; 2] = [
    TabSpec {
        id: TabId::Payment,
        label: "Pay",
        icon: Icon::CreditCard,
    },
    TabSpec {
        id: TabId::History,
        label: "History",
        icon: Icon::History,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tab_ids_are_unique() {
        let ids: HashSet<_> = TABS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TABS.len());
    }

    #[test]
    fn test_tab_order_and_labels() {
        assert_eq!(TABS[0].id, TabId::Payment);
        assert_eq!(TABS[0].label, "Pay");
        assert_eq!(TABS[1].id, TabId::History);
        assert_eq!(TABS[1].label, "History");
    }

    #[test]
    fn test_parse_tab_id() {
        assert_eq!("payment".parse::<TabId>().unwrap(), TabId::Payment);
        assert_eq!(" History ".parse::<TabId>().unwrap(), TabId::History);
        assert!(matches!(
            "settings".parse::<TabId>(),
            Err(ShellError::UnknownTab(_))
        ));
    }

    #[test]
    fn test_tab_id_serde_is_lowercase() {
        let json = serde_json::to_string(&TabId::History).unwrap();
        assert_eq!(json, "\"history\"");
        let back: TabId = serde_json::from_str("\"payment\"").unwrap();
        assert_eq!(back, TabId::Payment);
    }
}
