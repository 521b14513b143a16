use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::errors::VaultError;

/// Fixed set of tags used to group and filter credentials.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Personal,
    Work,
    Development,
    Entertainment,
    Shopping,
    Finance,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Personal,
        Category::Work,
        Category::Development,
        Category::Entertainment,
        Category::Shopping,
        Category::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Development => "Development",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Finance => "Finance",
        }
    }

    /// Icon hint shown next to a record of this category.
    pub fn icon(&self) -> CategoryIcon {
        match self {
            Category::Work | Category::Development => CategoryIcon::Key,
            Category::Entertainment => CategoryIcon::Globe,
            Category::Shopping | Category::Finance => CategoryIcon::CreditCard,
            Category::Personal => CategoryIcon::Wifi,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VaultError::UnknownCategory(s.to_string()))
    }
}

/// Icon hint for a category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIcon {
    Key,
    Globe,
    CreditCard,
    Wifi,
}

/// Category filter applied when querying the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => f.write_str(c.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

/// A stored credential. The secret is wiped from memory when the record is dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct CredentialRecord {
    pub id: String,
    pub title: String,
    pub username: String,
    pub secret: String,
    pub website: String,
    #[zeroize(skip)]
    pub category: Category,
    pub notes: String,
    pub created_at: i64,
    pub last_updated: i64,
}

/// Fields supplied when adding a credential. Built with `new` and the setters.
#[derive(Debug, Clone, Default, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct NewCredential {
    pub title: String,
    pub username: String,
    pub secret: String,
    pub website: String,
    #[zeroize(skip)]
    pub category: Category,
    pub notes: String,
}

impl NewCredential {
    pub fn new(title: &str, secret: &str) -> Self {
        Self {
            title: title.to_string(),
            username: String::new(),
            secret: secret.to_string(),
            website: String::new(),
            category: Category::default(),
            notes: String::new(),
        }
    }

    pub fn username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    pub fn website(mut self, website: &str) -> Self {
        self.website = website.to_string();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }
}

/// Partial replacement of a credential's editable fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialUpdate {
    pub title: Option<String>,
    pub username: Option<String>,
    pub secret: Option<String>,
    pub website: Option<String>,
    pub category: Option<Category>,
    pub notes: Option<String>,
}

impl CredentialUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.username.is_none()
            && self.secret.is_none()
            && self.website.is_none()
            && self.category.is_none()
            && self.notes.is_none()
    }
}

/// Aggregate figures shown in the vault header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultStats {
    pub stored: usize,
    /// Mean strength meter value of all stored secrets, 0 when empty.
    pub security_score: u8,
    pub categories_in_use: usize,
}
