use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two top-level views the front end switches between.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Generator,
    Vault,
}

impl ActiveView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Generator => "generator",
            ActiveView::Vault => "vault",
        }
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generator" => Ok(ActiveView::Generator),
            "vault" => Ok(ActiveView::Vault),
            other => Err(format!("unknown view: {}", other)),
        }
    }
}

/// A credential as presented to the front end, with the secret masked unless revealed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialView {
    pub id: String,
    pub title: String,
    pub username: String,
    pub secret: String,
    pub revealed: bool,
    pub website: String,
    pub category: String,
    pub icon: super::credential::CategoryIcon,
    pub notes: String,
    pub created_at: i64,
    pub last_updated: i64,
}

/// Which field of a credential to copy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CopyField {
    Password,
    Username,
}

impl CopyField {
    pub fn label(&self) -> &'static str {
        match self {
            CopyField::Password => "Password",
            CopyField::Username => "Username",
        }
    }
}

impl FromStr for CopyField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "password" => Ok(CopyField::Password),
            "username" => Ok(CopyField::Username),
            other => Err(format!("unknown field: {}", other)),
        }
    }
}
