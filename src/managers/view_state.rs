//! Ephemeral presentation state for SecureVault.
//!
//! Holds which view is active, the vault's search/filter inputs, which secrets
//! are revealed, and the generator's last output. None of this is domain data.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use zeroize::Zeroizing;

use crate::types::credential::CategoryFilter;
use crate::types::view::ActiveView;

/// How long the "copied" indicator stays on after a successful copy.
pub const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// Placeholder rendered in place of a hidden secret.
pub const MASKED_SECRET: &str = "••••••••••••";

pub struct ViewState {
    active: ActiveView,
    search: String,
    filter: CategoryFilter,
    revealed: HashSet<String>,
    generated: Option<Zeroizing<String>>,
    show_generated: bool,
    copied_at: Option<Instant>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            active: ActiveView::Generator,
            search: String::new(),
            filter: CategoryFilter::All,
            revealed: HashSet::new(),
            generated: None,
            show_generated: true,
            copied_at: None,
        }
    }

    // ─── Tabs ───

    pub fn active_view(&self) -> ActiveView {
        self.active
    }

    pub fn switch_view(&mut self, view: ActiveView) {
        self.active = view;
    }

    // ─── Vault search / filter ───

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    // ─── Per-record visibility ───

    /// Flips visibility of the secret for `id`. Returns the new state.
    pub fn toggle_revealed(&mut self, id: &str) -> bool {
        if self.revealed.remove(id) {
            false
        } else {
            self.revealed.insert(id.to_string());
            true
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Drops visibility state for a record that no longer exists.
    pub fn forget(&mut self, id: &str) {
        self.revealed.remove(id);
    }

    // ─── Generator output ───

    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref().map(|s| s.as_str())
    }

    /// Replaces the last generated password; the previous one is wiped.
    pub fn set_generated(&mut self, password: String) {
        self.generated = Some(Zeroizing::new(password));
        self.copied_at = None;
    }

    pub fn show_generated(&self) -> bool {
        self.show_generated
    }

    pub fn toggle_show_generated(&mut self) -> bool {
        self.show_generated = !self.show_generated;
        self.show_generated
    }

    /// Generated password as it should be displayed.
    pub fn generated_display(&self) -> Option<String> {
        self.generated().map(|pw| {
            if self.show_generated {
                pw.to_string()
            } else {
                "•".repeat(pw.chars().count())
            }
        })
    }

    pub fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    pub fn is_copied(&self) -> bool {
        self.copied_at
            .map(|at| at.elapsed() < COPIED_FEEDBACK)
            .unwrap_or(false)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
