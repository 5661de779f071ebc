//! Player accounts and per-level leaderboards
//!
//! The registry is an explicit value owned by the session; accounts are
//! looked up by name and handed out as [`AccountId`]s.

use serde::{Deserialize, Serialize};

use crate::sim::LevelNumber;

/// Default leaderboard length
pub const DEFAULT_TOP_SCORES: usize = 3;

/// A single completed run. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    level: LevelNumber,
    value: u32,
    /// Unix timestamp (ms) when achieved
    timestamp_ms: u64,
}

impl Score {
    pub fn new(level: LevelNumber, value: u32, timestamp_ms: u64) -> Self {
        Self {
            level,
            value,
            timestamp_ms,
        }
    }

    pub fn level(&self) -> LevelNumber {
        self.level
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }
}

/// A named collection of scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    name: String,
    scores: Vec<Score>,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Record a score achieved now. Zero scores are not kept.
    /// Returns whether the score was recorded.
    pub fn add_score(&mut self, level: LevelNumber, value: u32) -> bool {
        self.add_score_at(level, value, crate::now_ms())
    }

    /// Record a score with an explicit timestamp
    pub fn add_score_at(&mut self, level: LevelNumber, value: u32, timestamp_ms: u64) -> bool {
        if value == 0 {
            return false;
        }
        self.scores.push(Score::new(level, value, timestamp_ms));
        true
    }

    /// Best score on `level`; the earliest wins a tie
    pub fn best_score(&self, level: LevelNumber) -> Option<&Score> {
        let mut best: Option<&Score> = None;
        for score in self.scores.iter().filter(|s| s.level == level) {
            if best.is_none_or(|b| score.value > b.value) {
                best = Some(score);
            }
        }
        best
    }
}

/// Handle to an account inside an [`AccountRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(usize);

/// Name-keyed account registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Look up an account by name, creating it if absent.
    /// The same name always yields the same id.
    pub fn get_or_create(&mut self, name: &str) -> AccountId {
        if let Some(id) = self.find(name) {
            return id;
        }
        self.accounts.push(Account::new(name));
        AccountId(self.accounts.len() - 1)
    }

    pub fn find(&self, name: &str) -> Option<AccountId> {
        self.accounts
            .iter()
            .position(|a| a.name == name)
            .map(AccountId)
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id.0)
    }

    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Total number of scores across all accounts
    pub fn score_count(&self) -> usize {
        self.accounts.iter().map(|a| a.scores.len()).sum()
    }

    /// Top `n` scores on `level` across every account, highest first.
    /// Ties keep insertion order (account order, then score order).
    /// Returns fewer than `n` entries when fewer exist.
    pub fn top_scores(&self, level: LevelNumber, n: usize) -> Vec<&Score> {
        let mut scores: Vec<&Score> = self
            .accounts
            .iter()
            .flat_map(|a| a.scores.iter())
            .filter(|s| s.level == level)
            .collect();
        scores.sort_by(|a, b| b.value.cmp(&a.value));
        scores.truncate(n);
        scores
    }
}

/// Format a timestamp as a relative age string
pub fn format_age(timestamp_ms: u64, now_ms: u64) -> String {
    let diff_secs = now_ms.saturating_sub(timestamp_ms) / 1000;
    let mins = diff_secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if days >= 14 {
        format!("{} weeks ago", days / 7)
    } else if days >= 7 {
        "1 week ago".to_string()
    } else if days >= 2 {
        format!("{} days ago", days)
    } else if days == 1 {
        "Yesterday".to_string()
    } else if hours >= 2 {
        format!("{} hours ago", hours)
    } else if hours == 1 {
        "1 hour ago".to_string()
    } else if mins >= 2 {
        format!("{} mins ago", mins)
    } else if mins == 1 {
        "1 min ago".to_string()
    } else {
        "Just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: u64 = 60 * 1000;
    const HOUR: u64 = 60 * MIN;
    const DAY: u64 = 24 * HOUR;

    #[test]
    fn test_same_name_same_account() {
        let mut registry = AccountRegistry::new();
        let a = registry.get_or_create("Ann");
        let b = registry.get_or_create("Ann");
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);

        registry
            .account_mut(a)
            .unwrap()
            .add_score_at(LevelNumber::L0, 9000, 1);
        let seen = registry.account(b).unwrap();
        assert_eq!(seen.scores().len(), 1);
        assert_eq!(seen.scores()[0].value(), 9000);
    }

    #[test]
    fn test_distinct_names_distinct_accounts() {
        let mut registry = AccountRegistry::new();
        let ann = registry.get_or_create("Ann");
        let bob = registry.get_or_create("Bob");
        assert_ne!(ann, bob);
        assert_eq!(registry.find("Bob"), Some(bob));
        assert_eq!(registry.find("Cat"), None);
    }

    #[test]
    fn test_zero_score_not_recorded() {
        let mut account = Account::new("Ann");
        assert!(!account.add_score(LevelNumber::L0, 0));
        assert!(account.add_score(LevelNumber::L0, 1));
        assert_eq!(account.scores().len(), 1);
    }

    #[test]
    fn test_best_score_per_level() {
        let mut account = Account::new("Ann");
        assert!(account.best_score(LevelNumber::L0).is_none());
        account.add_score_at(LevelNumber::L0, 500, 1);
        account.add_score_at(LevelNumber::L1, 9999, 2);
        account.add_score_at(LevelNumber::L0, 800, 3);
        account.add_score_at(LevelNumber::L0, 800, 4);

        let best = account.best_score(LevelNumber::L0).unwrap();
        assert_eq!(best.value(), 800);
        assert_eq!(best.timestamp_ms(), 3);
    }

    #[test]
    fn test_top_scores_single_entry_not_padded() {
        let mut registry = AccountRegistry::new();
        let ann = registry.get_or_create("Ann");
        registry
            .account_mut(ann)
            .unwrap()
            .add_score_at(LevelNumber::L2, 4321, 1);

        let top = registry.top_scores(LevelNumber::L2, 3);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].value(), 4321);
        assert!(registry.top_scores(LevelNumber::L1, 3).is_empty());
    }

    #[test]
    fn test_top_scores_descending_stable() {
        let mut registry = AccountRegistry::new();
        let ann = registry.get_or_create("Ann");
        let bob = registry.get_or_create("Bob");
        {
            let a = registry.account_mut(ann).unwrap();
            a.add_score_at(LevelNumber::L0, 100, 1);
            a.add_score_at(LevelNumber::L0, 300, 2);
        }
        {
            let b = registry.account_mut(bob).unwrap();
            b.add_score_at(LevelNumber::L0, 300, 3);
            b.add_score_at(LevelNumber::L0, 200, 4);
            b.add_score_at(LevelNumber::L1, 999, 5);
        }

        let top = registry.top_scores(LevelNumber::L0, 3);
        let values: Vec<_> = top.iter().map(|s| (s.value(), s.timestamp_ms())).collect();
        assert_eq!(values, vec![(300, 2), (300, 3), (200, 4)]);
        assert_eq!(registry.score_count(), 5);
    }

    #[test]
    fn test_format_age() {
        let now = 100 * DAY;
        assert_eq!(format_age(now, now), "Just now");
        assert_eq!(format_age(now - MIN, now), "1 min ago");
        assert_eq!(format_age(now - 5 * MIN, now), "5 mins ago");
        assert_eq!(format_age(now - HOUR, now), "1 hour ago");
        assert_eq!(format_age(now - 3 * HOUR, now), "3 hours ago");
        assert_eq!(format_age(now - DAY, now), "Yesterday");
        assert_eq!(format_age(now - 3 * DAY, now), "3 days ago");
        assert_eq!(format_age(now - 8 * DAY, now), "1 week ago");
        assert_eq!(format_age(now - 21 * DAY, now), "3 weeks ago");
        // Clock skew: timestamps from the future read as now
        assert_eq!(format_age(now + DAY, now), "Just now");
    }
}
