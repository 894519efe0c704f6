use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

/// Outstanding tokens kept before the oldest ones are dropped
pub const MAX_OUTSTANDING_TOKENS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenState {
    Issued,
    // Claimed by a submission that is still being forwarded
    Pending,
    Consumed,
}

#[derive(Debug, Clone, Copy)]
struct TokenEntry {
    state: TokenState,
    issued_at: DateTime<Utc>,
    // Issue order; timestamps can tie
    sequence: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// First use of the token, the submission may be forwarded
    Accepted,
    /// Another submission with this token is still being forwarded
    InFlight,
    /// The token was already used for a successful submission
    Duplicate,
    /// Unknown, expired or evicted token
    Unknown,
}

#[derive(Default)]
struct Tokens {
    entries: HashMap<Uuid, TokenEntry>,
    next_sequence: u64,
}

/// One-time tokens embedded in each rendered create form so a repeated
/// submit of the same form is not forwarded twice
#[derive(Clone)]
pub struct SubmissionGuard {
    tokens: Arc<RwLock<Tokens>>,
    ttl: Duration,
    capacity: usize,
}

impl SubmissionGuard {
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, MAX_OUTSTANDING_TOKENS)
    }

    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(Tokens::default())),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Issue a token for a freshly rendered form
    pub async fn issue(&self) -> Uuid {
        let token = Uuid::new_v4();
        let now = Utc::now();
        let mut tokens = self.tokens.write().await;
        let ttl = self.ttl;
        tokens.entries.retain(|_, entry| now - entry.issued_at <= ttl);

        while tokens.entries.len() >= self.capacity {
            let oldest = tokens
                .entries
                .iter()
                .filter(|(_, entry)| entry.state != TokenState::Pending)
                .min_by_key(|(_, entry)| entry.sequence)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    tokens.entries.remove(&id);
                }
                None => {
                    warn!("All {} submission tokens are in flight", tokens.entries.len());
                    break;
                }
            }
        }

        let sequence = tokens.next_sequence;
        tokens.next_sequence += 1;
        tokens.entries.insert(
            token,
            TokenEntry {
                state: TokenState::Issued,
                issued_at: now,
                sequence,
            },
        );
        token
    }

    /// Reserve the token for one submission
    pub async fn claim(&self, token: &Uuid) -> Claim {
        let now = Utc::now();
        let mut tokens = self.tokens.write().await;
        let Some(entry) = tokens.entries.get_mut(token) else {
            return Claim::Unknown;
        };

        if now - entry.issued_at > self.ttl {
            tokens.entries.remove(token);
            return Claim::Unknown;
        }

        match entry.state {
            TokenState::Issued => {
                entry.state = TokenState::Pending;
                Claim::Accepted
            }
            TokenState::Pending => {
                debug!("Submission for token {} is still in flight", token);
                Claim::InFlight
            }
            TokenState::Consumed => {
                debug!("Duplicate submission for token {}", token);
                Claim::Duplicate
            }
        }
    }

    /// Mark a reserved token as used once the submission went through
    pub async fn complete(&self, token: &Uuid) {
        let mut tokens = self.tokens.write().await;
        if let Some(entry) = tokens.entries.get_mut(token) {
            entry.state = TokenState::Consumed;
        }
    }

    /// Make a reserved token usable again after a failed forward
    pub async fn release(&self, token: &Uuid) {
        let mut tokens = self.tokens.write().await;
        if let Some(entry) = tokens.entries.get_mut(token) {
            if entry.state == TokenState::Pending {
                entry.state = TokenState::Issued;
            }
        }
    }

    pub async fn outstanding(&self) -> usize {
        self.tokens.read().await.entries.len()
    }
}
