//! Console state types.
//!
//! This module defines the state held by the shared client-side store. All
//! types are `Clone` to support the functional architecture pattern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// ID Types
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for a user record.
///
/// Owned by the backend; the client treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Wrap a backend-issued identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// User Profile
// ═══════════════════════════════════════════════════════════════════════

/// A user record as returned by the backend.
///
/// The client holds read-mostly cached copies: one inside
/// [`SessionState`] for the signed-in user, and one per row inside the
/// list result. The copies are never reconciled automatically - editing a
/// listed user does not update the session copy even when they are the
/// same person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend-issued identifier.
    pub id: UserId,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Email address (also the login identifier).
    pub email: String,

    /// Phone number in the backend's canonical format.
    #[serde(default)]
    pub phone_number: Option<String>,

    /// Gender, free-form as the backend stores it.
    #[serde(default)]
    pub gender: Option<String>,

    /// URL of the profile image, if one was uploaded.
    #[serde(default)]
    pub profile_image: Option<String>,

    /// Street address.
    #[serde(default)]
    pub address: Option<String>,

    /// City.
    #[serde(default)]
    pub city: Option<String>,

    /// State or region.
    #[serde(default)]
    pub state: Option<String>,

    /// Country.
    #[serde(default)]
    pub country: Option<String>,

    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,

    /// Latitude of the geocoded address.
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude of the geocoded address.
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Whether the account is active (can sign in).
    #[serde(default)]
    pub is_active: bool,

    /// Whether the account's email is verified.
    #[serde(default)]
    pub is_verify: bool,

    /// When the account joined.
    #[serde(default)]
    pub joining_date: Option<DateTime<Utc>>,

    /// Server-computed booking count. Never derived client-side.
    #[serde(default)]
    pub booking_count: u64,

    /// Server-computed review count. Never derived client-side.
    #[serde(default)]
    pub review_count: u64,
}

impl UserProfile {
    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Session
// ═══════════════════════════════════════════════════════════════════════

/// Session slice of the console state.
///
/// Invariant: `token` and `user` are set and cleared together under normal
/// flow (login sets both, logout/expiry clears both). The store does not
/// enforce atomicity - [`SessionState::establish`] and
/// [`SessionState::reset`] perform both writes in one call, and reducers
/// only mutate the pair through them (profile edit replaces `user` alone,
/// the one sanctioned exception).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Bearer token for the signed-in user, if any.
    pub token: Option<String>,

    /// Cached record of the signed-in user, if any.
    pub user: Option<UserProfile>,

    /// Count of tracked requests currently in flight.
    loading_count: u32,
}

impl SessionState {
    /// Build session state from a persisted document, if one exists.
    #[must_use]
    pub fn from_persisted(persisted: Option<PersistedSession>) -> Self {
        match persisted {
            Some(session) => Self {
                token: Some(session.token),
                user: Some(session.user),
                loading_count: 0,
            },
            None => Self::default(),
        }
    }

    /// True when a bearer token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Set token and user together (login).
    pub fn establish(&mut self, token: String, user: UserProfile) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Clear token and user together (logout, expiry).
    pub fn reset(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Mark a tracked request as started.
    ///
    /// The counter is reentrant: nested or concurrent in-flight calls each
    /// increment, so the global busy flag clears only when the last one
    /// finishes.
    pub fn begin_loading(&mut self) {
        self.loading_count += 1;
    }

    /// Mark a tracked request as finished. Floored at zero.
    pub fn end_loading(&mut self) {
        self.loading_count = self.loading_count.saturating_sub(1);
    }

    /// Global busy flag: true while any tracked request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading_count > 0
    }

    /// Number of tracked requests currently in flight.
    #[must_use]
    pub const fn loading_count(&self) -> u32 {
        self.loading_count
    }
}

/// The session document persisted to durable client storage.
///
/// Two logical keys in one document: the opaque auth token and the
/// serialized current-user record. Read at startup, written on
/// login/profile-update, cleared on logout or unauthorized response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Opaque bearer token.
    pub token: String,

    /// Serialized current-user record.
    pub user: UserProfile,
}

// ═══════════════════════════════════════════════════════════════════════
// User List
// ═══════════════════════════════════════════════════════════════════════

/// The effective query driving the user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Effective (debounced) search text.
    pub search_text: String,

    /// Requested page, 1-based.
    pub page: u64,

    /// Requested page size.
    pub page_size: u64,
}

impl ListQuery {
    /// Initial query for a given page size.
    #[must_use]
    pub const fn initial(page_size: u64) -> Self {
        Self {
            search_text: String::new(),
            page: 1,
            page_size,
        }
    }
}

/// One page of list results, replaced wholesale on every accepted fetch.
///
/// `page`, `page_size`, and `total` are the server's echoed values and are
/// authoritative over whatever the client requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    /// Records on this page.
    pub items: Vec<UserProfile>,

    /// Total matching records across all pages.
    pub total: u64,

    /// Echoed page number.
    pub page: u64,

    /// Echoed page size.
    pub page_size: u64,
}

/// List-controller slice of the console state.
///
/// State machine per mount: `Idle → Fetching → Idle(with data) |
/// Idle(with error)`. Raw search input is debounced before it becomes part
/// of the effective [`ListQuery`]; every issued fetch carries a sequence
/// number so superseded responses can be discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListState {
    /// Raw search input as typed, ahead of the debounce.
    pub search_input: String,

    /// Generation counter for debounce timers. A timer fires into the
    /// reducer carrying the generation it was scheduled with; anything but
    /// the latest is a cancelled keystroke.
    pub search_generation: u64,

    /// The effective query (post-debounce search text, page, page size).
    pub query: ListQuery,

    /// Last accepted page of results. Kept in place when a fetch fails.
    pub page: Option<ListPage>,

    /// Message from the most recent failed fetch, cleared on success.
    pub last_error: Option<String>,

    /// When the last accepted fetch completed.
    pub last_synced_at: Option<DateTime<Utc>>,

    /// Sequence number of the most recently issued fetch. A completion
    /// whose sequence is older is stale and must not overwrite state.
    pub latest_sequence: u64,

    /// Count of list fetches currently in flight.
    fetches_in_flight: u32,
}

impl UserListState {
    /// Fresh list state with the configured page size.
    #[must_use]
    pub const fn new(page_size: u64) -> Self {
        Self {
            search_input: String::new(),
            search_generation: 0,
            query: ListQuery::initial(page_size),
            page: None,
            last_error: None,
            last_synced_at: None,
            latest_sequence: 0,
            fetches_in_flight: 0,
        }
    }

    /// Issue the next fetch sequence number.
    pub fn next_sequence(&mut self) -> u64 {
        self.latest_sequence += 1;
        self.fetches_in_flight += 1;
        self.latest_sequence
    }

    /// Record a fetch completion; returns `true` when the completion is
    /// current (not superseded by a later fetch).
    pub fn complete_fetch(&mut self, sequence: u64) -> bool {
        self.fetches_in_flight = self.fetches_in_flight.saturating_sub(1);
        sequence == self.latest_sequence
    }

    /// True while any list fetch is in flight.
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.fetches_in_flight > 0
    }
}

impl Default for UserListState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Root State
// ═══════════════════════════════════════════════════════════════════════

/// Root state of the shared console store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleState {
    /// Session slice: token, signed-in user, global busy counter.
    pub session: SessionState,

    /// User-management list slice.
    pub users: UserListState,
}

impl ConsoleState {
    /// Hydrate initial state from the persisted session document.
    ///
    /// Runs synchronously at process start, before the store exists, so a
    /// page reload restores the session without re-authentication.
    #[must_use]
    pub fn restore(persisted: Option<PersistedSession>, default_page_size: u64) -> Self {
        Self {
            session: SessionState::from_persisted(persisted),
            users: UserListState::new(default_page_size),
        }
    }
}
