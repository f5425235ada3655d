//! Route guard
//!
//! Every protected view resolves the session through a guard before
//! rendering. The guard distinguishes "not authenticated" (no valid session;
//! goes to the login route) from "authenticated but unauthorized" (valid
//! session, wrong role; goes back to the dashboard, since the user *is* signed
//! in, bouncing them to login would be wrong). While unresolved it reports
//! `Resolving` and never yields a navigation decision, so there is no
//! redirect flicker racing the in-flight check.

use crate::api::AdminClient;
use crate::error::ClientResult;
use shared::{Role, User};

/// Where a rejected navigation should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The login route (no valid session).
    Login,
    /// The general dashboard (signed in, insufficient role).
    Dashboard,
}

/// Resolution state of one guarded navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardState {
    /// The current-user read has not settled yet; render a loading
    /// indicator, nothing else.
    Resolving,
    /// Session is valid and the role requirement (if any) is met; render
    /// the guarded content.
    Authorized(User),
    /// No valid session.
    Unauthorized,
    /// Valid session but the required role is missing.
    Forbidden(User),
}

impl GuardState {
    /// Whether the guarded content should render.
    pub fn should_render(&self) -> bool {
        matches!(self, GuardState::Authorized(_))
    }

    /// The redirect this state calls for, if any. `None` while resolving or
    /// when access was granted.
    pub fn destination(&self) -> Option<Destination> {
        match self {
            GuardState::Unauthorized => Some(Destination::Login),
            GuardState::Forbidden(_) => Some(Destination::Dashboard),
            GuardState::Resolving | GuardState::Authorized(_) => None,
        }
    }
}

/// Guard for one protected view. Terminal per navigation: once resolved it
/// does not re-check until a new guard is constructed for the next
/// navigation.
#[derive(Debug)]
pub struct RouteGuard {
    required_role: Option<Role>,
    state: GuardState,
}

impl RouteGuard {
    /// Guard requiring any authenticated session.
    pub fn new() -> Self {
        Self {
            required_role: None,
            state: GuardState::Resolving,
        }
    }

    /// Guard additionally requiring `role`.
    pub fn require_role(role: Role) -> Self {
        Self {
            required_role: Some(role),
            state: GuardState::Resolving,
        }
    }

    /// Current resolution state.
    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Resolve the session against the server. Reuses a current-user read
    /// made within the last few seconds (see
    /// [`crate::api::auth::CURRENT_USER_TTL`]); the local session mirror is
    /// never trusted for this decision.
    pub async fn resolve(&mut self, client: &AdminClient) -> &GuardState {
        let outcome = client.auth().current_user().await;
        self.state = Self::decide(outcome, self.required_role);
        if let Some(destination) = self.state.destination() {
            tracing::debug!(?destination, "guard rejected navigation");
        }
        &self.state
    }

    /// Pure decision from a settled current-user read.
    pub fn decide(outcome: ClientResult<User>, required_role: Option<Role>) -> GuardState {
        match outcome {
            Ok(user) => match required_role {
                Some(role) if user.role != role => GuardState::Forbidden(user),
                _ => GuardState::Authorized(user),
            },
            Err(e) => {
                tracing::debug!("current-user read failed: {e}");
                GuardState::Unauthorized
            }
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    fn user(role: Role) -> User {
        User {
            id: "u1".into(),
            name: "Olena".into(),
            email: "olena@example.org".into(),
            role,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn admin_requirement_rejects_editor_to_dashboard() {
        let state = RouteGuard::decide(Ok(user(Role::Editor)), Some(Role::Admin));
        assert!(matches!(state, GuardState::Forbidden(_)));
        assert_eq!(state.destination(), Some(Destination::Dashboard));
        assert!(!state.should_render());
    }

    #[test]
    fn failed_read_goes_to_login() {
        let state = RouteGuard::decide(Err(ClientError::Unauthorized), Some(Role::Admin));
        assert_eq!(state, GuardState::Unauthorized);
        assert_eq!(state.destination(), Some(Destination::Login));
    }

    #[test]
    fn no_role_requirement_admits_any_session() {
        let state = RouteGuard::decide(Ok(user(Role::Editor)), None);
        assert!(state.should_render());
        assert_eq!(state.destination(), None);
    }

    #[test]
    fn resolving_never_navigates() {
        let guard = RouteGuard::require_role(Role::Admin);
        assert_eq!(guard.state().destination(), None);
        assert!(!guard.state().should_render());
    }
}
