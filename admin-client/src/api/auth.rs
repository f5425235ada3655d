//! Auth and user administration API
//!
//! Login establishes the httpOnly session cookie; everything afterwards
//! rides on the cookie store. The current-user read is the authority the
//! route guard consults; the on-disk mirror is only ever a hint.

use crate::api::AdminClient;
use crate::error::ClientResult;
use crate::session::SessionUser;
use shared::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserUpdate};
use shared::{ApiResponse, User};
use std::sync::Arc;
use std::time::Duration;

/// How long a settled current-user read keeps answering guard checks before
/// a fresh round trip is forced. Long enough to cover one navigation's burst
/// of checks; short enough that a role change lands on the next page.
pub const CURRENT_USER_TTL: Duration = Duration::from_secs(5);

const CURRENT_USER_KEY: &str = "auth-current-user";
const USERS_KEY: &str = "auth-users";

fn user_key(id: &str) -> String {
    format!("auth-user-{id}")
}

/// Auth API operations.
pub struct AuthApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl AuthApi<'_> {
    /// Log in with email and password. The server answers with a session
    /// cookie; the profile is then fetched to prime the cache and the local
    /// mirror.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let _ack: ApiResponse<LoginResponse> = self.client.http.post("auth/login", &request).await?;

        self.client.cache.invalidate_prefix("auth");
        let user = self.refresh_current_user().await?;
        tracing::info!(user = %user.email, role = %user.role, "logged in");
        Ok(user)
    }

    /// Log out. Local session state is torn down even when the server call
    /// fails, since the operator asked to leave.
    pub async fn logout(&self) -> ClientResult<()> {
        let outcome = self.client.http.post_no_content("auth/logout").await;

        self.client.session.clear();
        self.client.cache.remove(CURRENT_USER_KEY);
        self.client.cache.invalidate_prefix("auth");
        tracing::info!("logged out");
        outcome
    }

    /// The current user, served from a cached read made within
    /// [`CURRENT_USER_TTL`], otherwise fetched live. Refreshes the local
    /// mirror on every live read.
    pub async fn current_user(&self) -> ClientResult<User> {
        let user = self
            .client
            .cache
            .fetch_with_ttl(CURRENT_USER_KEY, CURRENT_USER_TTL, || async move {
                let user: User = self.client.http.get("auth/users/current").await?;
                self.mirror(&user);
                Ok(user)
            })
            .await?;
        Ok((*user).clone())
    }

    /// Force a live current-user read, bypassing the TTL window.
    pub async fn refresh_current_user(&self) -> ClientResult<User> {
        let user: User = self.client.http.get("auth/users/current").await?;
        self.mirror(&user);
        self.client.cache.overwrite(CURRENT_USER_KEY, user.clone());
        Ok(user)
    }

    /// The mirrored user, if any. Synchronous and advisory only: sidebar
    /// rendering between launches, never access control.
    pub fn local_user(&self) -> Option<SessionUser> {
        self.client.session.get_user()
    }

    /// Register a new account (admin-only endpoint).
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<User> {
        request.validate()?;
        let resp: ApiResponse<RegisterResponse> =
            self.client.http.post("auth/register", request).await?;
        self.client.cache.invalidate_prefix("auth");
        Ok(resp.data.user)
    }

    /// List all accounts (admin-only endpoint).
    pub async fn users(&self) -> ClientResult<Arc<Vec<User>>> {
        self.client
            .cache
            .fetch(USERS_KEY, || async move {
                self.client.http.get("auth/users").await
            })
            .await
    }

    /// Patch an account.
    pub async fn update_user(&self, id: &str, patch: &UserUpdate) -> ClientResult<User> {
        patch.validate()?;
        let resp: ApiResponse<User> = self
            .client
            .http
            .patch(&format!("auth/users/{id}"), patch)
            .await?;
        self.client.cache.invalidate(USERS_KEY);
        self.client.cache.overwrite(&user_key(id), resp.data.clone());
        Ok(resp.data)
    }

    /// Delete an account. The server answers 204.
    pub async fn delete_user(&self, id: &str) -> ClientResult<()> {
        self.client
            .http
            .delete_no_content(&format!("auth/users/{id}"))
            .await?;
        self.client.cache.remove(&user_key(id));
        self.client.cache.invalidate(USERS_KEY);
        Ok(())
    }

    fn mirror(&self, user: &User) {
        if let Err(e) = self.client.session.set_user(&SessionUser::from(user)) {
            tracing::warn!("failed to persist session mirror: {e}");
        }
    }
}
