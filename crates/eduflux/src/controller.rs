//! Process-wide session and route state machine
//!
//! Holds the current authenticated identity and current route,
//! restores a session from the persisted token at startup, and
//! enforces the page-access rules.

use crate::database::TokenStore;
use crate::models::{Role, User};
use crate::{Eduflux, EdufluxEvent, Result, Success};

/// Application route
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum Route {
    Home,
    Login,
    Register,
    StudentDashboard,
    AdminDashboard,
    AdminUsers,
    Courses,
    CourseDetail { course_id: String },
    LearningRoadmap,
    CareerQuiz,
    AiTools,
    ResumeBuilder,
    DsaLearning,
    FutureTrends,
    DsaProblems,
    Resources,
    ProfileSettings,
    Leaderboard,
}

impl Route {
    /// Whether this route requires an authenticated user
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Home | Route::Login | Route::Register)
    }

    /// Whether this route only makes sense logged out
    pub fn is_public_only(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

fn home_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard,
        Role::Student => Route::StudentDashboard,
    }
}

/// Session and navigation state
pub struct SessionController {
    eduflux: Eduflux,
    token_store: TokenStore,

    current_user: Option<User>,
    route: Route,
    auth_loading: bool,
}

impl SessionController {
    pub fn new(eduflux: Eduflux, token_store: TokenStore) -> SessionController {
        SessionController {
            eduflux,
            token_store,
            current_user: None,
            route: Route::Home,
            auth_loading: true,
        }
    }

    /// Restore identity from the persisted token, once, at startup
    ///
    /// Only the id inside the token is trusted; the authoritative
    /// record is re-fetched from the store. Any failure along the way
    /// discards the token and leaves the session logged out.
    pub async fn restore(&mut self) -> Success {
        if !self.auth_loading {
            return Ok(());
        }

        if let Some(token) = self.token_store.get().await? {
            let mut adopted = false;

            if let Some(claims) = self.eduflux.decode_token(&token) {
                if !claims.is_expired() {
                    if let Ok(user) = self.eduflux.database.find_user(&claims.user.id).await {
                        // A fresh load on a public page lands on the
                        // role-appropriate dashboard
                        if !self.route.is_protected() {
                            self.route = home_route(user.role);
                        }

                        self.current_user = Some(user);
                        adopted = true;
                    }
                }
            }

            if !adopted {
                warn!("Discarding invalid or stale session token");
                self.token_store.remove().await?;
            }
        }

        self.auth_loading = false;
        self.apply_guard();

        Ok(())
    }

    /// Adopt an authenticated user: issue and persist a fresh token,
    /// then land on the role-appropriate dashboard
    pub async fn login(&mut self, user: User) -> Success {
        let token = self.eduflux.create_token(&user);
        self.token_store.set(&token).await?;

        self.eduflux
            .publish_event(EdufluxEvent::SessionCreated {
                user_id: user.id.clone(),
            })
            .await;

        self.route = home_route(user.role);
        self.current_user = Some(user);

        Ok(())
    }

    /// Clear the session and return to the public home page
    pub async fn logout(&mut self) -> Success {
        self.token_store.remove().await?;

        if let Some(user) = self.current_user.take() {
            self.eduflux
                .publish_event(EdufluxEvent::SessionDestroyed { user_id: user.id })
                .await;
        }

        self.route = Route::Home;

        Ok(())
    }

    /// Route-state change, subject to the guard
    pub fn navigate(&mut self, route: Route) {
        self.route = route;

        if !self.auth_loading {
            self.apply_guard();
        }
    }

    /// Persist a profile update and re-issue the session token so the
    /// embedded snapshot stays current
    pub async fn update_user(&mut self, user: User) -> Result<User> {
        let updated = user.update(&self.eduflux).await?;

        let token = self.eduflux.create_token(&updated);
        self.token_store.set(&token).await?;
        self.current_user = Some(updated.clone());

        Ok(updated)
    }

    /// Page-access rules
    ///
    /// Idempotent: applying it twice to a stable state produces no
    /// further transition.
    fn apply_guard(&mut self) {
        match &self.current_user {
            None if self.route.is_protected() => self.route = Route::Login,
            Some(user) if self.route.is_public_only() => self.route = home_route(user.role),
            _ => {}
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn is_auth_loading(&self) -> bool {
        self.auth_loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::for_test;

    async fn controller() -> SessionController {
        let (eduflux, _receiver) = for_test().await;
        SessionController::new(eduflux, TokenStore::default())
    }

    #[async_std::test]
    async fn guard_redirects_unauthenticated_to_login() {
        let mut controller = controller().await;
        controller.restore().await.unwrap();

        controller.navigate(Route::StudentDashboard);
        assert_eq!(controller.route(), &Route::Login);

        // Idempotent: a second evaluation does not move again
        controller.navigate(Route::Login);
        assert_eq!(controller.route(), &Route::Login);

        // Public pages stay reachable
        controller.navigate(Route::Home);
        assert_eq!(controller.route(), &Route::Home);
    }

    #[async_std::test]
    async fn guard_redirects_authenticated_from_public_only_pages() {
        let mut controller = controller().await;
        controller.restore().await.unwrap();

        let user = User::fetch(&controller.eduflux, "student01").await.unwrap();
        controller.login(user).await.unwrap();
        assert_eq!(controller.route(), &Route::StudentDashboard);

        controller.navigate(Route::Login);
        assert_eq!(controller.route(), &Route::StudentDashboard);

        controller.navigate(Route::Courses);
        assert_eq!(controller.route(), &Route::Courses);
    }

    #[async_std::test]
    async fn admin_lands_on_admin_dashboard() {
        let mut controller = controller().await;
        controller.restore().await.unwrap();

        let admin = User::fetch(&controller.eduflux, "admin01").await.unwrap();
        controller.login(admin).await.unwrap();

        assert_eq!(controller.route(), &Route::AdminDashboard);
    }

    #[async_std::test]
    async fn guard_waits_for_auth_loading() {
        let mut controller = controller().await;

        // Before restore resolves, navigation is not judged yet
        controller.navigate(Route::StudentDashboard);
        assert_eq!(controller.route(), &Route::StudentDashboard);

        // Restoring without a token settles it
        controller.restore().await.unwrap();
        assert_eq!(controller.route(), &Route::Login);
        assert!(!controller.is_auth_loading());
    }

    #[async_std::test]
    async fn restore_adopts_fresh_user_record() {
        let (eduflux, _receiver) = for_test().await;
        let store = TokenStore::default();

        let mut first = SessionController::new(eduflux.clone(), store.clone());
        first.restore().await.unwrap();
        let user = User::fetch(&eduflux, "student01").await.unwrap();
        first.login(user).await.unwrap();

        // The record changes after the token was issued
        let mut renamed = User::fetch(&eduflux, "student01").await.unwrap();
        renamed.name = "Alexandra Johnson".to_string();
        renamed.update(&eduflux).await.unwrap();

        let mut second = SessionController::new(eduflux, store);
        second.restore().await.unwrap();

        // The stale snapshot in the token was not trusted
        let current = second.current_user().expect("restored user");
        assert_eq!(current.name, "Alexandra Johnson");
        assert_eq!(second.route(), &Route::StudentDashboard);
    }

    #[async_std::test]
    async fn restore_clears_token_of_deleted_user() {
        let (eduflux, _receiver) = for_test().await;
        let store = TokenStore::default();

        let mut first = SessionController::new(eduflux.clone(), store.clone());
        first.restore().await.unwrap();
        let user = User::fetch(&eduflux, "student01").await.unwrap();
        first.login(user).await.unwrap();

        User::delete(&eduflux, "student01").await.unwrap();

        let mut second = SessionController::new(eduflux, store.clone());
        second.restore().await.unwrap();

        assert!(second.current_user().is_none());
        assert_eq!(store.get().await.unwrap(), None);
    }

    #[async_std::test]
    async fn restore_clears_expired_token() {
        let (eduflux, _receiver) = for_test().await;
        let store = TokenStore::default();

        // A well-signed token whose expiry has already passed
        let user = User::fetch(&eduflux, "student01").await.unwrap();
        let claims = crate::models::TokenClaims {
            user,
            exp: chrono::Utc::now().timestamp() - 60,
        };
        let token = eduflux.config.session.secret.sign_claims(&claims);
        store.set(&token).await.unwrap();

        let mut controller = SessionController::new(eduflux, store.clone());
        controller.restore().await.unwrap();

        assert!(controller.current_user().is_none());
        assert_eq!(controller.route(), &Route::Home);
        assert_eq!(store.get().await.unwrap(), None);
    }

    #[async_std::test]
    async fn restore_clears_malformed_token() {
        let (eduflux, _receiver) = for_test().await;
        let store = TokenStore::default();
        store.set("garbage").await.unwrap();

        let mut controller = SessionController::new(eduflux, store.clone());
        controller.restore().await.unwrap();

        assert!(controller.current_user().is_none());
        assert_eq!(store.get().await.unwrap(), None);
    }

    #[async_std::test]
    async fn logout_returns_home_and_forgets_token() {
        let mut controller = controller().await;
        controller.restore().await.unwrap();

        let user = User::fetch(&controller.eduflux, "student01").await.unwrap();
        controller.login(user).await.unwrap();

        controller.logout().await.unwrap();

        assert!(controller.current_user().is_none());
        assert_eq!(controller.route(), &Route::Home);
        assert_eq!(controller.token_store.get().await.unwrap(), None);

        // Protected pages are gated again
        controller.navigate(Route::ProfileSettings);
        assert_eq!(controller.route(), &Route::Login);
    }

    #[async_std::test]
    async fn profile_update_reissues_token() {
        let mut controller = controller().await;
        controller.restore().await.unwrap();

        let user = User::fetch(&controller.eduflux, "student01").await.unwrap();
        controller.login(user.clone()).await.unwrap();
        let before = controller.token_store.get().await.unwrap().unwrap();

        let mut renamed = user;
        renamed.name = "Alexandra Johnson".to_string();
        let updated = controller.update_user(renamed).await.unwrap();
        assert_eq!(updated.name, "Alexandra Johnson");

        let after = controller.token_store.get().await.unwrap().unwrap();
        let claims = controller.eduflux.decode_token(&after).expect("claims");
        assert_eq!(claims.user.name, "Alexandra Johnson");

        // The snapshot in the old token is stale by design
        let stale = controller.eduflux.decode_token(&before).expect("claims");
        assert_eq!(stale.user.name, "Alex Johnson");
    }
}
