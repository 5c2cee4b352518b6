//! Account registration, login, and session lookup.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use lobbyforge_model::{Account, Player, PlayerId};
use lobbyforge_session::{SessionCache, generate_token, session_key};
use lobbyforge_store::Store;

use crate::ServiceError;

/// Level a freshly registered player starts at.
const STARTING_LEVEL: u32 = 1;

#[derive(Debug, Clone)]
pub struct AccountService {
    store: Arc<Store>,
    sessions: Arc<SessionCache<String>>,
    session_ttl: Duration,
}

impl AccountService {
    pub fn new(
        store: Arc<Store>,
        sessions: Arc<SessionCache<String>>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            store,
            sessions,
            session_ttl,
        }
    }

    /// Creates an account and its player profile, returning the account
    /// token.
    ///
    /// The username is the account id. The duplicate check and both
    /// inserts happen in one write transaction, so of two concurrent
    /// registrations for the same name exactly one succeeds.
    ///
    /// # Errors
    /// - [`ServiceError::Validation`] if either field is empty.
    /// - [`ServiceError::Conflict`] if the username is taken. The existing
    ///   account is left untouched.
    pub fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, ServiceError> {
        if username.is_empty() || password.is_empty() {
            return Err(ServiceError::Validation(
                "username and password required".into(),
            ));
        }

        let id = PlayerId::new(username);
        let token = generate_token();
        let account = Account {
            id: id.clone(),
            username: username.to_owned(),
            password: password.to_owned(),
            token: token.clone(),
        };
        let player = Player {
            id: id.clone(),
            name: username.to_owned(),
            level: STARTING_LEVEL,
            experience: 0,
            last_login: Utc::now(),
        };

        let created = self.store.with_write(|world| {
            if world.accounts.contains_key(&id) {
                return false;
            }
            world.accounts.insert(id.clone(), account);
            world.players.insert(id.clone(), player);
            true
        });

        if !created {
            return Err(ServiceError::Conflict("username already exists".into()));
        }
        tracing::info!(player_id = %id, "account registered");
        Ok(token)
    }

    /// Verifies credentials and opens a session, returning the account
    /// token.
    ///
    /// The credential check and the last-login stamp run in one store
    /// transaction. The session entry is written to the cache afterwards,
    /// in its own critical section: the two are never locked together.
    ///
    /// # Errors
    /// [`ServiceError::Unauthorized`] for an unknown user or wrong
    /// password.
    pub fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, ServiceError> {
        let authenticated = self.store.with_write(|world| {
            let account = world
                .accounts
                .get(username)
                .filter(|account| account.password_matches(password))?;
            let (id, token) = (account.id.clone(), account.token.clone());
            if let Some(player) = world.players.get_mut(&id) {
                player.last_login = Utc::now();
            }
            Some((id, token))
        });

        let Some((id, token)) = authenticated else {
            tracing::debug!(username, "login rejected");
            return Err(ServiceError::Unauthorized);
        };

        self.sessions
            .set(session_key(&id), token.clone(), self.session_ttl);
        tracing::info!(player_id = %id, "player logged in");
        Ok(token)
    }

    /// Returns the live session token for `player_id`, if any.
    pub fn session(&self, player_id: &PlayerId) -> Option<String> {
        self.sessions.get(&session_key(player_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AccountService {
        AccountService::new(
            Arc::new(Store::new()),
            Arc::new(SessionCache::new()),
            Duration::from_secs(60),
        )
    }

    #[test]
    fn test_register_creates_account_and_player() {
        let accounts = service();

        let token = accounts.register("alice", "pw").unwrap();

        let (account, player) = accounts.store.with_read(|world| {
            (world.accounts["alice"].clone(), world.players["alice"].clone())
        });
        assert_eq!(account.token, token);
        assert_eq!(account.username, "alice");
        assert_eq!(player.level, 1);
        assert_eq!(player.experience, 0);
        assert_eq!(player.name, "alice");
    }

    #[test]
    fn test_register_empty_fields_is_validation_error() {
        let accounts = service();
        assert!(matches!(
            accounts.register("", "pw"),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            accounts.register("alice", ""),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn test_register_duplicate_keeps_first_password() {
        let accounts = service();
        accounts.register("bob", "pw123").unwrap();

        let result = accounts.register("bob", "other");

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
        assert!(accounts.login("bob", "pw123").is_ok());
        assert!(matches!(
            accounts.login("bob", "other"),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn test_register_tokens_are_unique() {
        let accounts = service();
        let a = accounts.register("a", "pw").unwrap();
        let b = accounts.register("b", "pw").unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_opens_session_until_ttl() {
        let accounts = service();
        let token = accounts.register("bob", "pw123").unwrap();
        let bob = PlayerId::new("bob");
        assert_eq!(accounts.session(&bob), None);

        let login_token = accounts.login("bob", "pw123").unwrap();

        assert_eq!(login_token, token);
        assert_eq!(accounts.session(&bob), Some(token));

        tokio::time::advance(Duration::from_secs(61)).await;
        assert_eq!(accounts.session(&bob), None);
    }

    #[test]
    fn test_login_stamps_last_login() {
        let accounts = service();
        accounts.register("bob", "pw123").unwrap();
        let before = accounts
            .store
            .with_read(|world| world.players["bob"].last_login);

        accounts.login("bob", "pw123").unwrap();

        let after = accounts
            .store
            .with_read(|world| world.players["bob"].last_login);
        assert!(after >= before);
    }

    #[test]
    fn test_login_unknown_user_is_unauthorized() {
        let accounts = service();
        assert!(matches!(
            accounts.login("ghost", "pw"),
            Err(ServiceError::Unauthorized)
        ));
        assert!(accounts.sessions.is_empty());
    }

    #[test]
    fn test_login_with_unbounded_ttl_keeps_session() {
        let accounts = AccountService::new(
            Arc::new(Store::seeded()),
            Arc::new(SessionCache::new()),
            Duration::from_secs(u64::MAX),
        );

        let token = accounts.login("demo", "password").unwrap();

        assert_eq!(accounts.session(&PlayerId::new("demo")), Some(token));
    }

    #[test]
    fn test_login_seeded_demo_account() {
        let accounts = AccountService::new(
            Arc::new(Store::seeded()),
            Arc::new(SessionCache::new()),
            Duration::from_secs(60),
        );
        assert_eq!(accounts.login("demo", "password").unwrap(), "demo-token");
    }
}
