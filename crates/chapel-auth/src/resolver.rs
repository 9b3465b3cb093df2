//! Resolves a bearer token to the member it was issued for.

use std::sync::Arc;

use tracing::debug;

use chapel_core::error::AppError;
use chapel_database::MemberStore;
use chapel_entity::member::Member;

use crate::jwt::error::INVALID_CREDENTIALS;
use crate::jwt::{Claims, TokenService};

/// Turns a bearer token into a live [`Member`].
#[derive(Debug, Clone)]
pub struct AuthResolver {
    tokens: Arc<TokenService>,
    members: Arc<dyn MemberStore>,
}

impl AuthResolver {
    /// Creates a resolver over the token service and member store.
    pub fn new(tokens: Arc<TokenService>, members: Arc<dyn MemberStore>) -> Self {
        Self { tokens, members }
    }

    /// The token service backing this resolver.
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Verifies the token and loads the member, active or not.
    ///
    /// Every failure collapses into one `Unauthorized` error.
    pub async fn resolve(&self, token: &str) -> Result<(Member, Claims), AppError> {
        let claims = self.tokens.verify(token).await.map_err(|reason| {
            debug!(%reason, "Bearer token rejected");
            AppError::from(reason)
        })?;
        let member_id = claims.member_id()?;

        match self.members.find_by_id(member_id).await? {
            Some(member) => Ok((member, claims)),
            None => {
                debug!(%member_id, "Bearer token subject no longer exists");
                Err(AppError::unauthorized(INVALID_CREDENTIALS))
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but rejects deactivated accounts.
    pub async fn resolve_active(&self, token: &str) -> Result<(Member, Claims), AppError> {
        let (member, claims) = self.resolve(token).await?;
        if !member.is_active {
            return Err(AppError::inactive_account("Inactive user"));
        }
        Ok((member, claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chapel_core::config::AuthConfig;
    use chapel_core::error::ErrorKind;
    use chapel_database::Stores;
    use chapel_entity::member::{CreateMember, MemberRole, UpdateMember};
    use uuid::Uuid;

    fn resolver() -> (AuthResolver, Arc<dyn MemberStore>) {
        let config = AuthConfig {
            jwt_secret: "a-very-long-secret-used-only-in-tests-0001".into(),
            ..AuthConfig::default()
        };
        let tokens = Arc::new(TokenService::new(&config));
        let stores = Stores::memory();
        (
            AuthResolver::new(tokens, stores.members.clone()),
            stores.members,
        )
    }

    async fn seed(members: &Arc<dyn MemberStore>) -> Member {
        members
            .create(CreateMember {
                first_name: "Ruth".into(),
                last_name: "Moab".into(),
                email: "ruth@example.org".into(),
                phone: None,
                password_hash: "not-a-real-hash".into(),
                role: MemberRole::Member,
                is_active: true,
                departments: vec![],
                notification_preference: Default::default(),
                sms_opt_in: false,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_resolves_live_member() {
        let (resolver, members) = resolver();
        let member = seed(&members).await;
        let token = resolver.tokens().issue(member.id).unwrap().token;

        let (found, claims) = resolver.resolve_active(&token).await.unwrap();
        assert_eq!(found.id, member.id);
        assert_eq!(claims.member_id().unwrap(), member.id);
    }

    #[tokio::test]
    async fn test_unknown_subject_is_unauthorized() {
        let (resolver, _) = resolver();
        let token = resolver.tokens().issue(Uuid::new_v4()).unwrap().token;
        let err = resolver.resolve(&token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn test_inactive_member() {
        let (resolver, members) = resolver();
        let member = seed(&members).await;
        members
            .update(
                member.id,
                UpdateMember {
                    is_active: Some(false),
                    ..UpdateMember::default()
                },
            )
            .await
            .unwrap();
        let token = resolver.tokens().issue(member.id).unwrap().token;

        assert!(resolver.resolve(&token).await.is_ok());
        let err = resolver.resolve_active(&token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InactiveAccount);
    }
}
