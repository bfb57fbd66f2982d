//! SetUserRoleHandler - Command handler for an admin assigning a role.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserRecordId};
use crate::domain::user::{Role, User};
use crate::ports::UserRepository;

/// Command to assign a user's role.
#[derive(Debug, Clone)]
pub struct SetUserRoleCommand {
    pub user_id: UserRecordId,
    pub role: Role,
}

/// Handler for role assignment.
///
/// The HTTP layer has already passed the admin policy gate by the time
/// this runs; the handler only validates existence and persists.
pub struct SetUserRoleHandler {
    users: Arc<dyn UserRepository>,
}

impl SetUserRoleHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: SetUserRoleCommand) -> Result<User, DomainError> {
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::UserNotFound,
                    format!("User not found: {}", cmd.user_id),
                )
            })?;

        self.users.set_role(&cmd.user_id, cmd.role).await?;
        user.set_role(cmd.role);

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EmailAddress;
    use crate::ports::UpsertOutcome;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockUserRepository {
        stored: Mutex<Vec<User>>,
        role_writes: Mutex<Vec<(UserRecordId, Role)>>,
    }

    impl MockUserRepository {
        fn with_user(user: User) -> Self {
            Self {
                stored: Mutex::new(vec![user]),
                role_writes: Mutex::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self {
                stored: Mutex::new(Vec::new()),
                role_writes: Mutex::new(Vec::new()),
            }
        }

        fn role_writes(&self) -> Vec<(UserRecordId, Role)> {
            self.role_writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn upsert(&self, user: &User) -> Result<UpsertOutcome, DomainError> {
            Ok(UpsertOutcome {
                user: user.clone(),
                inserted: true,
            })
        }

        async fn find_by_id(&self, id: &UserRecordId) -> Result<Option<User>, DomainError> {
            Ok(self
                .stored
                .lock()
                .unwrap()
                .iter()
                .find(|u| &u.id == id)
                .cloned())
        }

        async fn find_by_email(
            &self,
            _email: &EmailAddress,
        ) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<User>, DomainError> {
            Ok(vec![])
        }

        async fn set_role(&self, id: &UserRecordId, role: Role) -> Result<(), DomainError> {
            self.role_writes.lock().unwrap().push((id.clone(), role));
            Ok(())
        }
    }

    fn test_user() -> User {
        User::register(
            UserRecordId::new(),
            EmailAddress::new("bob@example.com").unwrap(),
            None,
        )
    }

    #[tokio::test]
    async fn promotes_member_to_manager() {
        let user = test_user();
        let users = Arc::new(MockUserRepository::with_user(user.clone()));
        let handler = SetUserRoleHandler::new(users.clone());

        let updated = handler
            .handle(SetUserRoleCommand {
                user_id: user.id.clone(),
                role: Role::Manager,
            })
            .await
            .unwrap();

        assert_eq!(updated.role, Role::Manager);
        assert_eq!(users.role_writes(), vec![(user.id, Role::Manager)]);
    }

    #[tokio::test]
    async fn fails_for_unknown_user() {
        let users = Arc::new(MockUserRepository::empty());
        let handler = SetUserRoleHandler::new(users.clone());

        let result = handler
            .handle(SetUserRoleCommand {
                user_id: UserRecordId::new(),
                role: Role::Admin,
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::UserNotFound);
        assert!(users.role_writes().is_empty());
    }
}
