//! User service - Handles user-related business logic.
//!
//! Validation runs before any write, and existence is checked before
//! update and delete. Errors from the validator and repository are
//! propagated unchanged.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{is_valid_email, CreateUserRequest, UpdateUserRequest, User, ValidationError};

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and persist a new user
    async fn create_user(&self, req: CreateUserRequest) -> AppResult<User>;

    /// List all users, newest first
    async fn get_all_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: i64) -> AppResult<User>;

    /// Replace an existing user's name, email and age
    async fn update_user(&self, id: i64, req: UpdateUserRequest) -> AppResult<User>;

    /// Permanently delete an existing user
    async fn delete_user(&self, id: i64) -> AppResult<()>;

    /// Get user by email; malformed addresses are rejected without a lookup
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, req: CreateUserRequest) -> AppResult<User> {
        let user = User::from(req);
        user.validate()?;

        let created = self.repo.create(user).await?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.repo.get_all().await
    }

    async fn get_user_by_id(&self, id: i64) -> AppResult<User> {
        self.repo.get_by_id(id).await
    }

    async fn update_user(&self, id: i64, req: UpdateUserRequest) -> AppResult<User> {
        let mut user = self.repo.get_by_id(id).await?;
        user.apply(req);
        user.validate()?;

        let updated = self.repo.update(id, user).await?;
        tracing::info!(user_id = id, "User updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        // Not atomic with the delete below; a concurrent delete in between
        // surfaces as NotFound from the repository.
        self.repo.get_by_id(id).await?;

        self.repo.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmailFormat.into());
        }

        self.repo.get_by_email(email).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::MockUserRepository;
    use common::AppError;

    fn stored_user(id: i64) -> User {
        User {
            id,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            age: 30,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_request(name: &str, email: &str, age: i32) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|user| user.id == 0 && user.email == "ana@x.com")
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: 1,
                    ..user
                })
            });

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .create_user(create_request("Ana", "ana@x.com", 30))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ana");
    }

    #[tokio::test]
    async fn test_create_user_invalid_never_touches_storage() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));

        let cases = [
            (create_request("", "ana@x.com", 30), ValidationError::EmptyName),
            (create_request("Ana", "", 30), ValidationError::EmptyEmail),
            (create_request("Ana", "ana-at-x", 30), ValidationError::InvalidEmailFormat),
            (create_request("Ana", "ana@x.com", 151), ValidationError::InvalidAge),
        ];

        for (req, expected) in cases {
            let err = service.create_user(req).await.unwrap_err();
            assert!(
                matches!(err, AppError::Validation(kind) if kind == expected),
                "expected {expected:?}, got {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::DuplicateEmail));

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .create_user(create_request("Ana", "ana@x.com", 30))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_get_user_by_id_passthrough() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .with(eq(4))
            .returning(|id| Ok(stored_user(id)));

        let service = UserManager::new(Arc::new(repo));
        assert_eq!(service.get_user_by_id(4).await.unwrap().id, 4);
    }

    #[tokio::test]
    async fn test_update_user_missing_performs_no_write() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(AppError::NotFound));
        repo.expect_update().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .update_user(
                99,
                UpdateUserRequest {
                    name: "Ana B".to_string(),
                    email: "ana@x.com".to_string(),
                    age: 31,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_user_invalid_performs_no_write() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(stored_user(id)));
        repo.expect_update().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .update_user(
                1,
                UpdateUserRequest {
                    name: "Ana".to_string(),
                    email: "ana@x.com".to_string(),
                    age: -3,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::InvalidAge))
        ));
    }

    #[tokio::test]
    async fn test_update_user_merges_request_into_existing() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(stored_user(id)));
        repo.expect_update()
            .withf(|id, user| *id == 1 && user.id == 1 && user.name == "Ana B" && user.age == 31)
            .times(1)
            .returning(|_, user| Ok(user));

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .update_user(
                1,
                UpdateUserRequest {
                    name: "Ana B".to_string(),
                    email: "ana@x.com".to_string(),
                    age: 31,
                },
            )
            .await
            .unwrap();

        assert_eq!(user.name, "Ana B");
    }

    #[tokio::test]
    async fn test_delete_user_checks_existence_first() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(AppError::NotFound));
        repo.expect_delete().never();

        let service = UserManager::new(Arc::new(repo));
        assert!(matches!(
            service.delete_user(5).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(stored_user(id)));
        repo.expect_delete()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(()));

        let service = UserManager::new(Arc::new(repo));
        assert!(service.delete_user(5).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_user_by_email_rejects_malformed_without_lookup() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email().never();

        let service = UserManager::new(Arc::new(repo));
        for email in ["", "not-an-email"] {
            let result = service.get_user_by_email(email).await;
            assert!(matches!(
                result,
                Err(AppError::Validation(ValidationError::InvalidEmailFormat))
            ));
        }
    }

    #[tokio::test]
    async fn test_get_user_by_email_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email()
            .withf(|email| email.to_string() == "ana@x.com")
            .returning(|_| Ok(stored_user(1)));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user_by_email("ana@x.com").await.unwrap();
        assert_eq!(user.email, "ana@x.com");
    }
}
