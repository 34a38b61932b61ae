//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, RuntimeErr,
    Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every driver failure is classified before it leaves the repository:
/// unique violations become `DuplicateEmail`, missing rows become
/// `NotFound`, everything else becomes `Storage`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the row as persisted
    async fn create(&self, user: User) -> AppResult<User>;

    /// List all users, newest first
    async fn get_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn get_by_id(&self, id: i64) -> AppResult<User>;

    /// Replace name, email and age, and return the row as persisted
    async fn update(&self, id: i64, user: User) -> AppResult<User>;

    /// Permanently delete user by ID
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Find user by email address, ignoring case
    async fn get_by_email(&self, email: &str) -> AppResult<User>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Map a driver error onto the application taxonomy.
///
/// `email` carries the only unique constraint besides the generated key,
/// so any unique violation is a duplicate email.
fn classify(err: DbErr) -> AppError {
    if is_unique_violation(&err) {
        tracing::debug!("Unique constraint violated: {}", err);
        return AppError::DuplicateEmail;
    }

    match err {
        DbErr::RecordNotFound(_) => AppError::NotFound,
        other => AppError::Storage(other),
    }
}

/// Checks the driver's error kind (SQLSTATE 23505 on Postgres).
fn is_unique_violation(err: &DbErr) -> bool {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e))) => {
            e.is_unique_violation()
        }
        _ => false,
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: User) -> AppResult<User> {
        // id and timestamps are left to column defaults
        let active_model = ActiveModel {
            name: Set(user.name),
            email: Set(user.email),
            age: Set(user.age),
            ..Default::default()
        };

        let result = UserEntity::insert(active_model)
            .exec(self.db.as_ref())
            .await
            .map_err(classify)?;

        self.get_by_id(result.last_insert_id).await
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_desc(user::Column::CreatedAt)
            .order_by_desc(user::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(classify)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(classify)?
            .map(User::from)
            .ok_or(AppError::NotFound)
    }

    async fn update(&self, id: i64, user: User) -> AppResult<User> {
        let result = UserEntity::update_many()
            .col_expr(user::Column::Name, Expr::value(user.name))
            .col_expr(user::Column::Email, Expr::value(user.email))
            .col_expr(user::Column::Age, Expr::value(user.age))
            .col_expr(user::Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(user::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(classify)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(classify)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn get_by_email(&self, email: &str) -> AppResult<User> {
        UserEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(user::Column::Email))).eq(email.to_lowercase()),
            )
            .one(self.db.as_ref())
            .await
            .map_err(classify)?
            .map(User::from)
            .ok_or(AppError::NotFound)
    }
}
