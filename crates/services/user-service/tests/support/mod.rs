//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;

use common::{AppError, AppResult};
use domain::User;
use user_service_lib::api::{create_router, AppState};
use user_service_lib::infra::HealthCheck;
use user_service_lib::repository::UserRepository;
use user_service_lib::service::UserManager;

/// In-memory repository with the same uniqueness and ordering rules as the
/// users table. Emails compare case-insensitively.
#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    next_id: Mutex<i64>,
}

impl InMemoryUsers {
    fn email_taken(rows: &[User], email: &str, except: Option<i64>) -> bool {
        rows.iter()
            .any(|u| u.email.eq_ignore_ascii_case(email) && Some(u.id) != except)
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if Self::email_taken(&rows, &user.email, None) {
            return Err(AppError::DuplicateEmail);
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let now = Utc::now();
        let stored = User {
            id: *next_id,
            created_at: now,
            updated_at: now,
            ..user
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        let mut users = self.rows.lock().unwrap().clone();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(users)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<User> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn update(&self, id: i64, user: User) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if Self::email_taken(&rows, &user.email, Some(id)) {
            return Err(AppError::DuplicateEmail);
        }

        let row = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::NotFound)?;
        row.name = user.name;
        row.email = user.email;
        row.age = user.age;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn get_by_email(&self, email: &str) -> AppResult<User> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or(AppError::NotFound)
    }
}

/// Health check whose result can be flipped during a test.
pub struct SwitchHealth {
    up: AtomicBool,
}

impl SwitchHealth {
    pub fn new(up: bool) -> Self {
        Self {
            up: AtomicBool::new(up),
        }
    }

    pub fn set(&self, up: bool) {
        self.up.store(up, Ordering::SeqCst);
    }
}

#[async_trait]
impl HealthCheck for SwitchHealth {
    async fn ping(&self) -> Result<(), DbErr> {
        if self.up.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DbErr::Custom("connection refused".to_string()))
        }
    }
}

/// Service wired to a fresh in-memory repository.
pub fn service() -> UserManager {
    UserManager::new(Arc::new(InMemoryUsers::default()))
}

/// Full router wired to a fresh in-memory repository.
pub fn app(health: Arc<SwitchHealth>) -> axum::Router {
    let state = AppState::new(Arc::new(service()), health);
    create_router(state, std::time::Duration::from_secs(15))
}
