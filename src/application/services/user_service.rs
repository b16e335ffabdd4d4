//! User management service.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::application::responses::{PaginatedUsersResponse, UserResponse, UserWithAgeResponse};
use crate::domain::entities::NewUser;
use crate::domain::pagination::PageRequest;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Operations the HTTP layer needs on users.
///
/// Handlers hold an `Arc<dyn UserService>`, so tests can swap in
/// `MockUserService` without touching a store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Persists a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_user(&self, new_user: NewUser) -> Result<UserResponse, AppError>;

    /// Retrieves a user with their current age.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_user_by_id(&self, id: i32) -> Result<UserWithAgeResponse, AppError>;

    /// Lists one page of users. `page` and `page_size` are normalized first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if listing or counting fails.
    async fn list_users(
        &self,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<PaginatedUsersResponse, AppError>;

    /// Replaces name and date of birth of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_user(&self, id: i32, update: NewUser) -> Result<UserResponse, AppError>;

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_user(&self, id: i32) -> Result<(), AppError>;
}

/// [`UserService`] backed by a [`UserRepository`].
///
/// Stateless apart from the repository handle. Every outcome is logged with
/// the user id (where there is one) and, on failure, the error.
pub struct UserServiceImpl<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

/// The id is logged by the caller, not sent back to the client.
fn user_not_found() -> AppError {
    AppError::not_found("User not found", json!({}))
}

#[async_trait]
impl<R: UserRepository> UserService for UserServiceImpl<R> {
    async fn create_user(&self, new_user: NewUser) -> Result<UserResponse, AppError> {
        let user = self.repository.create(new_user).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to create user");
        })?;

        tracing::info!(user_id = user.id, name = %user.name, "User created successfully");

        Ok(UserResponse::from(user))
    }

    async fn get_user_by_id(&self, id: i32) -> Result<UserWithAgeResponse, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await
            .and_then(|found| found.ok_or_else(user_not_found))
            .inspect_err(|e| {
                tracing::error!(user_id = id, error = %e, "Failed to get user by ID");
            })?;

        tracing::info!(user_id = user.id, "User retrieved successfully");

        Ok(UserWithAgeResponse::from(user))
    }

    async fn list_users(
        &self,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let request = PageRequest::normalize(page, page_size);

        // The store has no paged query, so the whole table is sliced here.
        let all_users = self.repository.list_all().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to list users");
        })?;

        let total = self.repository.count().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to count users");
        })?;

        let (start, end) = request.bounds(all_users.len());
        let users: Vec<UserWithAgeResponse> = all_users
            .into_iter()
            .skip(start)
            .take(end - start)
            .map(UserWithAgeResponse::from)
            .collect();

        tracing::info!(
            count = users.len(),
            total,
            page = request.page,
            page_size = request.page_size,
            "Users listed successfully"
        );

        Ok(PaginatedUsersResponse {
            users,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: request.total_pages(total),
        })
    }

    async fn update_user(&self, id: i32, update: NewUser) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .update(id, update)
            .await
            .and_then(|updated| updated.ok_or_else(user_not_found))
            .inspect_err(|e| {
                tracing::error!(user_id = id, error = %e, "Failed to update user");
            })?;

        tracing::info!(user_id = user.id, name = %user.name, "User updated successfully");

        Ok(UserResponse::from(user))
    }

    async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        self.repository
            .delete(id)
            .await
            .and_then(|deleted| if deleted { Ok(()) } else { Err(user_not_found()) })
            .inspect_err(|e| {
                tracing::error!(user_id = id, error = %e, "Failed to delete user");
            })?;

        tracing::info!(user_id = id, "User deleted successfully");

        Ok(())
    }
}
