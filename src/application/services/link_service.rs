//! Link creation and listing service.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link registry operations shared by the API and the admin CLI.
///
/// Codes and URLs arrive already validated by the boundary layer.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Registers `code` for `original_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the code is already taken.
    /// Returns [`AppError::Lookup`] on database errors.
    pub async fn create_link(
        &self,
        code: impl Into<String>,
        original_url: impl Into<String>,
    ) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .create(NewLink::new(code, original_url))
            .await?;

        info!(code = %link.code, link_id = link.id, "Short link created");

        Ok(link)
    }

    /// Lists every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Lookup`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Checks registry connectivity.
    pub async fn health_check(&self) -> bool {
        self.link_repository.health_check().await
    }
}
