//! Unique slug allocation.
//!
//! [`SlugResolver`] turns a title into the first free candidate among `base`, `base-1`,
//! `base-2`, ... using a caller-supplied availability check. The search is capped so a
//! pathological table (or a storm of concurrent writers) fails with
//! [`ContentError::SlugExhausted`] instead of looping forever.
//!
//! The availability check and the eventual write are not atomic. Slug columns carry a
//! unique index, and [`SlugResolver::write_unique`] re-runs the search when the write
//! loses that race.

use std::future::Future;

use sea_orm::DbErr;

use crate::server::{
    error::{content::ContentError, is_unique_violation, Error},
    util::slug::slugify,
};

/// Allocates unique slugs with a bounded number of candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlugResolver {
    max_attempts: u32,
}

impl SlugResolver {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;
    /// Times a write is retried after losing a slug race to a concurrent writer
    pub const MAX_WRITE_CONFLICTS: u32 = 3;

    /// Creates a resolver trying at most `max_attempts` candidates (at least one).
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the first candidate slug for `title` for which `exists` reports false.
    ///
    /// # Returns
    /// - `Ok(String)` - `base` or `base-N` for the smallest free `N`
    /// - `Err(ContentError::Validation)` - The title has no letters or digits to build a slug from
    /// - `Err(ContentError::SlugExhausted)` - Every candidate up to the cap was taken
    /// - `Err(_)` - Whatever `exists` failed with
    pub async fn resolve<F, Fut>(&self, title: &str, mut exists: F) -> Result<String, Error>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<bool, Error>>,
    {
        let base = slugify(title);
        if base.is_empty() {
            return Err(ContentError::Validation(
                "title must contain at least one letter or digit".to_string(),
            )
            .into());
        }

        for attempt in 0..self.max_attempts {
            let candidate = match attempt {
                0 => base.clone(),
                n => format!("{base}-{n}"),
            };

            if !exists(candidate.clone()).await? {
                return Ok(candidate);
            }
        }

        tracing::warn!(
            "No free slug for {:?} after {} candidates",
            base,
            self.max_attempts
        );

        Err(ContentError::SlugExhausted {
            base,
            attempts: self.max_attempts,
        }
        .into())
    }

    /// Resolves a slug and hands it to `write`, resolving again when the write hits a unique
    /// constraint violation.
    ///
    /// Gives up after [`Self::MAX_WRITE_CONFLICTS`] lost races and returns the last
    /// database error.
    pub async fn write_unique<T, F, Fut, W, WFut>(
        &self,
        title: &str,
        mut exists: F,
        mut write: W,
    ) -> Result<T, Error>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<bool, Error>>,
        W: FnMut(String) -> WFut,
        WFut: Future<Output = Result<T, DbErr>>,
    {
        let mut conflicts = 0;

        loop {
            let slug = self.resolve(title, &mut exists).await?;

            match write(slug.clone()).await {
                Ok(value) => return Ok(value),
                Err(err) if is_unique_violation(&err) && conflicts < Self::MAX_WRITE_CONFLICTS => {
                    conflicts += 1;
                    tracing::debug!(
                        "Slug {:?} was taken concurrently, resolving again ({}/{})",
                        slug,
                        conflicts,
                        Self::MAX_WRITE_CONFLICTS
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl Default for SlugResolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}
