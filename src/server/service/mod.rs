//! Service layer.
//!
//! Services validate request bodies, resolve slugs, keep the slug caches current and turn
//! stored rows into response DTOs. Repositories underneath only run queries.

pub mod accommodation;
pub mod blog;
pub mod destination;
pub mod notify;
pub mod quote;
pub mod slug;
pub mod subscriber;
pub mod tour;

use crate::{
    model::api::{PageDto, PaginationParams},
    server::{
        data::{Page, PageRequest},
        error::Error,
        util::validate,
    },
};

/// Validates 1-based page parameters for a repository call.
pub(crate) fn page_request(params: PaginationParams) -> Result<PageRequest, Error> {
    Ok(validate::page(params)?)
}

/// Converts a repository page into its 1-based response form.
pub(crate) fn page_dto<M, T>(
    page: Page<M>,
    request: PageRequest,
    to_dto: impl FnMut(M) -> T,
) -> PageDto<T> {
    PageDto {
        items: page.items.into_iter().map(to_dto).collect(),
        page: request.index + 1,
        per_page: request.per_page,
        total_items: page.total_items,
        total_pages: page.total_pages,
    }
}
