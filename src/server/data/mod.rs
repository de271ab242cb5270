//! Data access layer repositories.
//!
//! One repository per table. Repositories own the SeaORM queries and nothing else: no
//! validation, no slug resolution, no caching. They are generic over [`ConnectionTrait`]
//! so services can run them against a connection or a transaction.

pub mod accommodation;
pub mod blog_post;
pub mod destination;
pub mod quote;
pub mod subscriber;
pub mod tour;

#[cfg(test)]
mod tests;

use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, ItemsAndPagesNumber, PaginatorTrait, Select,
};

/// 0-based page selection passed down from the service layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub index: u64,
    pub per_page: u64,
}

/// One page of rows along with totals for the whole query.
#[derive(Clone, Debug)]
pub struct Page<M> {
    pub items: Vec<M>,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<M> Page<M> {
    /// Converts every row, failing on the first conversion error.
    pub fn try_map<T, E>(self, f: impl FnMut(M) -> Result<T, E>) -> Result<Page<T>, E> {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
            total_items: self.total_items,
            total_pages: self.total_pages,
        })
    }
}

/// Runs `select` through the SeaORM paginator.
pub(crate) async fn fetch_page<C, E>(
    db: &C,
    select: Select<E>,
    page: PageRequest,
) -> Result<Page<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync,
{
    let paginator = select.paginate(db, page.per_page);
    let ItemsAndPagesNumber {
        number_of_items,
        number_of_pages,
    } = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page(page.index).await?;

    Ok(Page {
        items,
        total_items: number_of_items,
        total_pages: number_of_pages,
    })
}
