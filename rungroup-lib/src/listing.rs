//! Paged and filtered catalog listings.
//!
//! This is the layer that turns a page/page-size/category request into a
//! bounded slice plus page metadata, and a state name or city into a
//! filtered listing with a "nothing here" flag. Paging requests are validated
//! here, before any repository call.

use rungroup_catalog::types::{Category, CategoryParseError, NO_CATEGORY, category_filter};
use rungroup_catalog::code_for_state_name;
use rungroup_db::{CatalogRepository, OperationError};
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 6;

#[derive(Debug, Error)]
pub enum ListingError {
    /// Page or page size below 1. Callers render this as "not found".
    #[error("Invalid page request: page {page}, page size {page_size}")]
    InvalidPage { page: i64, page_size: i64 },

    #[error("Invalid category: {0}")]
    InvalidCategory(#[from] CategoryParseError),

    #[error(transparent)]
    Store(#[from] OperationError),
}

// ── Paging ──────────────────────────────────────────────────────────────────

/// A validated, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64) -> Result<Self, ListingError> {
        let invalid = || ListingError::InvalidPage { page, page_size };
        let p = usize::try_from(page).map_err(|_| invalid())?;
        let size = usize::try_from(page_size).map_err(|_| invalid())?;
        if p < 1 || size < 1 {
            return Err(invalid());
        }
        Ok(Self {
            page: p,
            page_size: size,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based offset of the first entity on this page.
    pub fn skip(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn take(&self) -> usize {
        self.page_size
    }
}

/// Number of pages needed for `total` entities. Never less than 1, so an
/// empty catalog still has one (empty) page.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// One page of a catalog listing.
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    /// The requested category index, [`NO_CATEGORY`] when unfiltered.
    pub category: i32,
}

/// List one page of `repo`, optionally restricted to a category index.
///
/// The count and the slice are separate repository calls and may observe
/// different data if a write lands in between.
pub fn list_page<R>(
    repo: &R,
    page: i64,
    page_size: i64,
    category: i32,
) -> Result<IndexPage<R::Entity>, ListingError>
where
    R: CatalogRepository,
    R::Category: Category,
{
    let request = PageRequest::new(page, page_size)?;
    let filter = category_filter::<R::Category>(category)?;

    let (items, total) = match filter {
        None => (
            repo.slice(request.skip(), request.take())?,
            repo.count()?,
        ),
        Some(c) => (
            repo.slice_by_category(c, request.skip(), request.take())?,
            repo.count_by_category(c)?,
        ),
    };
    log::debug!(
        "Listed page {} of {} ({} items, {} total, category {})",
        request.page(),
        total_pages(total, request.page_size()),
        items.len(),
        total,
        category,
    );

    Ok(IndexPage {
        items,
        page: request.page(),
        page_size: request.page_size(),
        total,
        total_pages: total_pages(total, request.page_size()),
        category: filter.map_or(NO_CATEGORY, |c| c.index()),
    })
}

// ── State and City Listings ─────────────────────────────────────────────────

/// Entities in one state, looked up by the state's full name.
#[derive(Debug, Clone, Serialize)]
pub struct StateListing<T> {
    pub items: Vec<T>,
    /// The requested state name, set only when there is something to show.
    pub state: Option<String>,
    pub no_club_warning: bool,
}

/// List entities whose address is in the state named `state_name`.
///
/// An unknown state name and a known state with nothing in it both come back
/// with `state: None` and the warning set; neither is an error.
pub fn list_by_state_name<R: CatalogRepository>(
    repo: &R,
    state_name: &str,
) -> Result<StateListing<R::Entity>, ListingError> {
    let Some(code) = code_for_state_name(state_name) else {
        log::debug!("No state named {:?}", state_name);
        return Ok(StateListing {
            items: Vec::new(),
            state: None,
            no_club_warning: true,
        });
    };

    let items = repo.by_state(code)?;
    if items.is_empty() {
        return Ok(StateListing {
            items,
            state: None,
            no_club_warning: true,
        });
    }
    Ok(StateListing {
        items,
        state: Some(state_name.to_string()),
        no_club_warning: false,
    })
}

/// Entities in (or near, by substring) one city.
#[derive(Debug, Clone, Serialize)]
pub struct CityListing<T> {
    pub items: Vec<T>,
    pub city: Option<String>,
    pub no_club_warning: bool,
}

pub fn list_by_city<R: CatalogRepository>(
    repo: &R,
    city: &str,
) -> Result<CityListing<R::Entity>, ListingError> {
    let items = repo.by_city(city)?;
    let found = !items.is_empty();
    Ok(CityListing {
        items,
        city: found.then(|| city.to_string()),
        no_club_warning: !found,
    })
}
