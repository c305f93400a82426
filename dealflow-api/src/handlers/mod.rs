pub mod companies;
pub mod contacts;
pub mod deals;
pub mod insights;
pub mod interactions;

use serde::Deserialize;

/// Pagination query shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}
