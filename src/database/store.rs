use async_trait::async_trait;

use crate::error::Result;
use crate::models::company::{Company, NewCompany};
use crate::models::recruitment::{NewRecruitment, Recruitment};

/// Persistence operations the services need. Implementations rely on the
/// backing store for isolation; nothing here locks across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_company(&self, company: NewCompany) -> Result<Company>;

    async fn find_company(&self, id: i64) -> Result<Option<Company>>;

    async fn insert_recruitment(&self, recruitment: NewRecruitment) -> Result<Recruitment>;

    async fn find_recruitment(&self, id: i64) -> Result<Option<Recruitment>>;

    /// All postings owned by `company_id`, in ascending id order.
    async fn find_recruitments_by_company(&self, company_id: i64) -> Result<Vec<Recruitment>>;

    /// Writes the mutable columns of `recruitment`. `company_id` is never written.
    async fn save_recruitment(&self, recruitment: &Recruitment) -> Result<Recruitment>;

    async fn delete_recruitment(&self, id: i64) -> Result<()>;

    /// Postings whose company name or position contains `keyword`.
    /// `keyword` is expected to be lowercased already; matching lowercases
    /// the stored text, so an empty keyword matches everything.
    ///
    /// Case folding of non-ASCII text is backend specific: [`MemoryStore`]
    /// uses Unicode lowercasing, while Postgres `LOWER` follows the database
    /// collation and folds only ASCII under the `C` locale.
    ///
    /// [`MemoryStore`]: crate::database::MemoryStore
    async fn search_recruitments(&self, keyword: &str) -> Result<Vec<Recruitment>>;
}
