use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::database::store::Store;
use crate::error::{Error, Result};
use crate::models::company::{Company, NewCompany};
use crate::models::recruitment::{NewRecruitment, Recruitment};

#[derive(Default)]
struct Tables {
    companies: BTreeMap<i64, Company>,
    recruitments: BTreeMap<i64, Recruitment>,
    next_company_id: i64,
    next_recruitment_id: i64,
}

/// Process-local store with the same observable semantics as [`PgStore`]
/// for ASCII text. Search folds case with Rust's Unicode lowercasing.
///
/// [`PgStore`]: crate::database::PgStore
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| Error::Internal("memory store lock poisoned".to_string()))
    }

    /// Removes a company and every posting it owns. No route deletes
    /// companies; this mirrors the schema's `ON DELETE CASCADE` for tests.
    #[cfg(test)]
    fn delete_company(&self, id: i64) -> Result<()> {
        let mut tables = self.tables()?;
        tables.companies.remove(&id);
        tables.recruitments.retain(|_, r| r.company_id() != id);
        Ok(())
    }
}

fn contains_lowercase(haystack: Option<&str>, keyword: &str) -> bool {
    haystack
        .unwrap_or_default()
        .to_lowercase()
        .contains(keyword)
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_company(&self, company: NewCompany) -> Result<Company> {
        let mut tables = self.tables()?;
        tables.next_company_id += 1;
        let stored = Company {
            id: tables.next_company_id,
            name: company.name,
            description: company.description,
        };
        tables.companies.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_company(&self, id: i64) -> Result<Option<Company>> {
        Ok(self.tables()?.companies.get(&id).cloned())
    }

    async fn insert_recruitment(&self, recruitment: NewRecruitment) -> Result<Recruitment> {
        let mut tables = self.tables()?;
        if !tables.companies.contains_key(&recruitment.company_id()) {
            return Err(Error::Internal(format!(
                "foreign key violation: company {} does not exist",
                recruitment.company_id()
            )));
        }
        tables.next_recruitment_id += 1;
        let stored = Recruitment::stored(tables.next_recruitment_id, recruitment);
        tables.recruitments.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_recruitment(&self, id: i64) -> Result<Option<Recruitment>> {
        Ok(self.tables()?.recruitments.get(&id).cloned())
    }

    async fn find_recruitments_by_company(&self, company_id: i64) -> Result<Vec<Recruitment>> {
        let tables = self.tables()?;
        Ok(tables
            .recruitments
            .values()
            .filter(|r| r.company_id() == company_id)
            .cloned()
            .collect())
    }

    async fn save_recruitment(&self, recruitment: &Recruitment) -> Result<Recruitment> {
        let mut tables = self.tables()?;
        let row = tables
            .recruitments
            .get_mut(&recruitment.id())
            .ok_or_else(|| Error::NotFound("Resource not found".to_string()))?;

        row.country = recruitment.country.clone();
        row.city = recruitment.city.clone();
        row.position = recruitment.position.clone();
        row.reward = recruitment.reward.clone();
        row.description = recruitment.description.clone();
        row.skills = recruitment.skills.clone();
        Ok(row.clone())
    }

    async fn delete_recruitment(&self, id: i64) -> Result<()> {
        self.tables()?.recruitments.remove(&id);
        Ok(())
    }

    async fn search_recruitments(&self, keyword: &str) -> Result<Vec<Recruitment>> {
        let tables = self.tables()?;
        Ok(tables
            .recruitments
            .values()
            .filter(|r| {
                let company_name = tables
                    .companies
                    .get(&r.company_id())
                    .map(|c| c.name.as_str());
                contains_lowercase(company_name, keyword)
                    || contains_lowercase(r.position.as_deref(), keyword)
            })
            .cloned()
            .collect())
    }
}
