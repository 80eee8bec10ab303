use std::sync::Arc;

use crate::database::Store;
use crate::dto::recruitment_dto::{CreateRecruitmentPayload, RecruitmentView, UpdateRecruitmentPayload};
use crate::error::{Error, Result};
use crate::models::recruitment::{NewRecruitment, Recruitment};

pub const COMPANY_NOT_FOUND: &str = "Company Not Found";
pub const RECRUITMENT_NOT_PRESENT: &str = "Recruitment not present in the database";
pub const RECRUITMENT_NOT_FOUND_BY_ID: &str = "Can't find any recruitment under given ID";

#[derive(Clone)]
pub struct RecruitmentService {
    store: Arc<dyn Store>,
}

impl RecruitmentService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: CreateRecruitmentPayload) -> Result<Recruitment> {
        let company = self
            .store
            .find_company(payload.company_id)
            .await?
            .ok_or_else(|| Error::NotFound(COMPANY_NOT_FOUND.to_string()))?;

        let draft = NewRecruitment::for_company(&company, payload.fields());
        let recruitment = self.store.insert_recruitment(draft).await?;

        tracing::info!(
            recruitment_id = recruitment.id(),
            company_id = company.id,
            "recruitment created"
        );
        Ok(recruitment)
    }

    pub async fn update(&self, id: i64, payload: UpdateRecruitmentPayload) -> Result<Recruitment> {
        let patch = payload.into_patch()?;
        let mut recruitment = self.existing(id).await?;

        if patch.is_empty() {
            return Ok(recruitment);
        }
        recruitment.apply(patch);
        let recruitment = self.store.save_recruitment(&recruitment).await?;

        tracing::info!(recruitment_id = id, "recruitment updated");
        Ok(recruitment)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.existing(id).await?;
        self.store.delete_recruitment(id).await?;

        tracing::info!(recruitment_id = id, "recruitment deleted");
        Ok(())
    }

    /// Keyword search. Results are plain projections without company name
    /// or sibling ids.
    pub async fn search(&self, keyword: Option<&str>) -> Result<Vec<RecruitmentView>> {
        let keyword = keyword.map(str::to_lowercase).unwrap_or_default();
        let items = self.store.search_recruitments(&keyword).await?;

        tracing::debug!(keyword = %keyword, matches = items.len(), "recruitment search");
        Ok(items.into_iter().map(RecruitmentView::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<RecruitmentView> {
        let recruitment = self
            .store
            .find_recruitment(id)
            .await?
            .ok_or_else(|| Error::NotFound(RECRUITMENT_NOT_FOUND_BY_ID.to_string()))?;

        let company = self
            .store
            .find_company(recruitment.company_id())
            .await?
            .ok_or_else(|| Error::NotFound(COMPANY_NOT_FOUND.to_string()))?;

        let siblings: Vec<i64> = self
            .store
            .find_recruitments_by_company(company.id)
            .await?
            .iter()
            .map(Recruitment::id)
            .filter(|sibling| *sibling != id)
            .collect();

        let mut view = RecruitmentView::from(recruitment);
        view.company_name = Some(company.name);
        view.other_recruitment = Some(siblings);
        Ok(view)
    }

    async fn existing(&self, id: i64) -> Result<Recruitment> {
        self.store
            .find_recruitment(id)
            .await?
            .ok_or_else(|| Error::NotFound(RECRUITMENT_NOT_PRESENT.to_string()))
    }
}
