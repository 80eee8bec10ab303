use std::sync::Arc;

use crate::database::Store;
use crate::dto::company_dto::CreateCompanyPayload;
use crate::error::Result;
use crate::models::company::{Company, NewCompany};

#[derive(Clone)]
pub struct CompanyService {
    store: Arc<dyn Store>,
}

impl CompanyService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: CreateCompanyPayload) -> Result<Company> {
        let company = self.store.insert_company(NewCompany::from(payload)).await?;
        tracing::info!(company_id = company.id, "company created");
        Ok(company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::store::MockStore;

    #[tokio::test]
    async fn create_passes_fields_through() {
        let mut store = MockStore::new();
        store
            .expect_insert_company()
            .withf(|company: &NewCompany| company.name.is_empty() && company.description == "Stealth")
            .times(1)
            .returning(|company| {
                Ok(Company {
                    id: 1,
                    name: company.name,
                    description: company.description,
                })
            });

        let service = CompanyService::new(Arc::new(store));
        let company = service
            .create(CreateCompanyPayload {
                name: String::new(),
                description: "Stealth".into(),
            })
            .await
            .unwrap();
        assert_eq!(company.id, 1);
        assert_eq!(company.description, "Stealth");
    }
}
