use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::company::{Company, NewCompany};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateCompanyPayload {
    #[validate(length(max = 255))]
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<CreateCompanyPayload> for NewCompany {
    fn from(value: CreateCompanyPayload) -> Self {
        Self {
            name: value.name,
            description: value.description,
        }
    }
}

impl From<Company> for CompanyResponse {
    fn from(value: Company) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
        }
    }
}
