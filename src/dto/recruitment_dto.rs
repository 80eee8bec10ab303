use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::recruitment::{Recruitment, RecruitmentFields};

pub const FOREIGN_KEY_IMMUTABLE: &str = "Foreign key cannot be modified once set";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecruitmentPayload {
    pub company_id: i64,
    #[validate(length(max = 255))]
    pub country: Option<String>,
    #[validate(length(max = 255))]
    pub city: Option<String>,
    #[validate(length(max = 255))]
    pub position: Option<String>,
    #[validate(length(max = 255))]
    pub reward: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub skills: Option<String>,
}

impl CreateRecruitmentPayload {
    pub fn fields(&self) -> RecruitmentFields {
        RecruitmentFields {
            country: self.country.clone(),
            city: self.city.clone(),
            position: self.position.clone(),
            reward: self.reward.clone(),
            description: self.description.clone(),
            skills: self.skills.clone(),
        }
    }
}

/// Sparse update body. Absent or `null` keys leave the stored value as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRecruitmentPayload {
    /// Accepted by the parser only so that it can be refused.
    #[schema(value_type = Option<i64>)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<JsonValue>,
    #[validate(length(max = 255))]
    pub country: Option<String>,
    #[validate(length(max = 255))]
    pub city: Option<String>,
    #[validate(length(max = 255))]
    pub position: Option<String>,
    #[validate(length(max = 255))]
    pub reward: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub skills: Option<String>,
}

impl UpdateRecruitmentPayload {
    /// Drops the request down to the mutable field set. A body naming the
    /// company reference fails instead of being silently ignored.
    pub fn into_patch(self) -> Result<RecruitmentFields> {
        if self.company_id.is_some() {
            return Err(Error::InvalidOperation(FOREIGN_KEY_IMMUTABLE.to_string()));
        }
        Ok(RecruitmentFields {
            country: self.country,
            city: self.city,
            position: self.position,
            reward: self.reward,
            description: self.description,
            skills: self.skills,
        })
    }
}

/// A stored posting as returned by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentResponse {
    pub id: i64,
    pub company_id: i64,
    pub country: Option<String>,
    pub city: Option<String>,
    pub position: Option<String>,
    pub reward: Option<String>,
    pub description: Option<String>,
    pub skills: Option<String>,
}

impl From<Recruitment> for RecruitmentResponse {
    fn from(value: Recruitment) -> Self {
        Self {
            id: value.id(),
            company_id: value.company_id(),
            country: value.country,
            city: value.city,
            position: value.position,
            reward: value.reward,
            description: value.description,
            skills: value.skills,
        }
    }
}

/// Read projection. `company_name` and `other_recruitment` are filled in
/// only by the detail lookup; search results leave them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentView {
    pub id: i64,
    pub company_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    /// Ids of the other postings of the same company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_recruitment: Option<Vec<i64>>,
}

impl From<Recruitment> for RecruitmentView {
    fn from(value: Recruitment) -> Self {
        Self {
            id: value.id(),
            company_id: value.company_id(),
            company_name: None,
            country: value.country,
            city: value.city,
            position: value.position,
            reward: value.reward,
            description: value.description,
            skills: value.skills,
            other_recruitment: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct RecruitmentSearchQuery {
    /// Case-insensitive substring of the company name or position.
    pub search: Option<String>,
}
