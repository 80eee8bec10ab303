use sqlx::FromRow;

use crate::models::company::Company;

/// The six scalar columns of a posting that may change after creation.
///
/// Used both as the initial values on create and as a sparse patch on
/// update, where `None` means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecruitmentFields {
    pub country: Option<String>,
    pub city: Option<String>,
    pub position: Option<String>,
    pub reward: Option<String>,
    pub description: Option<String>,
    pub skills: Option<String>,
}

impl RecruitmentFields {
    pub fn is_empty(&self) -> bool {
        self.country.is_none()
            && self.city.is_none()
            && self.position.is_none()
            && self.reward.is_none()
            && self.description.is_none()
            && self.skills.is_none()
    }
}

/// A posting bound to its company but not yet stored.
///
/// The company reference can only be supplied through [`NewRecruitment::for_company`],
/// which requires a resolved [`Company`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecruitment {
    company_id: i64,
    pub fields: RecruitmentFields,
}

impl NewRecruitment {
    pub fn for_company(company: &Company, fields: RecruitmentFields) -> Self {
        Self {
            company_id: company.id,
            fields,
        }
    }

    pub fn company_id(&self) -> i64 {
        self.company_id
    }
}

/// A stored posting.
///
/// `id` and `company_id` are private and have no setters, so once a row is
/// loaded the foreign key cannot be reassigned from anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Recruitment {
    id: i64,
    company_id: i64,
    pub country: Option<String>,
    pub city: Option<String>,
    pub position: Option<String>,
    pub reward: Option<String>,
    pub description: Option<String>,
    pub skills: Option<String>,
}

impl Recruitment {
    /// Materialises a row for `draft` under the id the store assigned.
    pub fn stored(id: i64, draft: NewRecruitment) -> Self {
        let NewRecruitment { company_id, fields } = draft;
        Self {
            id,
            company_id,
            country: fields.country,
            city: fields.city,
            position: fields.position,
            reward: fields.reward,
            description: fields.description,
            skills: fields.skills,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn company_id(&self) -> i64 {
        self.company_id
    }

    /// Sparse merge: every `Some` in `patch` overwrites, every `None` keeps
    /// the current value. There is no way to clear a field through here.
    pub fn apply(&mut self, patch: RecruitmentFields) {
        if let Some(country) = patch.country {
            self.country = Some(country);
        }
        if let Some(city) = patch.city {
            self.city = Some(city);
        }
        if let Some(position) = patch.position {
            self.position = Some(position);
        }
        if let Some(reward) = patch.reward {
            self.reward = Some(reward);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(skills) = patch.skills {
            self.skills = Some(skills);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Company {
        Company {
            id: 7,
            name: "Acme".into(),
            description: String::new(),
        }
    }

    fn posting() -> Recruitment {
        Recruitment::stored(
            3,
            NewRecruitment::for_company(
                &acme(),
                RecruitmentFields {
                    country: Some("Korea".into()),
                    city: Some("Seoul".into()),
                    position: Some("Backend Engineer".into()),
                    reward: Some("1000000".into()),
                    description: Some("Build APIs".into()),
                    skills: Some("Rust".into()),
                },
            ),
        )
    }

    #[test]
    fn draft_takes_company_id_from_resolved_company() {
        let draft = NewRecruitment::for_company(&acme(), RecruitmentFields::default());
        assert_eq!(draft.company_id(), 7);

        let stored = Recruitment::stored(11, draft);
        assert_eq!(stored.id(), 11);
        assert_eq!(stored.company_id(), 7);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut recruitment = posting();
        recruitment.apply(RecruitmentFields::default());
        assert_eq!(recruitment, posting());
    }

    #[test]
    fn patch_touches_only_supplied_fields() {
        let mut recruitment = posting();
        recruitment.apply(RecruitmentFields {
            city: Some("Busan".into()),
            skills: Some("Rust, SQL".into()),
            ..Default::default()
        });

        let mut expected = posting();
        expected.city = Some("Busan".into());
        expected.skills = Some("Rust, SQL".into());
        assert_eq!(recruitment, expected);
        assert_eq!(recruitment.id(), 3);
        assert_eq!(recruitment.company_id(), 7);
    }

    #[test]
    fn every_single_field_patch_is_isolated() {
        let patches = [
            RecruitmentFields { country: Some("Japan".into()), ..Default::default() },
            RecruitmentFields { city: Some("Tokyo".into()), ..Default::default() },
            RecruitmentFields { position: Some("SRE".into()), ..Default::default() },
            RecruitmentFields { reward: Some("5".into()), ..Default::default() },
            RecruitmentFields { description: Some("Ops".into()), ..Default::default() },
            RecruitmentFields { skills: Some("Go".into()), ..Default::default() },
        ];

        for patch in patches {
            let mut recruitment = posting();
            recruitment.apply(patch.clone());

            let changed = [
                recruitment.country != posting().country,
                recruitment.city != posting().city,
                recruitment.position != posting().position,
                recruitment.reward != posting().reward,
                recruitment.description != posting().description,
                recruitment.skills != posting().skills,
            ];
            assert_eq!(changed.iter().filter(|c| **c).count(), 1, "{:?}", patch);
            assert_eq!(recruitment.company_id(), 7);
        }
    }

    #[test]
    fn empty_string_is_a_value_not_a_clear() {
        let mut recruitment = posting();
        recruitment.apply(RecruitmentFields {
            reward: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(recruitment.reward.as_deref(), Some(""));
        assert_eq!(recruitment.position.as_deref(), Some("Backend Engineer"));
    }

    #[test]
    fn is_empty_detects_blank_patch() {
        assert!(RecruitmentFields::default().is_empty());
        assert!(!RecruitmentFields {
            skills: Some("Rust".into()),
            ..Default::default()
        }
        .is_empty());
    }
}
