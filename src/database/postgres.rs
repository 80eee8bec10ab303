use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::store::Store;
use crate::error::Result;
use crate::models::company::{Company, NewCompany};
use crate::models::recruitment::{NewRecruitment, Recruitment};

const RECRUITMENT_COLUMNS: &str =
    "id, company_id, country, city, position, reward, description, skills";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_company(&self, company: NewCompany) -> Result<Company> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO company (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(company.name)
        .bind(company.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    async fn find_company(&self, id: i64) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "SELECT id, name, description FROM company WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    async fn insert_recruitment(&self, recruitment: NewRecruitment) -> Result<Recruitment> {
        let company_id = recruitment.company_id();
        let fields = recruitment.fields;
        let query = format!(
            r#"
            INSERT INTO recruitment (
                company_id, country, city, position, reward, description, skills
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7
            )
            RETURNING {}
            "#,
            RECRUITMENT_COLUMNS
        );
        let stored = sqlx::query_as::<_, Recruitment>(&query)
            .bind(company_id)
            .bind(fields.country)
            .bind(fields.city)
            .bind(fields.position)
            .bind(fields.reward)
            .bind(fields.description)
            .bind(fields.skills)
            .fetch_one(&self.pool)
            .await?;

        Ok(stored)
    }

    async fn find_recruitment(&self, id: i64) -> Result<Option<Recruitment>> {
        let query = format!("SELECT {} FROM recruitment WHERE id = $1", RECRUITMENT_COLUMNS);
        let recruitment = sqlx::query_as::<_, Recruitment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(recruitment)
    }

    async fn find_recruitments_by_company(&self, company_id: i64) -> Result<Vec<Recruitment>> {
        let query = format!(
            "SELECT {} FROM recruitment WHERE company_id = $1 ORDER BY id",
            RECRUITMENT_COLUMNS
        );
        let items = sqlx::query_as::<_, Recruitment>(&query)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn save_recruitment(&self, recruitment: &Recruitment) -> Result<Recruitment> {
        let query = format!(
            r#"
            UPDATE recruitment
            SET
                country = $2,
                city = $3,
                position = $4,
                reward = $5,
                description = $6,
                skills = $7
            WHERE id = $1
            RETURNING {}
            "#,
            RECRUITMENT_COLUMNS
        );
        let stored = sqlx::query_as::<_, Recruitment>(&query)
            .bind(recruitment.id())
            .bind(&recruitment.country)
            .bind(&recruitment.city)
            .bind(&recruitment.position)
            .bind(&recruitment.reward)
            .bind(&recruitment.description)
            .bind(&recruitment.skills)
            .fetch_one(&self.pool)
            .await?;

        Ok(stored)
    }

    async fn delete_recruitment(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM recruitment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn search_recruitments(&self, keyword: &str) -> Result<Vec<Recruitment>> {
        // strpos keeps `%` and `_` literal, unlike LIKE.
        let items = sqlx::query_as::<_, Recruitment>(
            r#"
            SELECT r.id, r.company_id, r.country, r.city, r.position, r.reward, r.description, r.skills
            FROM recruitment r
            JOIN company c ON c.id = r.company_id
            WHERE strpos(LOWER(COALESCE(c.name, '')), $1) > 0
               OR strpos(LOWER(COALESCE(r.position, '')), $1) > 0
            ORDER BY r.id
            "#,
        )
        .bind(keyword)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
