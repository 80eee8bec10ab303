pub mod company_service;
pub mod recruitment_service;
