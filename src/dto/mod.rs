pub mod company_dto;
pub mod recruitment_dto;
