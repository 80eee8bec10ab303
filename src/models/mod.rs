pub mod company;
pub mod recruitment;
