//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod appointment_repo;
pub mod business_repo;
pub mod contact_repo;
pub mod service_repo;
pub mod user_repo;
pub mod vacancy_repo;

pub use appointment_repo::AppointmentRepo;
pub use business_repo::BusinessRepo;
pub use contact_repo::ContactRepo;
pub use service_repo::ServiceRepo;
pub use user_repo::UserRepo;
pub use vacancy_repo::VacancyRepo;
