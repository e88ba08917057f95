#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod flow_service;
pub mod home_service;
pub mod intake_service;
pub mod practice_service;
pub mod profile_service;
pub mod stats_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, FlowServiceError, IntakeServiceError, ProfileServiceError};
pub use flow_service::FlowService;
pub use home_service::HomeService;
pub use intake_service::IntakeService;
pub use practice_service::PracticeService;
pub use profile_service::ProfileService;
pub use stats_service::StatsService;
