//! Application services - Use case implementations

mod footprint_service;
mod game_service;
mod health_service;
mod itinerary_normalizer;
mod user_service;

pub use footprint_service::{FootprintConfig, FootprintService};
pub use game_service::{GAME_PAGE_SIZE, GameService};
pub use health_service::{HealthService, ReadinessReport, ServiceHealth};
pub use itinerary_normalizer::ItineraryNormalizer;
pub use user_service::UserService;
