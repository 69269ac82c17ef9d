//! Entities - request-scoped itinerary model and stored documents

mod footprint;
mod game;
mod itinerary;
mod user;

pub use footprint::{FootprintResult, total_distance_km};
pub use game::{GAME_SUMMARY_FIELDS, GameDocument, ID_FIELD};
pub use itinerary::{Itinerary, ItineraryStop, StopFields};
pub use user::User;
