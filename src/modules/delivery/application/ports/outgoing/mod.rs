pub mod delivery_query;
pub mod delivery_repository;
pub mod volunteer_repository;

pub use delivery_query::{DeliveryBoardRow, DeliveryQuery, DeliveryQueryError};
pub use delivery_repository::{DeliveryRepository, UpdateDeliveryError};
pub use volunteer_repository::{NewVolunteer, VolunteerRepository, VolunteerRepositoryError};
