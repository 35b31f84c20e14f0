pub use super::food::Entity as Food;
pub use super::reservation::Entity as Reservation;
pub use super::restaurant::Entity as Restaurant;
pub use super::user::Entity as User;
