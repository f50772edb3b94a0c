pub mod food_item;
pub mod health;

mod router;
pub use router::get_router;
