pub mod errors;
pub mod models;
pub mod search;

pub use errors::KikitoriError;
pub use models::{
    Card,
    Deck,
};
