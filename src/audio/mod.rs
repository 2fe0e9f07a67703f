pub mod player;

pub use player::{
    step_in_view,
    Player,
    Step,
};
