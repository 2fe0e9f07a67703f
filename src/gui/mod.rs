pub mod app;
pub mod card_list;
pub mod now_playing;
pub mod search_bar;
pub mod theme;
pub mod toast;

pub use app::KikitoriApp;
