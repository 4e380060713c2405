//! UIコンポーネントモジュール

pub mod artwork_card;
pub mod favorite_button;
pub mod layout;
pub mod status_line;

pub use artwork_card::ArtworkCard;
pub use favorite_button::FavoriteButton;
pub use layout::{Footer, Nav};
pub use status_line::StatusLine;
