//! ページモジュール

pub mod favorites;
pub mod not_found;
pub mod single_art;
pub mod startpage;

pub use favorites::FavoritesPage;
pub use not_found::NotFound;
pub use single_art::SingleArt;
pub use startpage::Startpage;
