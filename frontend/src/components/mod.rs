pub mod architecture;
pub mod crew;
pub mod deep_dive;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod lightbox;
pub mod nav_bar;
