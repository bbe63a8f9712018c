pub mod birthday_overlay;
pub mod nav_controls;
pub mod snowfall;
pub mod year_image;
pub mod year_strip;
