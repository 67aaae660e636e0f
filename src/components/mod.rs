pub mod loading_overlay;
pub mod notifications;
