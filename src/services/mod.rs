// Tabbrowser services
// Services provide core functionality: persistence, request filtering, navigation, settings and theming.

pub mod navigation;
pub mod request_filter;
pub mod settings_engine;
pub mod theme_engine;
pub mod user_data_store;
