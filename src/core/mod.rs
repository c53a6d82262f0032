pub mod list_view;
pub mod request;
