pub mod codec;
pub mod data_model;
pub mod i18n;
pub mod instant;
pub mod list_state;
pub mod massive;
pub mod page;
pub mod relationship;
pub mod toggle;
