pub(crate) mod error;
pub(crate) mod image;
pub(crate) mod listing;
