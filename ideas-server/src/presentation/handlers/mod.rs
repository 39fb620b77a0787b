pub(crate) mod ideas;
pub(crate) mod images;
