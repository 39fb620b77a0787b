pub(crate) mod listing_controls;
pub(crate) mod pagination_bar;
pub(crate) mod post_list;
