pub(crate) mod content_gateway;
pub(crate) mod upstream;
