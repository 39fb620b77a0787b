pub(crate) mod http_gateway;
