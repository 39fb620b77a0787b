pub(crate) mod proxy_service;
