pub mod build_client;
pub mod fetch_page;
pub mod init_logging;
pub mod resolve_url;

#[cfg(test)]
pub mod test_server;
