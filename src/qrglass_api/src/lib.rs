pub mod client;
pub mod compose;
pub mod constants;
pub mod request;
pub mod types;

#[cfg(not(tarpaulin_include))]
pub fn get_client() -> client::QrApiClient {
    client::QrApiClient::new()
}
