use wiremock::MockServer;
use wsdot::{WsdotClient, WsdotConfig};

pub const API_KEY: &str = "test-key";

pub struct TestHelper {
    pub mock_server: MockServer,
    pub client: WsdotClient,
}

impl TestHelper {
    pub async fn new() -> TestHelper {
        let mock_server = MockServer::start().await;
        let config = WsdotConfig::new(API_KEY)
            .with_cameras_base_url(format!("{}/cameras", mock_server.uri()))
            .with_ferries_base_url(format!("{}/ferries", mock_server.uri()))
            .with_timeout(5);
        let client = WsdotClient::new(config).unwrap();

        TestHelper {
            mock_server,
            client,
        }
    }
}
