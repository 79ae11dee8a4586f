pub mod api;
pub mod core;
pub mod infra;
pub mod models;

pub mod ax_state {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::infra::route_store::RouteStore;
    use crate::infra::timezone_client::TimezoneClient;

    pub struct AppState {
        pub routes: Arc<dyn RouteStore>,
        pub timezone: TimezoneClient,
        pub db_timeout: Duration,
    }
}
