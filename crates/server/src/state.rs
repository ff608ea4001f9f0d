use service::AppServices;

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    pub services: AppServices,
}

impl ServerState {
    pub fn new(services: AppServices) -> Self {
        Self { services }
    }
}
