use crate::config::Config;
use crate::screens::{Route, Screens};
use anyhow::Result;
use devfolio_api::ApiClient;
use devfolio_session::{AuthFlow, FileSessionStore, SessionStore};
use tracing::{debug, info};

/// Application service - wires config, session, API client, and screens
pub struct AppService {
    config: Config,
}

impl AppService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the client until the user quits
    pub async fn run(self) -> Result<()> {
        devfolio_logging::init_logging(&self.config.logging.level)?;
        info!("Starting Devfolio client");

        let store = FileSessionStore::new(self.config.session_dir());
        let flow = AuthFlow::resume(store)?;
        let client = ApiClient::new(&self.config.api.base_url)?;
        info!("API client ready at {}", self.config.api.base_url);

        let mut screens = Screens::new(client, flow);
        let mut route = initial_route(screens.flow());

        loop {
            debug!(?route, "entering screen");
            let next = match route {
                Route::Auth => screens.auth().await?,
                Route::Dashboard => screens.dashboard().await?,
                Route::CreateProfile => screens.create_profile().await?,
                Route::Edit => screens.edit_profile().await?,
            };

            match next {
                Some(r) => route = r,
                None => break,
            }
        }

        info!("Devfolio client stopped");
        Ok(())
    }
}

/// Landing screen for the current auth state
///
/// A resumed session goes straight to the dashboard; everyone else starts
/// at authentication.
pub fn initial_route<S: SessionStore>(flow: &AuthFlow<S>) -> Route {
    if flow.is_authenticated() {
        Route::Dashboard
    } else {
        Route::Auth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devfolio_session::MemorySessionStore;
    use devfolio_types::Session;

    #[test]
    fn test_anonymous_lands_on_auth() {
        let flow = AuthFlow::resume(MemorySessionStore::new()).unwrap();
        assert_eq!(initial_route(&flow), Route::Auth);
    }

    #[test]
    fn test_resumed_session_lands_on_dashboard() {
        let store = MemorySessionStore::new();
        store.set_session(&Session::new("opaque-token", None)).unwrap();

        let flow = AuthFlow::resume(store).unwrap();
        assert_eq!(initial_route(&flow), Route::Dashboard);
    }
}
