use crate::{
    config::Settings,
    error, info,
    server::{AppState, start_api_server},
    warning,
};

pub async fn serve(addr: Option<String>, memory: bool) {
    let mut settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Cannot load settings: {}", e),
    };

    if let Some(addr) = addr {
        settings.server_addr = addr;
    }

    let state = if memory {
        warning!("Tokens are kept in memory and lost on restart.");
        AppState::in_memory(settings)
    } else {
        match AppState::with_redis(settings) {
            Ok(state) => state,
            Err(e) => error!("Cannot set up the token store: {}", e),
        }
    };

    info!(
        "Saving tracks to playlist {} via {} token store",
        state.settings.playlist_id, state.store_kind
    );

    if let Err(e) = start_api_server(state).await {
        error!("Server stopped: {}", e);
    }
}
