//! Screen switching. Entering a data-backed screen kicks off its load.

use crate::core::{AppCore, AppError, Screen};
use crate::workflows::{feed, profile};

pub async fn navigate(app: &AppCore, screen: Screen) -> Result<(), AppError> {
    app.mutate(|state| state.screen = screen);
    match screen {
        Screen::Feed => feed::refresh_feed(app).await,
        Screen::Profile => profile::load_profile(app).await,
        _ => Ok(()),
    }
}
