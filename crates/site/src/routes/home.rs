//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::content::FeatureCard;
use crate::filters;
use crate::middleware::{CurrentUser, Theme};
use crate::state::AppState;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub theme: &'static str,
    pub account_name: Option<String>,
    /// The first three feature cards, previewed on the landing page.
    pub highlights: Vec<FeatureCard>,
    /// The onboarding step strip.
    pub steps: Vec<String>,
}

/// Landing page handler.
///
/// GET /
#[instrument(skip(state, user))]
pub async fn home(
    State(state): State<AppState>,
    theme: Theme,
    CurrentUser(user): CurrentUser,
) -> HomeTemplate {
    let highlights = state.content().feature_cards().iter().take(3).cloned().collect();
    let steps = state
        .content()
        .steps("onboarding")
        .map(|s| s.steps.clone())
        .unwrap_or_default();

    HomeTemplate {
        theme: theme.as_str(),
        account_name: user.map(|a| a.name),
        highlights,
        steps,
    }
}
