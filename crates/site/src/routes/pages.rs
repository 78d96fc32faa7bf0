//! Marketing page handlers: features, pricing, docs, not-found.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::content::{DocCategory, FeatureCard, PricingTier};
use crate::filters;
use crate::middleware::{CurrentUser, Theme};
use crate::state::AppState;

/// Features page template.
#[derive(Template, WebTemplate)]
#[template(path = "features.html")]
pub struct FeaturesTemplate {
    pub theme: &'static str,
    pub account_name: Option<String>,
    pub cards: Vec<FeatureCard>,
}

/// Features page handler.
///
/// GET /features
#[instrument(skip(state, user))]
pub async fn features(
    State(state): State<AppState>,
    theme: Theme,
    CurrentUser(user): CurrentUser,
) -> FeaturesTemplate {
    FeaturesTemplate {
        theme: theme.as_str(),
        account_name: user.map(|a| a.name),
        cards: state.content().feature_cards().to_vec(),
    }
}

/// Pricing page template.
#[derive(Template, WebTemplate)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub theme: &'static str,
    pub account_name: Option<String>,
    pub tiers: Vec<PricingTier>,
}

/// Pricing page handler.
///
/// GET /pricing
#[instrument(skip(state, user))]
pub async fn pricing(
    State(state): State<AppState>,
    theme: Theme,
    CurrentUser(user): CurrentUser,
) -> PricingTemplate {
    PricingTemplate {
        theme: theme.as_str(),
        account_name: user.map(|a| a.name),
        tiers: state.content().pricing_tiers().to_vec(),
    }
}

/// Docs page template.
#[derive(Template, WebTemplate)]
#[template(path = "docs.html")]
pub struct DocsTemplate {
    pub theme: &'static str,
    pub account_name: Option<String>,
    pub categories: Vec<DocCategory>,
}

/// Docs page handler.
///
/// GET /docs
#[instrument(skip(state, user))]
pub async fn docs(
    State(state): State<AppState>,
    theme: Theme,
    CurrentUser(user): CurrentUser,
) -> DocsTemplate {
    DocsTemplate {
        theme: theme.as_str(),
        account_name: user.map(|a| a.name),
        categories: state.content().doc_categories().to_vec(),
    }
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub theme: &'static str,
    pub account_name: Option<String>,
}

/// Wildcard fallback handler.
pub async fn not_found(theme: Theme, CurrentUser(user): CurrentUser) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            theme: theme.as_str(),
            account_name: user.map(|a| a.name),
        },
    )
}
