//! Plan management routes: searchable cards, create, update, delete.
//!
//! Plan mutations change what the product sells, so they require the
//! super-admin role; viewing is open to any signed-in admin.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use lexiops_core::listview::FilterSet;
use lexiops_core::{PlanId, PlanStatus, Price};

use crate::{
    filters,
    middleware::auth::{RequireAdminAuth, RequireSuperAdmin},
    models::Plan,
    routes::dashboard::AdminUserView,
    state::AppState,
};

/// Query parameters for the plans page.
#[derive(Debug, Default, Deserialize)]
pub struct PlansQuery {
    /// Free-text search over the plan name.
    pub q: Option<String>,
    /// Error code carried through a redirect.
    pub error: Option<String>,
}

/// Plan card view.
#[derive(Debug, Clone)]
pub struct PlanCardView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub price_input: String,
    pub max_documents: u32,
    pub max_storage_mb: u32,
    pub max_members: u32,
    pub status: String,
    pub status_class: &'static str,
}

impl From<&Plan> for PlanCardView {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.as_i32(),
            name: plan.name.clone(),
            price: format!("{}/mo", plan.price.display()),
            price_input: plan.price.amount().normalize().to_string(),
            max_documents: plan.max_documents,
            max_storage_mb: plan.max_storage_mb,
            max_members: plan.max_members,
            status: plan.status.label().to_string(),
            status_class: match plan.status {
                PlanStatus::Active => "badge-active",
                PlanStatus::Inactive => "badge-inactive",
            },
        }
    }
}

/// Plans page template.
#[derive(Template)]
#[template(path = "plans/index.html")]
pub struct PlansIndexTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub cards: Vec<PlanCardView>,
    pub search_value: String,
    pub statuses: Vec<&'static str>,
    pub error: Option<String>,
}

/// Plans page handler.
///
/// GET /plans
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<PlansQuery>,
) -> Html<String> {
    let records = state.plans().snapshot();
    let filter = FilterSet::new().query(query.q.as_deref().unwrap_or(""));
    let cards = filter
        .apply(&records)
        .into_iter()
        .map(PlanCardView::from)
        .collect();

    let template = PlansIndexTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/plans".to_string(),
        cards,
        search_value: query.q.unwrap_or_default(),
        statuses: PlanStatus::VALUES.iter().map(|s| s.label()).collect(),
        error: query.error.map(|code| error_message(&code)),
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_string()
    }))
}

/// Create/update form data.
#[derive(Debug, Deserialize)]
pub struct PlanForm {
    pub name: String,
    pub price: String,
    pub max_documents: u32,
    pub max_storage_mb: u32,
    pub max_members: u32,
    pub status: String,
}

/// Parsed and validated form fields.
struct ParsedPlanForm {
    name: String,
    price: Price,
    status: PlanStatus,
}

fn parse_plan_form(form: &PlanForm) -> Result<ParsedPlanForm, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("name");
    }
    let amount: Decimal = form.price.trim().trim_start_matches('$').parse().map_err(|_| "price")?;
    if amount < Decimal::ZERO {
        return Err("price");
    }
    let status = form.status.parse::<PlanStatus>().map_err(|_| "status")?;

    Ok(ParsedPlanForm {
        name: name.to_string(),
        price: Price::new(amount),
        status,
    })
}

/// Create a plan.
///
/// POST /plans
#[instrument(skip(admin, state, form))]
pub async fn create(
    RequireSuperAdmin(admin): RequireSuperAdmin,
    State(state): State<AppState>,
    Form(form): Form<PlanForm>,
) -> Response {
    let parsed = match parse_plan_form(&form) {
        Ok(parsed) => parsed,
        Err(field) => return Redirect::to(&format!("/plans?error=invalid_{field}")).into_response(),
    };

    let plan = Plan {
        id: state.plans().next_id(),
        name: parsed.name,
        max_documents: form.max_documents,
        max_storage_mb: form.max_storage_mb,
        max_members: form.max_members,
        price: parsed.price,
        status: parsed.status,
    };

    if let Err(e) = state.plans().insert(plan) {
        tracing::error!("Failed to create plan: {e}");
        return Redirect::to("/plans?error=conflict").into_response();
    }

    tracing::info!(admin = %admin.email, "Created plan");
    Redirect::to("/plans").into_response()
}

/// Update a plan in place.
///
/// POST /plans/{id}
#[instrument(skip(admin, state, form))]
pub async fn update(
    RequireSuperAdmin(admin): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<PlanForm>,
) -> Response {
    let parsed = match parse_plan_form(&form) {
        Ok(parsed) => parsed,
        Err(field) => return Redirect::to(&format!("/plans?error=invalid_{field}")).into_response(),
    };

    let plan = Plan {
        id: PlanId::new(id),
        name: parsed.name,
        max_documents: form.max_documents,
        max_storage_mb: form.max_storage_mb,
        max_members: form.max_members,
        price: parsed.price,
        status: parsed.status,
    };

    if let Err(e) = state.plans().replace(plan) {
        tracing::warn!(id, "Failed to update plan: {e}");
        return Redirect::to("/plans?error=not_found").into_response();
    }

    tracing::info!(admin = %admin.email, id, "Updated plan");
    Redirect::to("/plans").into_response()
}

/// Delete a plan.
///
/// POST /plans/{id}/delete
#[instrument(skip(admin, state))]
pub async fn delete(
    RequireSuperAdmin(admin): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Response {
    match state.plans().remove(PlanId::new(id)) {
        Ok(plan) => {
            tracing::info!(admin = %admin.email, plan = %plan.name, "Deleted plan");
            Redirect::to("/plans").into_response()
        }
        Err(e) => {
            tracing::warn!(id, "Failed to delete plan: {e}");
            Redirect::to("/plans?error=not_found").into_response()
        }
    }
}

/// Map an error code from the redirect query to display text.
fn error_message(code: &str) -> String {
    match code {
        "invalid_name" => "Plan name cannot be empty.".to_string(),
        "invalid_price" => "Enter the price as a non-negative amount.".to_string(),
        "not_found" => "That plan no longer exists.".to_string(),
        "conflict" => "Could not create the plan. Try again.".to_string(),
        _ => "Invalid input. Check the form and try again.".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(price: &str) -> PlanForm {
        PlanForm {
            name: "Pro".to_string(),
            price: price.to_string(),
            max_documents: 100,
            max_storage_mb: 2048,
            max_members: 5,
            status: "Active".to_string(),
        }
    }

    #[test]
    fn test_parse_plan_form_accepts_dollar_prefix() {
        let parsed = parse_plan_form(&form("$19")).unwrap();
        assert_eq!(parsed.price, Price::from_dollars(19));

        let parsed = parse_plan_form(&form("19.99")).unwrap();
        assert_eq!(parsed.price.display(), "$19.99");
    }

    #[test]
    fn test_parse_plan_form_rejects_bad_price() {
        assert_eq!(parse_plan_form(&form("free")).unwrap_err(), "price");
        assert_eq!(parse_plan_form(&form("-5")).unwrap_err(), "price");
    }

    #[test]
    fn test_card_view_price_input_is_raw_amount() {
        let plan = Plan {
            id: PlanId::new(2),
            name: "Pro".to_string(),
            max_documents: 100,
            max_storage_mb: 2048,
            max_members: 5,
            price: Price::from_dollars(19),
            status: PlanStatus::Active,
        };
        let card = PlanCardView::from(&plan);
        assert_eq!(card.price, "$19/mo");
        assert_eq!(card.price_input, "19");
    }
}
