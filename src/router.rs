use crate::deck::{incident_deck, property_deck, tree_deck};
use crate::domain::AffordabilityQuery;
use crate::errors::ServerError;
use crate::responses::{
    html_response, json_response, redirect_response, text_response, xlsx_response, ResultResp,
};
use crate::spreadsheets::export_listings_xlsx;
use crate::state::AppState;
use crate::templates::pages::{dashboard_page, incidents_page, trees_page, DashboardVm};
use astra::Request;
use std::collections::HashMap;
use tracing::{debug, info};

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => dashboard(&req, state),
        ("GET", "/deck.json") => deck_json(&req, state),
        ("GET", "/export.xlsx") => export(&req, state),
        ("GET", "/incidents") => incidents(state),
        ("GET", "/trees") => trees(state),
        ("POST", "/refresh") => {
            state.datasets.invalidate()?;
            info!("datasets will be refetched on next request");
            redirect_response("/")
        }
        ("GET", "/healthz") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn affordability_query(req: &Request) -> Result<AffordabilityQuery, ServerError> {
    AffordabilityQuery::from_params(&parse_query(req)).map_err(ServerError::BadRequest)
}

fn serialize<T: serde::Serialize>(deck: &crate::deck::Deck<T>) -> Result<String, ServerError> {
    deck.to_json().map_err(|_| ServerError::InternalError)
}

fn dashboard(req: &Request, state: &AppState) -> ResultResp {
    let query = affordability_query(req)?;
    let loaded = state.datasets.listings()?;

    let view = query.apply(&loaded.value.listings);
    let deck_json = serialize(&property_deck(&view.rows))?;

    let vm = DashboardVm {
        query,
        view: &view,
        deck_json: &deck_json,
        loaded_at: loaded.loaded_at,
        raw_row_limit: state.config.raw_row_limit,
        mapbox_token: state.config.mapbox_token.as_deref(),
    };

    html_response(dashboard_page(&vm))
}

fn deck_json(req: &Request, state: &AppState) -> ResultResp {
    let query = affordability_query(req)?;
    let loaded = state.datasets.listings()?;

    let view = query.apply(&loaded.value.listings);
    json_response(serialize(&property_deck(&view.rows))?)
}

fn export(req: &Request, state: &AppState) -> ResultResp {
    let query = affordability_query(req)?;
    let loaded = state.datasets.listings()?;

    let view = query.apply(&loaded.value.listings);
    let buffer = export_listings_xlsx(&view.rows)?;

    let suffix = if query.affordable_only { "_affordable" } else { "" };
    xlsx_response(buffer, &format!("nyc_listings{suffix}.xlsx"))
}

fn incidents(state: &AppState) -> ResultResp {
    let loaded = state.datasets.incidents()?;
    let table = &loaded.value;

    let deck_json = serialize(&incident_deck(table))?;
    let placed = table.positioned().count();
    let by_borough = table.count_by("boro");

    html_response(incidents_page(
        &deck_json,
        table.rows.len(),
        placed,
        &by_borough,
        state.config.mapbox_token.as_deref(),
    ))
}

fn trees(state: &AppState) -> ResultResp {
    let loaded = state.datasets.trees()?;

    let deck_json = serialize(&tree_deck(&loaded.value))?;
    html_response(trees_page(
        &deck_json,
        loaded.value.points.len(),
        state.config.mapbox_token.as_deref(),
    ))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
