//! Contact form page.

use axum::{
    extract::State,
    response::{Html, Redirect},
};

use crate::state::AppState;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const SITE_KEY_PLACEHOLDER: &str = "{{ site_key }}";

/// Render the form page with the widget's site key
pub fn render_index(site_key: &str) -> String {
    INDEX_TEMPLATE.replace(SITE_KEY_PLACEHOLDER, &escape_attr(site_key))
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serve the form page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_page.to_string())
}

/// `/index` is an alias kept for old links
pub async fn redirect_index() -> Redirect {
    Redirect::temporary("/")
}
