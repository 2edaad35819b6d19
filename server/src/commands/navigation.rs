//! Redirect endpoint and landing page

use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;
use unduck_core::{escape_markup, Unduck};

/// `GET /?q=...`
///
/// Pairs are taken as a list so a repeated `q` never rejects the request;
/// the first one is used.
pub async fn redirect(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let query = params
        .into_iter()
        .find_map(|(key, value)| (key == "q").then_some(value));

    let url = match state.unduck.explain_redirect(query.as_deref()) {
        Ok(url) => url,
        Err(reason) => {
            tracing::debug!(%reason, "Serving landing page");
            return landing_page(&state.unduck).into_response();
        }
    };

    match HeaderValue::from_str(&url) {
        Ok(location) => (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response(),
        Err(_) => {
            tracing::warn!(url = %url, "Resolved URL is not a valid Location header");
            landing_page(&state.unduck).into_response()
        }
    }
}

fn landing_page(unduck: &Unduck) -> Html<String> {
    let prefs = unduck.preferences();
    let bang = prefs.default_bang().unwrap_or_else(|_| unduck.config().fallback_bang.clone());
    let engine = prefs
        .default_engine_name()
        .unwrap_or_else(|_| bang.clone());
    let theme = prefs.theme().unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Unduck</title>
  <link rel="search" type="application/opensearchdescription+xml" title="Unduck" href="/opensearch.xml" />
</head>
<body>
  <main class="content-container">
    <h1>Und*ck</h1>
    <p>DuckDuckGo's bang redirects are too slow. Add the following URL as a custom search engine to your browser. Enables <a href="https://duckduckgo.com/bang.html" target="_blank">all of DuckDuckGo's bangs.</a></p>
    <input type="text" class="url-input" value="{search_url}" readonly />
    <form action="/" method="get" class="search-bar-container">
      <input type="search" name="q" class="search-input" placeholder="Search {engine} (!{bang}) ..." />
    </form>
  </main>
</body>
</html>
"#,
        theme = theme,
        search_url = escape_markup(&unduck.search_url_template()),
        engine = escape_markup(&engine),
        bang = escape_markup(&bang),
    ))
}
