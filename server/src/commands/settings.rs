//! Settings endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{reject, respond, CommandResponse};
use crate::state::AppState;
use unduck_core::Theme;

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsInfo {
    pub default_bang: String,
    pub default_engine: String,
    pub theme: Theme,
    pub search_url: String,
}

#[derive(Debug, Deserialize)]
pub struct DefaultBangRequest {
    pub bang: String,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

fn load_settings(state: &AppState) -> unduck_core::Result<SettingsInfo> {
    let prefs = state.unduck.preferences();

    Ok(SettingsInfo {
        default_bang: prefs.default_bang()?,
        default_engine: prefs.default_engine_name()?,
        theme: prefs.theme()?,
        search_url: state.unduck.search_url_template(),
    })
}

/// `GET /api/settings`
pub async fn get_settings(State(state): State<AppState>) -> CommandResponse<SettingsInfo> {
    respond(load_settings(&state))
}

/// `PUT /api/settings/default-bang`
pub async fn set_default_bang(
    State(state): State<AppState>,
    payload: Result<Json<DefaultBangRequest>, JsonRejection>,
) -> CommandResponse<String> {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return reject(rejection),
    };
    respond(state.unduck.preferences().set_default_bang(&request.bang))
}

/// `DELETE /api/settings/default-bang`
///
/// Forget the saved choice and answer with the bang now in effect.
pub async fn reset_default_bang(State(state): State<AppState>) -> CommandResponse<String> {
    let prefs = state.unduck.preferences();
    respond(prefs.reset_default_bang().and_then(|()| prefs.default_bang()))
}

/// `PUT /api/settings/theme`
pub async fn set_theme(
    State(state): State<AppState>,
    payload: Result<Json<ThemeRequest>, JsonRejection>,
) -> CommandResponse<Theme> {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return reject(rejection),
    };
    respond(request.theme.parse::<Theme>().and_then(|theme| {
        state.unduck.preferences().set_theme(theme)?;
        Ok(theme)
    }))
}

/// `POST /api/settings/theme/toggle`
pub async fn toggle_theme(State(state): State<AppState>) -> CommandResponse<Theme> {
    respond(state.unduck.preferences().toggle_theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{body_json, get, send};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_default_settings() {
        let state = AppState::for_tests();
        let response = get(&state, "/api/settings").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["default_bang"], "g");
        assert_eq!(json["data"]["default_engine"], "Google");
        assert_eq!(json["data"]["theme"], "light");
        assert_eq!(json["data"]["search_url"], "http://localhost:8080?q=%s");
    }

    #[tokio::test]
    async fn test_set_default_bang() {
        let state = AppState::for_tests();
        let response = send(
            &state,
            json_request("PUT", "/api/settings/default-bang", r#"{"bang":"GH"}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"], "gh");

        let json = body_json(get(&state, "/api/settings").await).await;
        assert_eq!(json["data"]["default_bang"], "gh");
        assert_eq!(json["data"]["default_engine"], "GitHub");
    }

    #[tokio::test]
    async fn test_set_unknown_default_bang() {
        let state = AppState::for_tests();
        let response = send(
            &state,
            json_request("PUT", "/api/settings/default-bang", r#"{"bang":"zzz"}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Unknown bang: zzz");
        assert_eq!(state.unduck.preferences().default_bang().unwrap(), "g");
    }

    #[tokio::test]
    async fn test_set_and_toggle_theme() {
        let state = AppState::for_tests();
        let response = send(
            &state,
            json_request("PUT", "/api/settings/theme", r#"{"theme":"Dark"}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"], "dark");

        let response = send(
            &state,
            Request::post("/api/settings/theme/toggle")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(body_json(response).await["data"], "light");
        assert_eq!(state.unduck.preferences().theme().unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn test_invalid_theme() {
        let state = AppState::for_tests();
        let response = send(
            &state,
            json_request("PUT", "/api/settings/theme", r#"{"theme":"sepia"}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["success"], false);
    }

    #[tokio::test]
    async fn test_reset_default_bang() {
        let state = AppState::for_tests();
        state.unduck.preferences().set_default_bang("gh").unwrap();

        let response = send(
            &state,
            Request::delete("/api/settings/default-bang")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"], "g");
        assert_eq!(state.unduck.preferences().default_bang().unwrap(), "g");
    }

    #[tokio::test]
    async fn test_wrong_typed_body_uses_envelope() {
        let state = AppState::for_tests();
        let response = send(
            &state,
            json_request("PUT", "/api/settings/default-bang", r#"{"bang":5}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert!(json["error"].as_str().unwrap().contains("deserialize"));
        assert_eq!(state.unduck.preferences().default_bang().unwrap(), "g");
    }

    #[tokio::test]
    async fn test_malformed_theme_body_uses_envelope() {
        let state = AppState::for_tests();
        let response = send(
            &state,
            json_request("PUT", "/api/settings/theme", "{not json"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["success"], false);
    }
}
