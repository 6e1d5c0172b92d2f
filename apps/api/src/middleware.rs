use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use imovel_core::AgencyId;
use imovel_domain::{Role, User, UserId};
use tracing::{debug, warn};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";
pub const USER_PLAN_HEADER: &str = "x-user-plan";
pub const AGENCY_ID_HEADER: &str = "x-agency-id";

/// Caller identity forwarded by the gateway, if any.
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<User>);

/// Resolves the forwarded identity headers into a [`CurrentUser`] extension.
///
/// Never rejects a request. Malformed identities resolve to no user, which
/// every check downstream treats as denied.
pub async fn resolve_user(mut request: Request, next: Next) -> Response {
    let user = user_from_headers(request.headers());
    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}

pub fn user_from_headers(headers: &HeaderMap) -> Option<User> {
    let user_id = header_value(headers, USER_ID_HEADER)?;
    let role = header_value(headers, USER_ROLE_HEADER)?;

    let user_id = match UserId::parse(user_id) {
        Ok(user_id) => user_id,
        Err(error) => {
            warn!(%error, "ignoring forwarded identity with malformed user id");
            return None;
        }
    };

    let agency_id = header_value(headers, AGENCY_ID_HEADER).and_then(|value| {
        AgencyId::parse(value)
            .inspect_err(|error| debug!(%error, "ignoring malformed agency id"))
            .ok()
    });
    let plan = header_value(headers, USER_PLAN_HEADER).unwrap_or_default();

    Some(User::new(user_id, Role::parse(role), plan, agency_id))
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
