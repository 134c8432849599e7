//! # Session renewal around authenticated calls
//!
//! Access tokens are short-lived. [`authorized`] runs a call with the current
//! session; on a 401 it trades the refresh token for a new access token and
//! runs the call exactly once more. When renewal fails too, the session is
//! over and the caller signs the user out.

use std::future::Future;

use api::{ApiError, Session};

/// What happened to the session while running a call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionChange {
    Unchanged,
    /// The access token was renewed; store this session.
    Renewed(Session),
    /// The server stopped accepting the session; sign the user out.
    Expired,
}

#[derive(Debug)]
pub struct Authorized<T> {
    pub result: Result<T, ApiError>,
    pub session: SessionChange,
}

/// Run `call` as `session`, renewing through `renew` and retrying once on 401.
pub async fn authorized<T, Call, CallFut, Renew, RenewFut>(
    session: Option<Session>,
    call: Call,
    renew: Renew,
) -> Authorized<T>
where
    Call: Fn(Option<Session>) -> CallFut,
    CallFut: Future<Output = Result<T, ApiError>>,
    Renew: FnOnce(Session) -> RenewFut,
    RenewFut: Future<Output = Result<Session, ApiError>>,
{
    let result = call(session.clone()).await;
    let Some(current) = session else {
        return Authorized {
            result,
            session: SessionChange::Unchanged,
        };
    };
    if !matches!(&result, Err(e) if e.is_unauthorized()) {
        return Authorized {
            result,
            session: SessionChange::Unchanged,
        };
    }

    tracing::info!("Access token for {} rejected, renewing", current.username);
    let renewed = match renew(current).await {
        Ok(renewed) => renewed,
        Err(e) => {
            tracing::warn!("Session renewal failed: {e}");
            return Authorized {
                result,
                session: SessionChange::Expired,
            };
        }
    };

    let result = call(Some(renewed.clone())).await;
    let session = match &result {
        Err(e) if e.is_unauthorized() => SessionChange::Expired,
        _ => SessionChange::Renewed(renewed),
    };
    Authorized { result, session }
}
