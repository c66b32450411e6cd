use log::info;

use crate::domain::session::AdminSession;
use crate::forms::auth::LoginForm;
use crate::services::ServiceResult;

/// Turns the submitted sign-in form into a session.
pub fn login(form: LoginForm) -> ServiceResult<AdminSession> {
    let session = AdminSession::try_from(form)?;
    info!("Admin {} signed in", session.profile().full_name);
    Ok(session)
}
