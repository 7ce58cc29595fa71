use actix_web::dev::ServiceRequest;

#[tracing::instrument(name = "authenticate as anonym", skip(req))]
pub fn anonym(req: &mut ServiceRequest) -> Result<bool, String> {
    tracing::debug!(path = %req.path(), "no bearer token, continuing anonymously");
    Ok(true)
}
