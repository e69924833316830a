use crate::helpers::JsonResponse;
use actix_web::web::Bytes;
use actix_web::Error;
use serde::de::DeserializeOwned;
use serde_valid::Validate;
use std::str;

/// Decodes a request body into a form and validates it.
///
/// Deserialization goes through `serde_path_to_error` so a wrong type or
/// an out-of-domain enum token names the offending field. Validation
/// collects every failing field, not just the first. Nothing reaches
/// storage until both passes succeed.
pub(crate) fn body_into_form<T>(body: Bytes) -> Result<T, Error>
where
    T: DeserializeOwned + Validate,
{
    let body_str = str::from_utf8(&body)
        .map_err(|err| JsonResponse::bad_request(format!("invalid utf-8 body: {}", err)))?;
    let deserializer = &mut serde_json::Deserializer::from_str(body_str);
    let form: T = serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let msg = format!("{}: {}", err.path(), err.inner());
        tracing::debug!("malformed request body: {}", msg);
        JsonResponse::bad_request(msg)
    })?;

    form.validate().map_err(|errors| {
        tracing::debug!("invalid form data: {}", errors);
        JsonResponse::form_error(errors)
    })?;

    Ok(form)
}
