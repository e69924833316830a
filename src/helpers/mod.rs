pub(crate) mod form;
pub(crate) mod json;

pub(crate) use form::body_into_form;
pub(crate) use json::JsonResponse;
