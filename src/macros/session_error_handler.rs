macro_rules! session_handle_error_http {
    ( $data:expr, $target:expr, $type_str:expr) => {
        match $data {
            Ok(e) => e,
            Err(
                error @ ($crate::errors::Error::SessionNotFoundError { .. }
                | $crate::errors::Error::HeatOutOfRangeError { .. }
                | $crate::errors::Error::LaneOutOfRangeError { .. }),
            ) => {
                log::info!(target:$target, "{} not found. (error: {})", $type_str, error);
                return Err(rocket::http::Status::NotFound);
            }
            Err(error) if error.is_invalid_input() => {
                log::warn!(target:$target, "Rejected {}. (error: {})", $type_str, error);
                return Err(rocket::http::Status::BadRequest);
            }
            Err(error) => {
                log::error!(target:$target, "Error getting {}. (error: {})", $type_str, error);
                return Err(rocket::http::Status::InternalServerError);
            }
        }
    }
}

pub(crate) use session_handle_error_http;
