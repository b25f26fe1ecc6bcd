use crate::service::error::ServiceError;

pub(crate) const MALFORMED_FILE_NAME: &str =
    "The request was not formatted correctly the file name's must be underscore delimited";
pub(crate) const NON_INTEGER_PROPERTY_ID: &str =
    "The request was not formatted correctly the file name's 2nd part must be an integer";

/// Extracts the target property id from a file part named `<alias>_<propertyId>`.
///
/// Surrounding double quotes are stripped first. The alias is accepted as-is.
pub(crate) fn parse_property_id(disposition_name: &str) -> Result<i32, ServiceError> {
    let name = disposition_name.trim_matches('"');
    let parts: Vec<&str> = name.split('_').collect();

    let [_alias, property_id] = parts.as_slice() else {
        return Err(ServiceError::bad_request(MALFORMED_FILE_NAME));
    };

    property_id
        .trim()
        .parse::<i32>()
        .map_err(|_| ServiceError::bad_request(NON_INTEGER_PROPERTY_ID))
}
