use crate::error::ValidationError;
use crate::models::{LocationContext, LocationInput, WeatherQuery};

/// Validates the form fields and builds the provider query string.
///
/// A postal code wins over city/state: `"{postal},{country}"` or just
/// `"{postal}"`. Without one, city, state and country are all required and
/// combine to `"{city},{state},{country}"`.
pub fn resolve(input: &LocationInput) -> Result<WeatherQuery, ValidationError> {
    if input.country.is_none() && input.postal_code.is_none() {
        return Err(ValidationError::MissingLocation);
    }

    let place = LocationContext::Place {
        state: input.state.clone(),
        city: input.city.clone(),
        locality: input.locality.clone(),
    };

    if let Some(postal_code) = &input.postal_code {
        let q = match &input.country {
            Some(country) => format!("{},{}", postal_code, country),
            None => postal_code.clone(),
        };
        let context = if input.city.is_none() && input.state.is_none() {
            LocationContext::PostalOnly
        } else {
            place
        };
        return Ok(WeatherQuery { q, context });
    }

    match (&input.city, &input.state, &input.country) {
        (Some(city), Some(state), Some(country)) => Ok(WeatherQuery {
            q: format!("{},{},{}", city, state, country),
            context: place,
        }),
        _ => Err(ValidationError::MissingCityOrState),
    }
}
