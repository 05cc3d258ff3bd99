use validator::ValidationErrors;

/// Picks the message of the first failing field, walking `fields` in order.
pub fn first_message(errors: &ValidationErrors, fields: &[&str]) -> Option<String> {
    let field_errors = errors.field_errors();

    fields.iter().find_map(|name| {
        field_errors
            .iter()
            .find(|(field, _)| field.to_string() == *name)
            .and_then(|(_, errors)| errors.first())
            .map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("Invalid {}", name),
            })
    })
}
