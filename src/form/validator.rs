use crate::form::field::Field;

/// Check every required field, in document order.
///
/// Empty (after trimming) required fields get their `invalid` marker set;
/// the rest have it cleared. Optional fields are not touched.
pub fn validate(fields: &mut [Field]) -> bool {
    let mut is_valid = true;
    for field in fields.iter_mut().filter(|f| f.required) {
        if field.value().trim().is_empty() {
            field.invalid = true;
            is_valid = false;
        } else {
            field.invalid = false;
        }
    }
    is_valid
}
