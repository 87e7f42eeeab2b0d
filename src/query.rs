use rand::Rng;

/// Literal marker within a query template that is replaced with a random
/// string on every expansion.
pub const RAND_PLACEHOLDER: &str = "%RAND%";

/// Length of the generated random label.
pub const RANDOM_STRING_LEN: usize = 12;

/// Generates a uniformly random lowercase ASCII string.
///
/// No uniqueness guarantee across calls; collisions between concurrently
/// issued queries are acceptable.
pub fn random_lowercase(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| rng.gen_range('a'..='z')).collect()
}

/// Expands a query template by substituting every `%RAND%` occurrence with
/// one freshly generated random string. Templates without the placeholder
/// are returned unchanged.
pub fn expand_template(template: &str) -> String {
    if !template.contains(RAND_PLACEHOLDER) {
        return template.to_owned();
    }
    template.replace(RAND_PLACEHOLDER, &random_lowercase(RANDOM_STRING_LEN))
}
