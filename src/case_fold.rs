//! Case-insensitive key resolution shared by the option containers.

/// Returns true if both keys are equal after Unicode lowercasing.
pub(crate) fn fold_eq(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Resolves `name` against the stored keys.
///
/// Returns the first stored key that matches `name` case-insensitively,
/// keeping its original casing, or `name` itself when nothing matches.
pub(crate) fn resolve<'a, I>(keys: I, name: &'a str) -> &'a str
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter()
        .find(|key| fold_eq(key, name))
        .unwrap_or(name)
}
