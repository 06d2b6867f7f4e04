//! Naming-style classification for extracted identifier lists.

/// A naming-style category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStyle {
    UpperSnake,
    Snake,
    Pascal,
    Camel,
    Mixed,
    Unknown,
}

impl NamingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStyle::UpperSnake => "UPPER_SNAKE_CASE",
            NamingStyle::Snake => "snake_case",
            NamingStyle::Pascal => "PascalCase",
            NamingStyle::Camel => "camelCase",
            NamingStyle::Mixed => "mixed",
            NamingStyle::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify the dominant naming style of a name list.
///
/// Inspects only the first element. Not a majority vote: a list whose
/// first entry is unrepresentative will be misclassified. Empty input
/// yields [`NamingStyle::Unknown`].
pub fn classify<S: AsRef<str>>(names: &[S]) -> NamingStyle {
    match names.first() {
        Some(sample) => classify_sample(sample.as_ref()),
        None => NamingStyle::Unknown,
    }
}

/// Classify a single identifier. Rules apply in priority order.
fn classify_sample(sample: &str) -> NamingStyle {
    if is_upper_snake(sample) {
        return NamingStyle::UpperSnake;
    }

    if sample.contains('_') && is_all_lowercase(sample) {
        return NamingStyle::Snake;
    }

    match sample.chars().next() {
        Some(first) if first.is_uppercase() && !sample.contains('_') => NamingStyle::Pascal,
        Some(first) if first.is_lowercase() && !sample.contains('_') => NamingStyle::Camel,
        _ => NamingStyle::Mixed,
    }
}

/// All cased characters uppercase (with at least one), or the identifier
/// equals its own underscore-stripped uppercased form.
fn is_upper_snake(sample: &str) -> bool {
    let mut cased = sample.chars().filter(|c| c.is_alphabetic());
    let all_upper = cased.clone().next().is_some() && cased.all(|c| c.is_uppercase());

    let stripped: String = sample.chars().filter(|&c| c != '_').collect();
    all_upper || sample.to_uppercase() == stripped
}

/// All cased characters lowercase, with at least one.
fn is_all_lowercase(sample: &str) -> bool {
    let mut cased = sample.chars().filter(|c| c.is_alphabetic());
    cased.clone().next().is_some() && cased.all(|c| c.is_lowercase())
}
