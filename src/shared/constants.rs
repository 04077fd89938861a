/// Query value meaning "no restriction" for the city and provider filters
pub const FILTER_ALL: &str = "todos";

// =============================================================================
// PLACEHOLDERS
// =============================================================================

pub const NAME_PLACEHOLDER: &str = "Nome não informado";

pub const CITY_PLACEHOLDER: &str = "Cidade não informada";

/// Generic placeholder for missing plan, contact and date values
pub const EMPTY_PLACEHOLDER: &str = "—";

// =============================================================================
// PROVIDERS
// =============================================================================

pub const PROVIDER_NOT_INFORMED: &str = "Não informado";

pub const PROVIDER_NO_INTERNET: &str = "Não usa internet";

/// Known providers, in display and plot order
pub const CANONICAL_PROVIDERS: [&str; 6] = [
    "Claro",
    "Oi",
    "Tim",
    "Vivo",
    PROVIDER_NO_INTERNET,
    PROVIDER_NOT_INFORMED,
];

/// Fixed colors for the known providers
pub const CANONICAL_PALETTE: [(&str, &str); 6] = [
    ("Claro", "#38bdf8"),
    ("Oi", "#fb923c"),
    ("Tim", "#a855f7"),
    ("Vivo", "#34d399"),
    (PROVIDER_NO_INTERNET, "#f87171"),
    (PROVIDER_NOT_INFORMED, "#94a3b8"),
];
