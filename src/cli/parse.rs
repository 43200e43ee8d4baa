use campus_nav_core::graph::Algorithm;

/// An edge named on the command line as `FROM:TO`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRef {
    pub from: String,
    pub to: String,
}

/// Parse `FROM:TO`; names may contain spaces but not colons
pub fn parse_edge_ref(s: &str) -> std::result::Result<EdgeRef, String> {
    match s.split_once(':') {
        Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => Ok(EdgeRef {
            from: from.trim().to_string(),
            to: to.trim().to_string(),
        }),
        _ => Err(format!("expected FROM:TO, got '{}'", s)),
    }
}

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}
