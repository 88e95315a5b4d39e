// Cross-origin admission policy. The decision is a pure function of the
// declared origin and the configuration so it stays testable without a
// running server.

// Outcome of admitting a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowDecision {
    // Request proceeds; `credentials` says whether credentialed
    // cross-origin responses are permitted for it.
    Allowed { credentials: bool },
    Rejected,
}

// Resolved once at startup from the environment; immutable afterwards.
#[derive(Debug, Clone)]
pub enum OriginPolicy {
    // Every origin is admitted and credentials are honored.
    AllowAll,
    // Only origins listed verbatim are admitted. Empty entries are dropped
    // at construction time.
    Allowlist(Vec<String>),
}

impl OriginPolicy {
    pub fn allowlist(origins: impl IntoIterator<Item = String>) -> Self {
        OriginPolicy::Allowlist(
            origins
                .into_iter()
                .filter(|origin| !origin.is_empty())
                .collect(),
        )
    }

    pub fn is_allow_all(&self) -> bool {
        matches!(self, OriginPolicy::AllowAll)
    }

    pub fn origins(&self) -> &[String] {
        match self {
            OriginPolicy::AllowAll => &[],
            OriginPolicy::Allowlist(origins) => origins,
        }
    }

    // Admission rules:
    // - allow-all mode admits everything, credentials included;
    // - a request without a declared origin (same-origin pages, curl,
    //   server-to-server calls) is always admitted so non-browser callers
    //   keep working;
    // - otherwise the declared origin must match an allowlist entry
    //   exactly. Comparison is case-sensitive, no wildcards.
    pub fn decide(&self, declared_origin: Option<&str>) -> AllowDecision {
        match self {
            OriginPolicy::AllowAll => AllowDecision::Allowed { credentials: true },
            OriginPolicy::Allowlist(origins) => match declared_origin {
                None => AllowDecision::Allowed { credentials: false },
                Some(origin) => {
                    if origins.iter().any(|allowed| allowed == origin) {
                        AllowDecision::Allowed { credentials: true }
                    } else {
                        AllowDecision::Rejected
                    }
                }
            },
        }
    }
}
