use crate::domain::origin::OriginPolicy;

pub const DEFAULT_PORT: u16 = 5000;

// Immutable server configuration, read once at startup and passed to the
// components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub origin_policy: OriginPolicy,
    pub mongo_uri: Option<String>,
    pub expose_internal_routes: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Resolution is separated from the process environment so tests can
    // inject values without touching global state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let origin_policy = if flag(lookup("ALLOW_ALL_ORIGINS")) {
            OriginPolicy::AllowAll
        } else {
            OriginPolicy::allowlist(
                [lookup("FRONTEND_ORIGIN"), lookup("FRONTEND_PROD_ORIGIN")]
                    .into_iter()
                    .flatten(),
            )
        };

        let mongo_uri = lookup("MONGO_URI").filter(|uri| !uri.is_empty());
        let expose_internal_routes = flag(lookup("EXPOSE_INTERNAL_ROUTES"));

        Config {
            port,
            origin_policy,
            mongo_uri,
            expose_internal_routes,
        }
    }
}

// "true" in any casing enables a flag; everything else leaves it off.
fn flag(value: Option<String>) -> bool {
    matches!(value, Some(v) if v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn when_environment_is_empty_then_defaults_apply() {
        let config = config_from(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(!config.origin_policy.is_allow_all());
        assert!(config.origin_policy.origins().is_empty());
        assert_eq!(config.mongo_uri, None);
        assert!(!config.expose_internal_routes);
    }

    #[test]
    fn when_port_is_set_then_it_overrides_the_default() {
        let config = config_from(&[("PORT", "8080")]);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn when_port_is_not_a_number_then_the_default_applies() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn when_allow_all_is_true_in_any_casing_then_allow_all_mode_is_enabled() {
        assert!(config_from(&[("ALLOW_ALL_ORIGINS", "true")])
            .origin_policy
            .is_allow_all());
        assert!(config_from(&[("ALLOW_ALL_ORIGINS", "TRUE")])
            .origin_policy
            .is_allow_all());
        assert!(!config_from(&[("ALLOW_ALL_ORIGINS", "yes")])
            .origin_policy
            .is_allow_all());
    }

    #[test]
    fn when_frontend_origins_are_set_then_both_land_on_the_allowlist() {
        let config = config_from(&[
            ("FRONTEND_ORIGIN", "http://localhost:3000"),
            ("FRONTEND_PROD_ORIGIN", "https://app.example.com"),
        ]);
        assert_eq!(
            config.origin_policy.origins(),
            [
                "http://localhost:3000".to_string(),
                "https://app.example.com".to_string(),
            ]
        );
    }

    #[test]
    fn when_only_one_frontend_origin_is_set_then_the_allowlist_has_one_entry() {
        let config = config_from(&[("FRONTEND_PROD_ORIGIN", "https://app.example.com")]);
        assert_eq!(
            config.origin_policy.origins(),
            ["https://app.example.com".to_string()]
        );
    }

    #[test]
    fn when_mongo_uri_is_empty_then_it_is_treated_as_unset() {
        let config = config_from(&[("MONGO_URI", "")]);
        assert_eq!(config.mongo_uri, None);
    }
}
