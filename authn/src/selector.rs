//! Authentication client selection.

use authz::AuthorizationGenerator;
use config::ConsoleConfig;
use tracing::{info, warn};

use crate::client::{AuthClient, ClientKind};

/// Build the ordered authentication client list for a configuration.
///
/// The conditions are independent, not mutually exclusive: a console
/// may carry both the CAS and the IP client, in that order. The
/// anonymous fallback appears only when neither is configured, so the
/// returned list is never empty.
///
/// `default_generator` is the generator selected by
/// [`authz::select_default_generator`]; it is bound to the delegated
/// CAS client. The IP and anonymous clients are instead bound to the
/// static admin-roles generator: a caller admitted by address (or by
/// nothing at all) is granted the admin roles unconditionally.
pub fn build_clients(
    config: &ConsoleConfig,
    default_generator: AuthorizationGenerator,
) -> Vec<AuthClient> {
    let mut clients = Vec::new();

    if config.has_server_name() {
        info!(
            "Configuring an authentication strategy delegated to the CAS server at [{}]",
            config.server_name
        );
        clients.push(AuthClient::new(
            "CasClient",
            ClientKind::DelegatedCas {
                login_url: config.login_url.clone(),
            },
            default_generator,
        ));
    }

    if config.has_ip_regex() {
        info!(
            "Configuring an authentication strategy based on authorized IP addresses matching [{}]",
            config.authz_ip_regex
        );
        clients.push(AuthClient::new(
            "IpClient",
            ClientKind::IpMatch {
                pattern: config.authz_ip_regex.clone(),
            },
            AuthorizationGenerator::static_admin_roles(config),
        ));
    }

    if clients.is_empty() {
        warn!(
            "No authentication strategy is defined; the console will establish an anonymous \
             authentication mode whereby access is immediately granted. This is not suitable \
             for production use. Consider configuring an authentication strategy."
        );
        clients.push(AuthClient::new(
            "AnonymousClient",
            ClientKind::Anonymous,
            AuthorizationGenerator::static_admin_roles(config),
        ));
    }

    clients
}

#[cfg(test)]
mod tests {
    use super::*;
    use authz::select_default_generator;

    fn base_config() -> ConsoleConfig {
        ConsoleConfig {
            admin_roles: vec!["ROLE_ADMIN".to_string()],
            ..ConsoleConfig::default()
        }
    }

    fn clients_for(config: &ConsoleConfig) -> Vec<AuthClient> {
        build_clients(config, select_default_generator(config))
    }

    #[test]
    fn test_cas_client_when_server_name_set() {
        let config = ConsoleConfig {
            server_name: "https://cas.example.org".to_string(),
            login_url: "https://cas.example.org/login".to_string(),
            ..base_config()
        };
        let clients = clients_for(&config);
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name(), "CasClient");
        assert!(matches!(
            clients[0].kind(),
            ClientKind::DelegatedCas { login_url } if login_url == "https://cas.example.org/login"
        ));
    }

    #[test]
    fn test_cas_client_carries_the_default_generator() {
        let config = ConsoleConfig {
            server_name: "https://cas.example.org".to_string(),
            authz_attributes: vec!["dept".to_string()],
            ..base_config()
        };
        let clients = clients_for(&config);
        assert!(matches!(
            clients[0].generator(),
            AuthorizationGenerator::AttributeDerived { .. }
        ));
    }

    #[test]
    fn test_ip_client_when_regex_set() {
        let config = ConsoleConfig {
            authz_ip_regex: r"127\.0\.0\..*".to_string(),
            ..base_config()
        };
        let clients = clients_for(&config);
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name(), "IpClient");
        // IP-matched callers get the static admin grant, never the
        // default generator.
        assert_eq!(
            clients[0].generator(),
            &AuthorizationGenerator::StaticRoles {
                roles: vec!["ROLE_ADMIN".to_string()]
            }
        );
    }

    #[test]
    fn test_both_clients_in_cas_then_ip_order() {
        let config = ConsoleConfig {
            server_name: "https://cas.example.org".to_string(),
            login_url: "https://cas.example.org/login".to_string(),
            authz_ip_regex: r"127\.0\.0\..*".to_string(),
            ..base_config()
        };
        let clients = clients_for(&config);
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].name(), "CasClient");
        assert_eq!(clients[1].name(), "IpClient");
    }

    #[test]
    fn test_anonymous_fallback_when_nothing_configured() {
        let clients = clients_for(&base_config());
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name(), "AnonymousClient");
        assert!(matches!(clients[0].kind(), ClientKind::Anonymous));
        assert_eq!(
            clients[0].generator(),
            &AuthorizationGenerator::StaticRoles {
                roles: vec!["ROLE_ADMIN".to_string()]
            }
        );
    }

    #[test]
    fn test_empty_login_url_does_not_prevent_selection() {
        let config = ConsoleConfig {
            server_name: "https://cas.example.org".to_string(),
            ..base_config()
        };
        let clients = clients_for(&config);
        assert_eq!(clients[0].name(), "CasClient");
        assert!(clients[0].login_url().is_err());
    }

    #[test]
    fn test_selection_is_idempotent() {
        let config = ConsoleConfig {
            server_name: "https://cas.example.org".to_string(),
            authz_ip_regex: r"10\..*".to_string(),
            ..base_config()
        };
        assert_eq!(clients_for(&config), clients_for(&config));
    }
}
