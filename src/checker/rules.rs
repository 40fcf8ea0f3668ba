use crate::document::IcecastConfig;

use super::{Issue, IssueValue, Severity};

/// Listener count assumed when the caller does not supply one.
pub const DEFAULT_EXPECTED_LISTENERS: u64 = 100;

/// Baseline client limit recommended for small deployments.
const BASELINE_CLIENT_LIMIT: i64 = 128;

/// Evaluates the fixed rule set against a parsed configuration.
///
/// The checker is a pure function over its input: it never mutates the
/// document, never fails for well-typed input, and emits issues in a
/// fixed rule order. Grouping by severity is a formatting concern.
#[derive(Debug, Clone)]
pub struct ConfigChecker {
    expected_listeners: u64,
}

impl ConfigChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expected_listeners: DEFAULT_EXPECTED_LISTENERS,
        }
    }

    #[must_use]
    pub const fn with_expected_listeners(mut self, listeners: u64) -> Self {
        self.expected_listeners = listeners;
        self
    }

    #[must_use]
    pub const fn expected_listeners(&self) -> u64 {
        self.expected_listeners
    }

    /// Runs every rule in order and returns the collected findings.
    #[must_use]
    pub fn check(&self, config: &IcecastConfig) -> Vec<Issue> {
        let mut issues = Vec::new();
        self.check_client_limit(config, &mut issues);
        Self::check_authentication(config, &mut issues);
        Self::check_mounts(config, &mut issues);
        Self::check_logging(config, &mut issues);
        Self::check_burst_sizing(config, &mut issues);
        Self::check_hostname(config, &mut issues);
        Self::check_proxy_header(config, &mut issues);
        issues
    }

    fn check_client_limit(&self, config: &IcecastConfig, issues: &mut Vec<Issue>) {
        let clients = config.limits.as_ref().and_then(|l| l.clients);
        match clients {
            Some(value) if value > 1000 && self.expected_listeners < 500 => {
                let recommended = sized_client_limit(self.expected_listeners);
                issues.push(
                    Issue::new(
                        Severity::Info,
                        "Performance",
                        "Client limit far exceeds expected audience",
                        format!(
                            "With ~{} expected listeners, a limit of {value} reserves memory \
                             for connections that will never arrive. Lower it to about twice \
                             the expected audience.",
                            self.expected_listeners
                        ),
                    )
                    .with_current(value)
                    .with_recommended(recommended),
                );
            }
            Some(value) if value < 50 => {
                issues.push(
                    Issue::new(
                        Severity::Warning,
                        "Capacity",
                        "Client limit is very low",
                        "A limit this small turns listeners away during normal load spikes. \
                         Raise it to leave headroom above the expected audience.",
                    )
                    .with_current(value)
                    .with_recommended(BASELINE_CLIENT_LIMIT),
                );
            }
            None => {
                issues.push(
                    Issue::new(
                        Severity::Warning,
                        "Configuration",
                        "No client limit configured",
                        "Set limits.clients explicitly so capacity is a deliberate choice \
                         rather than a compiled-in default.",
                    )
                    .with_recommended(BASELINE_CLIENT_LIMIT),
                );
            }
            Some(_) => {}
        }
    }

    fn check_authentication(config: &IcecastConfig, issues: &mut Vec<Issue>) {
        let Some(auth) = config.authentication.as_ref() else {
            issues.push(Issue::new(
                Severity::Critical,
                "Security",
                "No authentication configured",
                "Add an authentication block with source-password and admin-password \
                 before exposing this server; without it anyone can stream or administer.",
            ));
            return;
        };

        if auth.admin_user.as_deref() == Some("admin") {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    "Security",
                    "Default admin username in use",
                    "Rename the admin account; the stock username halves the work of a \
                     credential-guessing attack.",
                )
                .with_current("admin"),
            );
        }

        if auth.relay_password.as_deref().is_none_or(str::is_empty) {
            issues.push(Issue::new(
                Severity::Info,
                "Security",
                "No relay password set",
                "Set relay-password if secondary servers will ever pull streams from \
                 this one; relays cannot authenticate without it.",
            ));
        }
    }

    fn check_mounts(config: &IcecastConfig, issues: &mut Vec<Issue>) {
        match config.mounts.as_deref() {
            None => {
                issues.push(Issue::new(
                    Severity::Warning,
                    "Configuration",
                    "No mount points defined",
                    "Define at least one mount so sources publish to a stable, named \
                     endpoint instead of ad-hoc paths.",
                ));
            }
            Some([_single]) => {
                issues.push(Issue::new(
                    Severity::Info,
                    "Reliability",
                    "Single mount point with no fallback",
                    "Add a fallback mount so listeners are moved to a backup stream \
                     when the primary source drops.",
                ));
            }
            Some(_) => {}
        }
    }

    fn check_logging(config: &IcecastConfig, issues: &mut Vec<Issue>) {
        let Some(logging) = config.logging.as_ref() else {
            return;
        };

        // 0 and absent both count as disabled.
        if logging.logarchive.unwrap_or(0) == 0 {
            issues.push(
                Issue::new(
                    Severity::Info,
                    "Maintenance",
                    "Log archiving disabled",
                    "Enable logarchive so rotated logs are kept; without it each \
                     rotation discards the history you need when troubleshooting.",
                )
                .with_recommended(1),
            );
        }

        if let Some(level) = logging.loglevel
            && level > 3
        {
            issues.push(
                Issue::new(
                    Severity::Info,
                    "Performance",
                    "Verbose log level",
                    "Level 4 records every request in detail and grows logs quickly; \
                     level 3 is enough for production monitoring.",
                )
                .with_current(level)
                .with_recommended(3),
            );
        }
    }

    fn check_burst_sizing(config: &IcecastConfig, issues: &mut Vec<Issue>) {
        let Some(limits) = config.limits.as_ref() else {
            return;
        };
        let (Some(burst), Some(queue)) = (limits.burst_size, limits.queue_size) else {
            return;
        };
        if burst == 0 || queue == 0 {
            return;
        }

        let half_queue = queue.div_euclid(2);
        if burst > half_queue {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    "Performance",
                    "Burst size too large for queue",
                    format!(
                        "A burst of {burst} against a queue of {queue} leaves slow \
                         clients no room before they overflow and are dropped. Keep \
                         burst-size at no more than half of queue-size."
                    ),
                )
                .with_current(burst)
                .with_recommended(half_queue),
            );
        }
    }

    fn check_hostname(config: &IcecastConfig, issues: &mut Vec<Issue>) {
        if config.hostname.as_deref() == Some("localhost") {
            issues.push(Issue::new(
                Severity::Info,
                "Configuration",
                "Hostname still set to localhost",
                "Set hostname to the server's public DNS name; stream directory \
                 listings and generated playlist URLs use this value.",
            ));
        }
    }

    fn check_proxy_header(config: &IcecastConfig, issues: &mut Vec<Issue>) {
        if config.use_x_forwarded_for == Some(1) {
            issues.push(Issue::new(
                Severity::Info,
                "Configuration",
                "Reverse proxy support enabled",
                "use-x-forwarded-for is on, so listener statistics will show real \
                 client addresses behind the proxy. No change needed.",
            ));
        }
    }
}

impl Default for ConfigChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// `max(128, expected * 2)`, saturating on unrealistic inputs.
fn sized_client_limit(expected_listeners: u64) -> IssueValue {
    let doubled = expected_listeners.saturating_mul(2);
    let recommended = i64::try_from(doubled).unwrap_or(i64::MAX);
    IssueValue::Int(recommended.max(BASELINE_CLIENT_LIMIT))
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
