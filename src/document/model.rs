use super::XmlValue;

/// Typed view of the configuration subset the checker inspects.
///
/// Extraction is permissive by design: a missing block, a missing field,
/// or a field of an unexpected type all surface as `None` rather than an
/// error. Absence is meaningful input for the rules, not a failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IcecastConfig {
    pub limits: Option<Limits>,
    pub authentication: Option<Authentication>,
    pub hostname: Option<String>,
    /// Normalized from a bare object or a sequence; `None` when absent.
    pub listen_sockets: Option<Vec<ListenSocket>>,
    /// Normalized from a bare object or a sequence; `None` when absent.
    pub mounts: Option<Vec<Mount>>,
    /// Integer flag with 0/1 semantics, deliberately not a bool.
    pub use_x_forwarded_for: Option<i64>,
    pub logging: Option<Logging>,
    /// Parsed for completeness; no current rule inspects it.
    pub paths: Option<Paths>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Limits {
    pub clients: Option<i64>,
    pub sources: Option<i64>,
    pub queue_size: Option<i64>,
    pub burst_size: Option<i64>,
    pub threadpool: Option<i64>,
    pub source_timeout: Option<i64>,
    pub header_timeout: Option<i64>,
    pub client_timeout: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authentication {
    pub source_password: Option<String>,
    pub admin_user: Option<String>,
    pub admin_password: Option<String>,
    pub relay_password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenSocket {
    pub port: Option<i64>,
    pub bind_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mount {
    pub mount_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logging {
    pub accesslog: Option<String>,
    pub errorlog: Option<String>,
    pub loglevel: Option<i64>,
    pub logsize: Option<i64>,
    /// 0/1 semantics; 0 and absent are both treated as disabled.
    pub logarchive: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paths {
    pub basedir: Option<String>,
    pub logdir: Option<String>,
    pub webroot: Option<String>,
    pub adminroot: Option<String>,
}

impl IcecastConfig {
    /// Extracts the typed subset from a parsed document tree.
    ///
    /// Never fails: anything that does not match the expected shape is
    /// treated as absent.
    #[must_use]
    pub fn from_value(root: &XmlValue) -> Self {
        Self {
            limits: root.get("limits").map(Limits::from_value),
            authentication: root.get("authentication").map(Authentication::from_value),
            hostname: text_field(root, "hostname"),
            listen_sockets: root
                .get("listen-socket")
                .map(|v| v.items().into_iter().map(ListenSocket::from_value).collect()),
            mounts: root
                .get("mount")
                .map(|v| v.items().into_iter().map(Mount::from_value).collect()),
            use_x_forwarded_for: int_field(root, "use-x-forwarded-for"),
            logging: root.get("logging").map(Logging::from_value),
            paths: root.get("paths").map(Paths::from_value),
        }
    }
}

impl Limits {
    fn from_value(block: &XmlValue) -> Self {
        Self {
            clients: int_field(block, "clients"),
            sources: int_field(block, "sources"),
            queue_size: int_field(block, "queue-size"),
            burst_size: int_field(block, "burst-size"),
            threadpool: int_field(block, "threadpool"),
            source_timeout: int_field(block, "source-timeout"),
            header_timeout: int_field(block, "header-timeout"),
            client_timeout: int_field(block, "client-timeout"),
        }
    }
}

impl Authentication {
    fn from_value(block: &XmlValue) -> Self {
        Self {
            source_password: text_field(block, "source-password"),
            admin_user: text_field(block, "admin-user"),
            admin_password: text_field(block, "admin-password"),
            relay_password: text_field(block, "relay-password"),
        }
    }
}

impl ListenSocket {
    fn from_value(block: &XmlValue) -> Self {
        Self {
            port: int_field(block, "port"),
            bind_address: text_field(block, "bind-address"),
        }
    }
}

impl Mount {
    fn from_value(block: &XmlValue) -> Self {
        Self {
            mount_name: text_field(block, "mount-name"),
        }
    }
}

impl Logging {
    fn from_value(block: &XmlValue) -> Self {
        Self {
            accesslog: text_field(block, "accesslog"),
            errorlog: text_field(block, "errorlog"),
            loglevel: int_field(block, "loglevel"),
            logsize: int_field(block, "logsize"),
            logarchive: int_field(block, "logarchive"),
        }
    }
}

impl Paths {
    fn from_value(block: &XmlValue) -> Self {
        Self {
            basedir: text_field(block, "basedir"),
            logdir: text_field(block, "logdir"),
            webroot: text_field(block, "webroot"),
            adminroot: text_field(block, "adminroot"),
        }
    }
}

fn int_field(block: &XmlValue, key: &str) -> Option<i64> {
    block.get(key).and_then(XmlValue::as_int)
}

fn text_field(block: &XmlValue, key: &str) -> Option<String> {
    block
        .get(key)
        .and_then(XmlValue::as_text)
        .map(ToString::to_string)
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
