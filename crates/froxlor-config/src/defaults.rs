//! Platform defaults for the CLI configuration.

use camino::Utf8PathBuf;
#[cfg(unix)]
use std::env;

#[cfg(unix)]
use libc::geteuid;

#[cfg(unix)]
use dirs::runtime_dir;

use crate::socket::SocketEndpoint;

/// Default TCP port used when Unix domain sockets are not available.
pub const DEFAULT_TCP_PORT: u16 = 9721;

/// Default log filter expression used by the binaries.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default base directory scanned for hook modules.
pub const DEFAULT_MODULES_DIR: &str = "/var/www/froxlor/api/modules";

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default hook module directory.
#[must_use]
pub fn default_modules_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_MODULES_DIR)
}

/// Computes the default socket endpoint of the panel API.
#[must_use]
pub fn default_api_endpoint() -> SocketEndpoint {
    default_api_endpoint_inner()
}

#[cfg(unix)]
fn default_api_endpoint_inner() -> SocketEndpoint {
    let (mut base, apply_namespace) = match runtime_base_directory() {
        Some(dir) => (dir, false),
        None => (fallback_base_directory(), true),
    };

    base.push("froxlor");
    if apply_namespace {
        base.push(user_namespace());
    }

    SocketEndpoint::unix(base.join("api.sock"))
}

#[cfg(unix)]
fn runtime_base_directory() -> Option<Utf8PathBuf> {
    runtime_dir().and_then(|path| Utf8PathBuf::from_path_buf(path).ok())
}

#[cfg(unix)]
fn fallback_base_directory() -> Utf8PathBuf {
    let candidate = env::temp_dir();
    Utf8PathBuf::from_path_buf(candidate).unwrap_or_else(|_| Utf8PathBuf::from("/tmp"))
}

#[cfg(unix)]
fn user_namespace() -> String {
    let uid = unsafe { geteuid() };
    format!("uid-{uid}")
}

#[cfg(not(unix))]
fn default_api_endpoint_inner() -> SocketEndpoint {
    SocketEndpoint::tcp("127.0.0.1", DEFAULT_TCP_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn default_endpoint_is_a_namespaced_unix_socket() {
        let endpoint = default_api_endpoint();
        let path = endpoint.unix_path().expect("unix endpoint on unix hosts");
        assert!(path.as_str().contains("froxlor"));
        assert!(path.as_str().ends_with("api.sock"));
    }

    #[test]
    fn modules_dir_default_is_absolute() {
        assert!(default_modules_dir().is_absolute());
    }
}
