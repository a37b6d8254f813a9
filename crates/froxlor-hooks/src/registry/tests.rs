//! Unit tests for the hook registry.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tempfile::TempDir;

use super::*;
use crate::catalog::ModuleCatalog;
use crate::module::{HookBinding, HookModule};

/// Test module that tags the payload and records each call.
struct RecordingModule {
    name: String,
    bindings: Vec<HookBinding>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl HookModule for RecordingModule {
    fn bindings(&self) -> Vec<HookBinding> {
        self.bindings.clone()
    }

    fn call(&mut self, hook: &str, payload: Value) -> Value {
        self.calls
            .lock()
            .expect("record call")
            .push(format!("{}:{hook}", self.name));
        match payload {
            Value::Array(mut entries) => {
                entries.push(Value::String(self.name.clone()));
                Value::Array(entries)
            }
            other => other,
        }
    }
}

fn recording_factory(
    name: &str,
    bindings: Vec<HookBinding>,
    calls: &Arc<Mutex<Vec<String>>>,
) -> impl Fn() -> RecordingModule + 'static {
    let name = name.to_owned();
    let calls = Arc::clone(calls);
    move || RecordingModule {
        name: name.clone(),
        bindings: bindings.clone(),
        calls: Arc::clone(&calls),
    }
}

fn touch(dir: &Path, file_name: &str) {
    fs::write(dir.join(file_name), b"").expect("create module file");
}

#[fixture]
fn calls() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

#[rstest]
fn invokes_only_the_module_binding_the_hook(calls: Arc<Mutex<Vec<String>>>) {
    let dir = TempDir::new().expect("temp module dir");
    touch(dir.path(), "module.Dns.php");
    touch(dir.path(), "module.Traffic.php");

    let mut catalog = ModuleCatalog::new();
    catalog
        .register(
            "Dns",
            recording_factory("Dns", vec![HookBinding::public("Dns_zoneAdded")], &calls),
        )
        .expect("register Dns");
    catalog
        .register(
            "Traffic",
            recording_factory("Traffic", vec![HookBinding::public("Traffic_rotated")], &calls),
        )
        .expect("register Traffic");

    let mut registry = HookRegistry::scan(dir.path(), &catalog);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.subscriber_count("Dns_zoneAdded"), 1);

    let payload = registry.dispatch("Dns_zoneAdded", json!([]));
    assert_eq!(payload, json!(["Dns"]));
    assert_eq!(
        calls.lock().expect("read calls").as_slice(),
        ["Dns:Dns_zoneAdded"]
    );
}

#[rstest]
fn threads_payload_through_every_subscriber(calls: Arc<Mutex<Vec<String>>>) {
    let dir = TempDir::new().expect("temp module dir");
    touch(dir.path(), "module.First.php");
    touch(dir.path(), "module.Second.php");

    let mut catalog = ModuleCatalog::new();
    for name in ["First", "Second"] {
        catalog
            .register(
                name,
                recording_factory(name, vec![HookBinding::public("Panel_reload")], &calls),
            )
            .expect("register module");
    }

    let mut registry = HookRegistry::scan(dir.path(), &catalog);
    let payload = registry.dispatch("Panel_reload", json!([]));

    let tags = payload.as_array().expect("array payload");
    assert_eq!(tags.len(), 2, "both subscribers must run");
    assert!(tags.contains(&Value::String(String::from("First"))));
    assert!(tags.contains(&Value::String(String::from("Second"))));
}

#[test]
fn nonexistent_directory_yields_empty_registry() {
    let catalog = ModuleCatalog::new();
    let mut registry = HookRegistry::scan(Path::new("/nonexistent/froxlor/modules"), &catalog);
    assert!(registry.is_empty());
    assert!(registry.skipped().is_empty());

    let payload = registry.dispatch("Anything", json!({"key": "value"}));
    assert_eq!(payload, json!({"key": "value"}));
}

#[rstest]
fn unknown_module_files_are_recorded_as_skips(calls: Arc<Mutex<Vec<String>>>) {
    let dir = TempDir::new().expect("temp module dir");
    touch(dir.path(), "module.Ghost.php");
    touch(dir.path(), "notes.txt");

    let mut catalog = ModuleCatalog::new();
    catalog
        .register(
            "Dns",
            recording_factory("Dns", vec![HookBinding::public("Dns_zoneAdded")], &calls),
        )
        .expect("register Dns");

    let registry = HookRegistry::scan(dir.path(), &catalog);
    assert!(registry.is_empty());
    assert_eq!(registry.skipped().len(), 1);
    assert!(matches!(
        registry.skipped().first(),
        Some(Skip::UnknownModule { module, .. }) if module == "Ghost"
    ));
}

#[rstest]
fn private_bindings_are_skipped_not_invoked(calls: Arc<Mutex<Vec<String>>>) {
    let dir = TempDir::new().expect("temp module dir");
    touch(dir.path(), "module.Dns.php");

    let mut catalog = ModuleCatalog::new();
    catalog
        .register(
            "Dns",
            recording_factory(
                "Dns",
                vec![
                    HookBinding::private("Dns_internalRefresh"),
                    HookBinding::public("Dns_zoneAdded"),
                ],
                &calls,
            ),
        )
        .expect("register Dns");

    let mut registry = HookRegistry::scan(dir.path(), &catalog);
    assert_eq!(registry.subscriber_count("Dns_internalRefresh"), 0);
    assert_eq!(registry.subscriber_count("Dns_zoneAdded"), 1);
    assert_eq!(
        registry.skipped(),
        [Skip::PrivateHook {
            module: String::from("Dns"),
            hook: String::from("Dns_internalRefresh"),
        }]
    );

    let payload = registry.dispatch("Dns_internalRefresh", json!([]));
    assert_eq!(payload, json!([]));
    assert!(calls.lock().expect("read calls").is_empty());
}

#[rstest]
fn scans_nested_directories(calls: Arc<Mutex<Vec<String>>>) {
    let dir = TempDir::new().expect("temp module dir");
    let nested = dir.path().join("dns").join("secondary");
    fs::create_dir_all(&nested).expect("create nested dirs");
    touch(&nested, "module.Dns.php");

    let mut catalog = ModuleCatalog::new();
    catalog
        .register(
            "Dns",
            recording_factory("Dns", vec![HookBinding::public("Dns_zoneAdded")], &calls),
        )
        .expect("register Dns");

    let mut registry = HookRegistry::scan(dir.path(), &catalog);
    assert_eq!(registry.len(), 1);
    let payload = registry.dispatch("Dns_zoneAdded", json!([]));
    assert_eq!(payload, json!(["Dns"]));
}

#[test]
fn dispatch_without_subscribers_returns_payload_unchanged() {
    let mut registry = HookRegistry::new();
    let payload = registry.dispatch("Unbound", json!({"left": "alone"}));
    assert_eq!(payload, json!({"left": "alone"}));
}
