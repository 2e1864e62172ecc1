use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_KUBECTL: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> '@DIR@/calls.log'
serve() {
  if [ -f "$1" ]; then
    cat "$1"
  else
    echo "error: the server doesn't have a resource type \"$2\"" >&2
    exit 1
  fi
}
case "$*" in
  *"config current-context"*) serve '@DIR@/context.txt' contexts ;;
  *"config view"*) serve '@DIR@/cluster.txt' clusters ;;
  *"get clusterpolicies "*) serve '@DIR@/policies.json' clusterpolicies ;;
  *"get clusterpolicy require-labels "*) serve '@DIR@/policy.json' clusterpolicies ;;
  *"get clusterpolicy "*)
    echo 'Error from server (NotFound): clusterpolicies.kyverno.io "missing" not found' >&2
    exit 1 ;;
  *"get policyreports,clusterpolicyreports "*) serve '@DIR@/reports.json' policyreports ;;
  *) echo "unexpected arguments: $*" >&2; exit 1 ;;
esac
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
    pub kubectl: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().join("cluster");
        fs::create_dir_all(&dir).expect("create fixture dir");
        let kubectl = write_fake_kubectl(&dir);
        write_default_fixtures(&dir);
        Self {
            _tmp: tmp,
            dir,
            kubectl,
        }
    }

    pub fn fixture(&self, name: &str, body: &str) {
        fs::write(self.dir.join(name), body).expect("write fixture");
    }

    pub fn remove_fixture(&self, name: &str) {
        fs::remove_file(self.dir.join(name)).expect("remove fixture");
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("kyctl");
        cmd.env("KYCTL_KUBECTL", &self.kubectl).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

fn write_fake_kubectl(dir: &Path) -> PathBuf {
    let path = dir.join("kubectl");
    let script = FAKE_KUBECTL.replace("@DIR@", dir.to_str().expect("fixture dir utf8"));
    fs::write(&path, script).expect("write fake kubectl");
    let mut perms = fs::metadata(&path).expect("stat fake kubectl").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod fake kubectl");
    path
}

fn write_default_fixtures(dir: &Path) {
    fs::write(dir.join("context.txt"), "kind-dev\n").expect("write context");
    fs::write(dir.join("cluster.txt"), "kind-dev-cluster\n").expect("write cluster");

    let policies = serde_json::json!({
        "apiVersion": "v1",
        "kind": "List",
        "items": [
            {
                "apiVersion": "kyverno.io/v1",
                "kind": "ClusterPolicy",
                "metadata": {"name": "disallow-latest-tag"},
                "spec": {
                    "validationFailureAction": "Enforce",
                    "rules": [{"name": "require-image-tag"}, {"name": "validate-image-tag"}]
                }
            },
            {
                "apiVersion": "kyverno.io/v1",
                "kind": "ClusterPolicy",
                "metadata": {"name": "require-labels"},
                "spec": {
                    "validationFailureAction": "Audit",
                    "rules": [{"name": "check-for-app-label"}]
                }
            }
        ]
    });
    fs::write(
        dir.join("policies.json"),
        serde_json::to_string_pretty(&policies).expect("serialize policies"),
    )
    .expect("write policies");

    let policy = &policies["items"][1];
    fs::write(
        dir.join("policy.json"),
        serde_json::to_string_pretty(policy).expect("serialize policy"),
    )
    .expect("write policy");

    let reports = serde_json::json!({
        "apiVersion": "v1",
        "kind": "List",
        "items": [
            {
                "apiVersion": "wgpolicyk8s.io/v1alpha2",
                "kind": "PolicyReport",
                "metadata": {"name": "polr-ns-default", "namespace": "default"},
                "results": [
                    {
                        "policy": "require-labels",
                        "rule": "check-for-app-label",
                        "result": "fail",
                        "message": "validation error: label 'app' is required",
                        "resources": [{"kind": "Pod", "name": "nginx", "namespace": "default"}]
                    },
                    {
                        "policy": "disallow-latest-tag",
                        "rule": "validate-image-tag",
                        "result": "pass",
                        "resources": [{"kind": "Pod", "name": "nginx"}]
                    }
                ]
            },
            {
                "apiVersion": "wgpolicyk8s.io/v1alpha2",
                "kind": "ClusterPolicyReport",
                "metadata": {"name": "cpol-require-labels"},
                "results": [
                    {
                        "policy": "require-labels",
                        "rule": "check-for-app-label",
                        "result": "pass",
                        "resources": [{"kind": "Namespace", "name": "kube-system"}]
                    },
                    {
                        "policy": "require-labels",
                        "rule": "check-for-app-label",
                        "result": "skip",
                        "resources": []
                    }
                ]
            }
        ]
    });
    fs::write(
        dir.join("reports.json"),
        serde_json::to_string_pretty(&reports).expect("serialize reports"),
    )
    .expect("write reports");
}
