use std::io::ErrorKind;
use std::process::Command;

#[derive(thiserror::Error, Debug)]
pub enum ExecError {
    #[error("{binary} not found{}", lookup_hint(.binary))]
    NotFound { binary: String },
    #[error("{binary} error: {stderr}")]
    Failed { binary: String, stderr: String },
    #[error("failed to run {binary}")]
    Io {
        binary: String,
        source: std::io::Error,
    },
}

fn lookup_hint(binary: &str) -> &'static str {
    if binary.contains('/') {
        ""
    } else {
        " in PATH"
    }
}

/// The one seam through which the CLI talks to the cluster.
pub trait Executor {
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, ExecError>;
}

/// Shells out to `kubectl` (or whatever binary `--kubectl` names).
#[derive(Debug, Clone)]
pub struct KubectlExecutor {
    binary: String,
    kubeconfig: Option<String>,
    context: Option<String>,
}

impl KubectlExecutor {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            kubeconfig: None,
            context: None,
        }
    }

    pub fn with_kubeconfig(mut self, kubeconfig: Option<String>) -> Self {
        self.kubeconfig = kubeconfig;
        self
    }

    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    fn full_args(&self, args: &[&str]) -> Vec<String> {
        let mut out = Vec::with_capacity(args.len() + 4);
        if let Some(k) = &self.kubeconfig {
            out.push("--kubeconfig".to_string());
            out.push(k.clone());
        }
        if let Some(c) = &self.context {
            out.push("--context".to_string());
            out.push(c.clone());
        }
        out.extend(args.iter().map(|a| a.to_string()));
        out
    }
}

impl Executor for KubectlExecutor {
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, ExecError> {
        let full = self.full_args(args);
        tracing::debug!(binary = %self.binary, args = ?full, "running cluster query");

        let output = Command::new(&self.binary)
            .args(&full)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ExecError::NotFound {
                    binary: self.binary.clone(),
                },
                _ => ExecError::Io {
                    binary: self.binary.clone(),
                    source: e,
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stderr = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(ExecError::Failed {
                binary: self.binary.clone(),
                stderr,
            });
        }
        Ok(output.stdout)
    }
}
