use crate::services::executor::ExecError;

pub const REPORT_CRD_HINT: &str = "ensure the policy-reporting CRDs are installed";
pub const KYVERNO_HINT: &str = "ensure Kyverno is installed";
pub const AUTH_HINT: &str = "ensure you are authenticated to a Kubernetes cluster";

#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("failed to retrieve {what}{hint}")]
    Retrieval {
        what: String,
        /// Either empty or `" (<advice>)"`.
        hint: String,
        source: ExecError,
    },
    #[error("failed to parse {what}")]
    Parse {
        what: String,
        source: serde_json::Error,
    },
}

impl QueryError {
    pub fn retrieval(what: impl Into<String>, source: ExecError) -> Self {
        QueryError::Retrieval {
            what: what.into(),
            hint: String::new(),
            source,
        }
    }

    pub fn retrieval_with_hint(what: impl Into<String>, hint: &str, source: ExecError) -> Self {
        QueryError::Retrieval {
            what: what.into(),
            hint: format!(" ({})", hint),
            source,
        }
    }

    pub fn parse(what: impl Into<String>, source: serde_json::Error) -> Self {
        QueryError::Parse {
            what: what.into(),
            source,
        }
    }
}
