/// Where the client gets its AWS credentials from.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialsSource {
    Static {
        access_key: String,
        secret_key: String,
    },
    DefaultChain,
}

impl CredentialsSource {
    /// An explicit pair is used only when both keys are non-empty.
    pub fn new(access_key: Option<&str>, secret_key: Option<&str>) -> Self {
        match (access_key, secret_key) {
            (Some(access_key), Some(secret_key))
                if !access_key.is_empty() && !secret_key.is_empty() =>
            {
                Self::Static {
                    access_key: access_key.into(),
                    secret_key: secret_key.into(),
                }
            }
            _ => Self::DefaultChain,
        }
    }
}

impl std::fmt::Debug for CredentialsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static { access_key, .. } => f
                .debug_struct("Static")
                .field("access_key", access_key)
                .field("secret_key", &"** redacted **")
                .finish(),
            Self::DefaultChain => write!(f, "DefaultChain"),
        }
    }
}
