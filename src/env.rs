use std::collections::HashMap;

/// Source of environment variables consulted during configuration resolution.
pub trait EnvProvider {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvProvider for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: EnvProvider + ?Sized> EnvProvider for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_provider_lookup() {
        let mut env = HashMap::new();
        env.insert("GITHUB_APP_ID".to_string(), "42".to_string());
        assert_eq!(env.var("GITHUB_APP_ID").as_deref(), Some("42"));
        assert_eq!(env.var("GITHUB_REPOSITORY"), None);
    }

    #[test]
    fn test_reference_forwards() {
        let mut env = HashMap::new();
        env.insert("A".to_string(), "1".to_string());
        let by_ref = &env;
        assert_eq!(EnvProvider::var(&by_ref, "A").as_deref(), Some("1"));
    }

    #[test]
    fn test_process_env_missing_var() {
        assert_eq!(
            ProcessEnv.var("GITHUB_ACTION_TOOL_SURELY_UNSET_VARIABLE"),
            None
        );
    }
}
