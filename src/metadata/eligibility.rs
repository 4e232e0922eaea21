// Thu Jan 15 2026 - Alex

use crate::config::{ConfigError, HookConfig};
use regex::Regex;

/// Decides which classes carry the metadata layout this crate understands.
///
/// A class is eligible when its runtime name starts with one of the accepted
/// prefixes or matches the namespace pattern, and does not start with an
/// excluded prefix. The default rule mirrors current runtime naming; it is a
/// policy, not a guarantee, and may need re-deriving for other runtime versions.
#[derive(Debug, Clone)]
pub struct EligibilityPolicy {
    accepted_prefixes: Vec<String>,
    namespace_pattern: Option<Regex>,
    excluded_prefixes: Vec<String>,
}

impl EligibilityPolicy {
    pub fn from_config(config: &HookConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let namespace_pattern = match &config.namespace_pattern {
            Some(pattern) => Some(
                Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            accepted_prefixes: config.accepted_prefixes.clone(),
            namespace_pattern,
            excluded_prefixes: config.excluded_prefixes.clone(),
        })
    }

    pub fn is_eligible(&self, class_name: &str) -> bool {
        if self
            .excluded_prefixes
            .iter()
            .any(|prefix| class_name.starts_with(prefix.as_str()))
        {
            return false;
        }

        self.accepted_prefixes
            .iter()
            .any(|prefix| class_name.starts_with(prefix.as_str()))
            || self
                .namespace_pattern
                .as_ref()
                .map_or(false, |re| re.is_match(class_name))
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            accepted_prefixes: vec![crate::config::DEFAULT_ACCEPTED_PREFIX.to_string()],
            namespace_pattern: Regex::new(crate::config::DEFAULT_NAMESPACE_PATTERN).ok(),
            excluded_prefixes: vec![crate::config::DEFAULT_EXCLUDED_PREFIX.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = EligibilityPolicy::default();

        assert!(policy.is_eligible("_TtC14SwiftHookTests9TestClass"));
        assert!(policy.is_eligible("SwiftHookTests.TestClass"));
        assert!(!policy.is_eligible("Swift._ContiguousArrayStorage"));
        assert!(!policy.is_eligible("NSObject"));
        assert!(!policy.is_eligible(""));
        assert!(!policy.is_eligible(".hidden"));
        assert!(!policy.is_eligible("Module."));
    }

    #[test]
    fn test_policy_from_config() {
        let config = HookConfig::new()
            .with_accepted_prefixes(vec!["My".to_string()])
            .with_namespace_pattern(None)
            .with_excluded_prefixes(vec!["MyPrivate".to_string()]);
        let policy = EligibilityPolicy::from_config(&config).unwrap();

        assert!(policy.is_eligible("MyWidget"));
        assert!(!policy.is_eligible("MyPrivateWidget"));
        assert!(!policy.is_eligible("Module.Widget"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let config = HookConfig::new().with_namespace_pattern(Some("(".to_string()));
        assert!(matches!(
            EligibilityPolicy::from_config(&config),
            Err(ConfigError::InvalidPattern(_))
        ));
    }
}
