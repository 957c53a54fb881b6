use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Expands `{{ env.VAR }}` placeholders, deserializes, rebases relative
    /// registry paths onto the config file's directory and validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let mut config = Self::parse(&raw)?;

        if let Some(base) = path.parent() {
            config.rebase(base);
        }

        config.validate()?;

        Ok(config)
    }

    /// Parse configuration text without touching the filesystem
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable expansion or TOML parsing fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))
    }

    /// Resolve relative registry paths against `base`
    fn rebase(&mut self, base: &Path) {
        let registry = &mut self.registry;

        if registry.definitions.is_relative() {
            registry.definitions = base.join(&registry.definitions);
        }

        if let Some(dir) = registry.messages_dir.as_mut()
            && dir.is_relative()
        {
            *dir = base.join(&*dir);
        }
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a language tag, endpoint path or the reload secret
    /// is invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_languages()?;
        self.validate_endpoints()?;
        Ok(())
    }

    fn validate_languages(&self) -> anyhow::Result<()> {
        if self.registry.languages.is_empty() {
            anyhow::bail!("registry.languages must declare at least one language");
        }

        for language in &self.registry.languages {
            if language.len() != 2 || !language.chars().all(|c| c.is_ascii_lowercase()) {
                anyhow::bail!("registry.languages entry '{language}' must be two lower-case ASCII letters");
            }
        }

        Ok(())
    }

    fn validate_endpoints(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        let Some(ref reload) = self.server.reload else {
            return Ok(());
        };

        if reload.secret.expose_secret().is_empty() {
            anyhow::bail!("server.reload.secret must not be empty");
        }

        if !reload.path.starts_with('/') {
            anyhow::bail!("server.reload.path must start with '/'");
        }

        if health.enabled && reload.path == health.path {
            anyhow::bail!("server.reload.path must differ from server.health.path");
        }

        Ok(())
    }
}
