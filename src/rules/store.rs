use std::path::{Path, PathBuf};

use crate::config::{FileSystem, RealFileSystem};
use crate::error::{Result, RpgGuardError};

use super::model::{CustomRule, CustomRulesConfig, RulePatch};

pub const DEFAULT_RULES_FILE: &str = "rpg-custom-rules.json";

/// Custom rules backed by a JSON file. Every mutation is written through
/// immediately.
#[derive(Debug)]
pub struct CustomRuleStore<F: FileSystem = RealFileSystem> {
    fs: F,
    path: PathBuf,
    config: CustomRulesConfig,
}

impl CustomRuleStore<RealFileSystem> {
    /// Open the rules file at `path`; a missing file yields an empty store.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_fs(RealFileSystem, path)
    }
}

impl<F: FileSystem> CustomRuleStore<F> {
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open_with_fs(fs: F, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = if fs.exists(&path) {
            let content = fs
                .read_to_string(&path)
                .map_err(|source| RpgGuardError::FileRead {
                    path: path.clone(),
                    source,
                })?;
            serde_json::from_str(&content).map_err(|e| {
                RpgGuardError::CustomRules(format!("{}: {e}", path.display()))
            })?
        } else {
            CustomRulesConfig::default()
        };
        Ok(Self { fs, path, config })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn rules(&self) -> &[CustomRule] {
        &self.config.rules
    }

    pub fn enabled_rules(&self) -> impl Iterator<Item = &CustomRule> {
        self.config.rules.iter().filter(|rule| rule.enabled)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CustomRule> {
        self.config.rules.iter().find(|rule| rule.id == id)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.config
            .rules
            .iter()
            .position(|rule| rule.id == id)
            .ok_or_else(|| RpgGuardError::RuleNotFound(id.to_string()))
    }

    fn save(&self) -> Result<()> {
        let content = self.export()?;
        self.fs.write(&self.path, &content)?;
        Ok(())
    }

    /// # Errors
    /// Returns an error if a rule with the same id exists or the file
    /// cannot be written.
    pub fn add(&mut self, rule: CustomRule) -> Result<()> {
        if self.get(&rule.id).is_some() {
            return Err(RpgGuardError::RuleAlreadyExists(rule.id));
        }
        self.config.rules.push(rule);
        self.save()
    }

    /// # Errors
    /// Returns an error if no rule has `id` or the file cannot be written.
    pub fn update(&mut self, id: &str, patch: RulePatch) -> Result<()> {
        let index = self.position(id)?;
        patch.apply(&mut self.config.rules[index]);
        self.save()
    }

    /// # Errors
    /// Returns an error if no rule has `id` or the file cannot be written.
    pub fn remove(&mut self, id: &str) -> Result<CustomRule> {
        let index = self.position(id)?;
        let removed = self.config.rules.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// # Errors
    /// Returns an error if no rule has `id` or the file cannot be written.
    pub fn enable(&mut self, id: &str) -> Result<()> {
        self.update(id, RulePatch::enabled(true))
    }

    /// # Errors
    /// Returns an error if no rule has `id` or the file cannot be written.
    pub fn disable(&mut self, id: &str) -> Result<()> {
        self.update(id, RulePatch::enabled(false))
    }

    /// Pretty-printed JSON of the whole rules file.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn export(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }

    /// Import rules from JSON. With `merge`, rules replace existing ones by
    /// id and new ids are appended; otherwise the file is replaced.
    ///
    /// # Errors
    /// Returns an error if the JSON has no `rules` array or the file cannot
    /// be written.
    pub fn import(&mut self, json: &str, merge: bool) -> Result<usize> {
        let imported: CustomRulesConfig = serde_json::from_str(json)
            .map_err(|e| RpgGuardError::CustomRules(format!("Invalid rules format: {e}")))?;
        let count = imported.rules.len();

        if merge {
            for rule in imported.rules {
                match self.config.rules.iter_mut().find(|r| r.id == rule.id) {
                    Some(existing) => *existing = rule,
                    None => self.config.rules.push(rule),
                }
            }
        } else {
            self.config = imported;
        }
        self.save()?;
        Ok(count)
    }

    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn reset(&mut self) -> Result<()> {
        self.config = CustomRulesConfig::default();
        self.save()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
