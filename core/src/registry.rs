// core/src/registry.rs
//
// Immutable name -> template mapping. Built once through `RegistryBuilder`
// and passed by reference to whoever needs a template.

use crate::error::{Result, TemplateError};
use crate::template::HangulTemplate;
use ahash::AHashMap;

#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: AHashMap<String, HangulTemplate>,
}

impl TemplateRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Result<&HangulTemplate> {
        self.templates
            .get(name)
            .ok_or_else(|| TemplateError::TemplateNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Template names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Templates in name order.
    pub fn iter(&self) -> impl Iterator<Item = &HangulTemplate> {
        let mut templates: Vec<&HangulTemplate> = self.templates.values().collect();
        templates.sort_by(|a, b| a.name().cmp(b.name()));
        templates.into_iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Collects templates before the registry is frozen.
#[derive(Debug)]
pub struct RegistryBuilder {
    templates: Vec<HangulTemplate>,
    validate_rules: bool,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
            validate_rules: true,
        }
    }

    /// Run `HangulTemplate::validate_rule` on every template in `build`.
    pub fn validate_rules(mut self, enabled: bool) -> Self {
        self.validate_rules = enabled;
        self
    }

    pub fn register(mut self, template: HangulTemplate) -> Self {
        self.templates.push(template);
        self
    }

    /// Freeze the registry. Fails on duplicate names and, when validation is
    /// enabled, on the first rule output outside its declared counts.
    pub fn build(self) -> Result<TemplateRegistry> {
        let mut templates = AHashMap::with_capacity(self.templates.len());
        for template in self.templates {
            if templates.contains_key(template.name()) {
                return Err(TemplateError::InvalidTemplate {
                    template: template.name().to_string(),
                    reason: "registered twice".to_string(),
                });
            }
            if self.validate_rules {
                template.validate_rule()?;
            }
            tracing::debug!(template = template.name(), counts = ?template.counts(), "registered template");
            templates.insert(template.name().to_string(), template);
        }
        Ok(TemplateRegistry { templates })
    }
}
