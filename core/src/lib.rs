//! hangul-template-core
//!
//! Engine that wires the 11,172 precomposed Hangul syllable glyphs to
//! variant-selected jamo component glyphs, plus the types templates are
//! written against.
//!
//! Public API:
//! - `Choseong`, `Jungseong`, `Jongseong` - typed jamo alphabets
//! - `Syllable` - (leading, vowel, trailing) triple and codepoint composition
//! - `VariantRule` / `VariantSelection` - the per-template selection function
//! - `HangulTemplate` - named rule plus variant counts; `apply` runs the engine
//! - `TemplateRegistry` - immutable name -> template mapping
//! - `GlyphStore` / `Project` - the store seam and an in-memory store
//! - `Config` - TOML configuration for tooling
use serde::{Deserialize, Serialize};

pub mod jamo;
pub use jamo::{
    is_choseong, is_jongseong, is_jungseong, Choseong, JamoClass, Jongseong, Jungseong,
    CHOSEONG_ALPHABET, CHOSEONG_COUNT, JONGSEONG_ALPHABET, JONGSEONG_COUNT, JUNGSEONG_ALPHABET,
    JUNGSEONG_COUNT,
};

pub mod syllable;
pub use syllable::{Syllable, SYLLABLE_BASE, SYLLABLE_COUNT, SYLLABLE_LAST};

pub mod error;
pub use error::{Result, TemplateError};

pub mod variant;
pub use variant::{VariantCounts, VariantRule, VariantSelection};

pub mod project;
pub use project::{Glyph, GlyphStore, Project};

pub mod allocator;
pub use allocator::{allocate_components, placeholder_name, ComponentGrid};

pub mod template;
pub use template::{ApplyReport, HangulTemplate, TemplateDocs};

pub mod registry;
pub use registry::{RegistryBuilder, TemplateRegistry};

/// Default first placeholder id: start of Supplementary Private Use Area-A,
/// well clear of the syllable block.
pub const DEFAULT_START_POINTER: u32 = 0xF_0000;

/// What allocation does when a placeholder id is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Abort with `TemplateError::IdCollision`.
    #[default]
    Error,
    /// Replace the existing glyph (legacy behaviour).
    Overwrite,
}

/// Configuration for applying a template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Registry name of the template to apply.
    pub template: String,

    /// First placeholder id handed to the allocator.
    pub start_pointer: u32,

    /// Behaviour when a placeholder id is already occupied.
    pub collision_policy: CollisionPolicy,

    /// Check every rule output against the declared counts when building
    /// the registry.
    pub validate_rules: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: "POKE_PT".to_string(),
            start_pointer: DEFAULT_START_POINTER,
            collision_policy: CollisionPolicy::Error,
            validate_rules: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn set_template(&mut self, name: &str) {
        if !name.is_empty() {
            self.template = name.to_string();
        }
    }

    pub fn set_start_pointer(&mut self, ptr: u32) {
        self.start_pointer = ptr;
    }

    /// Opt into the legacy silent-overwrite allocation.
    pub fn allow_overwrite(&mut self, enabled: bool) {
        self.collision_policy = if enabled {
            CollisionPolicy::Overwrite
        } else {
            CollisionPolicy::Error
        };
    }

    /// Look up the configured template and apply it at the configured pointer.
    pub fn apply<S: GlyphStore + ?Sized>(
        &self,
        registry: &TemplateRegistry,
        project: &mut S,
    ) -> Result<ApplyReport> {
        registry
            .get(&self.template)?
            .apply_with_policy(project, self.start_pointer, self.collision_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.template, "POKE_PT");
        assert_eq!(cfg.start_pointer, 0xF0000);
        assert_eq!(cfg.collision_policy, CollisionPolicy::Error);
        assert!(cfg.validate_rules);
    }

    #[test]
    fn config_toml_roundtrip_and_partial() {
        let mut cfg = Config::default();
        cfg.set_template("OTHER");
        cfg.allow_overwrite(true);
        let text = cfg.to_toml_string().unwrap();
        assert!(text.contains("collision_policy = \"overwrite\""));
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);

        let partial = Config::from_toml_str("start_pointer = 4096\n").unwrap();
        assert_eq!(partial.start_pointer, 4096);
        assert_eq!(partial.template, "POKE_PT");
    }

    #[test]
    fn config_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "hangul_template_config_{}.toml",
            std::process::id()
        ));
        let mut cfg = Config::default();
        cfg.set_start_pointer(77);
        cfg.save_toml(&path).unwrap();
        let loaded = Config::load_toml(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.start_pointer, 77);
    }

    #[test]
    fn config_apply_reports_unknown_template() {
        let registry = TemplateRegistry::default();
        let mut project = Project::with_hangul_syllables();
        let err = Config::default().apply(&registry, &mut project).unwrap_err();
        assert!(matches!(err, TemplateError::TemplateNotFound { .. }));
    }
}
