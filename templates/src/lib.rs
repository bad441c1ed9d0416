//! # hangul-templates
//!
//! Built-in Hangul syllable templates on top of hangul-template-core, and the
//! registry that holds them.

pub mod poke_pt;
pub mod selection;

pub use hangul_template_core::*;
pub use selection::{explain, selection_table, SelectionRow, SyllableReport};

/// Names of the built-in templates.
pub const BUILTIN_TEMPLATES: &[&str] = &[poke_pt::NAME];

/// Registry holding every built-in template, each rule checked over the
/// whole syllable block.
pub fn builtin_registry() -> Result<TemplateRegistry> {
    builtin_registry_with(&Config::default())
}

/// Registry holding every built-in template, validated according to `config`.
pub fn builtin_registry_with(config: &Config) -> Result<TemplateRegistry> {
    TemplateRegistry::builder()
        .validate_rules(config.validate_rules)
        .register(poke_pt::template()?)
        .build()
}
