//! Inspection helpers: a template's selection for one syllable or for the
//! whole block, in serializable form for the CLI and the tools.

use hangul_template_core::{HangulTemplate, JamoClass, Result, Syllable, VariantSelection};
use serde::Serialize;

/// Selection for one syllable, flattened for JSON/CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionRow {
    pub syllable: char,
    pub codepoint: u32,
    pub choseong: char,
    pub jungseong: char,
    /// `None` when the syllable has no trailing consonant.
    pub jongseong: Option<char>,
    pub choseong_variant: usize,
    pub jungseong_variant: usize,
    pub jongseong_variant: usize,
}

impl SelectionRow {
    pub fn new(syllable: Syllable, selection: VariantSelection) -> Self {
        Self {
            syllable: syllable.to_char(),
            codepoint: syllable.codepoint(),
            choseong: syllable.choseong.symbol(),
            jungseong: syllable.jungseong.symbol(),
            jongseong: syllable
                .has_jongseong()
                .then(|| syllable.jongseong.symbol()),
            choseong_variant: selection.choseong,
            jungseong_variant: selection.jungseong,
            jongseong_variant: selection.jongseong,
        }
    }
}

/// Checked selection for all 11,172 syllables in canonical order.
pub fn selection_table(template: &HangulTemplate) -> Result<Vec<SelectionRow>> {
    Syllable::all()
        .map(|s| template.checked_select(s).map(|sel| SelectionRow::new(s, sel)))
        .collect()
}

/// One component of a `SyllableReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentChoice {
    pub class: JamoClass,
    pub symbol: char,
    pub variant: usize,
    /// Documentation row of the selected variant (1-based in placeholder names).
    pub description: String,
}

/// Why a syllable is assembled from the components it gets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableReport {
    pub template: String,
    pub syllable: char,
    pub codepoint: u32,
    /// Two entries without a trailing consonant, three with one.
    pub components: Vec<ComponentChoice>,
}

pub fn explain(template: &HangulTemplate, syllable: Syllable) -> Result<SyllableReport> {
    let selection = template.checked_select(syllable)?;
    let mut components = Vec::with_capacity(3);
    let mut push = |class: JamoClass, symbol: char| {
        let variant = selection.get(class);
        components.push(ComponentChoice {
            class,
            symbol,
            variant,
            description: template.describe(class, variant).unwrap_or_default().to_string(),
        });
    };
    push(JamoClass::Choseong, syllable.choseong.symbol());
    push(JamoClass::Jungseong, syllable.jungseong.symbol());
    if syllable.has_jongseong() {
        push(JamoClass::Jongseong, syllable.jongseong.symbol());
    }
    Ok(SyllableReport {
        template: template.name().to_string(),
        syllable: syllable.to_char(),
        codepoint: syllable.codepoint(),
        components,
    })
}
