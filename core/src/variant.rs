// core/src/variant.rs
//
// Variant selection types and the rule trait every template implements.

use crate::error::{Result, TemplateError};
use crate::jamo::{JamoClass, CHOSEONG_COUNT, JONGSEONG_COUNT, JUNGSEONG_COUNT};
use crate::syllable::Syllable;
use serde::{Deserialize, Serialize};

/// Which allocated row to use for each component of one syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VariantSelection {
    pub choseong: usize,
    pub jungseong: usize,
    pub jongseong: usize,
}

impl VariantSelection {
    pub fn new(choseong: usize, jungseong: usize, jongseong: usize) -> Self {
        Self {
            choseong,
            jungseong,
            jongseong,
        }
    }

    pub fn get(&self, class: JamoClass) -> usize {
        match class {
            JamoClass::Choseong => self.choseong,
            JamoClass::Jungseong => self.jungseong,
            JamoClass::Jongseong => self.jongseong,
        }
    }

    /// Check every row index against the declared counts. The error names the
    /// first offending class and the syllable that produced the selection.
    pub fn check(&self, counts: &VariantCounts, template: &str, syllable: Syllable) -> Result<()> {
        for class in JamoClass::ALL {
            let variant = self.get(class);
            let declared = counts.get(class);
            if variant >= declared {
                return Err(TemplateError::VariantOutOfRange {
                    template: template.to_string(),
                    class,
                    variant,
                    declared,
                    syllable,
                    indices: (
                        syllable.choseong.index(),
                        syllable.jungseong.index(),
                        syllable.jongseong.index(),
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Number of visually distinct variants a template declares per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantCounts {
    pub choseong: usize,
    pub jungseong: usize,
    pub jongseong: usize,
}

impl VariantCounts {
    pub fn new(choseong: usize, jungseong: usize, jongseong: usize) -> Self {
        Self {
            choseong,
            jungseong,
            jongseong,
        }
    }

    pub fn get(&self, class: JamoClass) -> usize {
        match class {
            JamoClass::Choseong => self.choseong,
            JamoClass::Jungseong => self.jungseong,
            JamoClass::Jongseong => self.jongseong,
        }
    }

    /// Placeholder glyphs one application allocates:
    /// `nCho·19 + nJung·21 + nJong·28`.
    pub fn placeholder_count(&self) -> usize {
        self.choseong * CHOSEONG_COUNT
            + self.jungseong * JUNGSEONG_COUNT
            + self.jongseong * JONGSEONG_COUNT
    }
}

/// A total function from a syllable to its variant selection.
///
/// Implementations must return row indices below the owning template's
/// declared counts for every syllable. The engine reports violations as
/// `TemplateError::VariantOutOfRange` instead of clamping them.
pub trait VariantRule: Send + Sync {
    fn select(&self, syllable: Syllable) -> VariantSelection;
}

impl<F> VariantRule for F
where
    F: Fn(Syllable) -> VariantSelection + Send + Sync,
{
    fn select(&self, syllable: Syllable) -> VariantSelection {
        self(syllable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jamo::{Choseong, Jongseong, Jungseong};

    fn gak() -> Syllable {
        Syllable::new(Choseong::Giyeok, Jungseong::A, Jongseong::Giyeok)
    }

    #[test]
    fn placeholder_count_uses_alphabet_sizes() {
        let counts = VariantCounts::new(20, 13, 7);
        assert_eq!(counts.placeholder_count(), 20 * 19 + 13 * 21 + 7 * 28);
        assert_eq!(VariantCounts::new(1, 1, 1).placeholder_count(), 68);
    }

    #[test]
    fn check_accepts_in_range() {
        let counts = VariantCounts::new(2, 2, 2);
        assert!(VariantSelection::new(1, 1, 1).check(&counts, "T", gak()).is_ok());
    }

    #[test]
    fn check_reports_class_and_triple() {
        let counts = VariantCounts::new(2, 2, 2);
        let err = VariantSelection::new(0, 2, 0)
            .check(&counts, "T", gak())
            .unwrap_err();
        match err {
            TemplateError::VariantOutOfRange {
                class,
                variant,
                declared,
                indices,
                ..
            } => {
                assert_eq!(class, JamoClass::Jungseong);
                assert_eq!(variant, 2);
                assert_eq!(declared, 2);
                assert_eq!(indices, (0, 0, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn closures_are_rules() {
        let rule = |s: Syllable| VariantSelection::new(s.choseong.index() % 2, 0, 0);
        assert_eq!(rule.select(gak()), VariantSelection::new(0, 0, 0));
    }
}
