// templates/tests/poke_pt_properties.rs
//
// Whole-block properties of the POKE_PT template and of applying it to a
// seeded project.

use hangul_templates::{
    builtin_registry, poke_pt, Choseong, Config, JamoClass, Jongseong, Jungseong, Project,
    Syllable, TemplateError, SYLLABLE_BASE, SYLLABLE_COUNT, SYLLABLE_LAST,
};

fn histogram(class: JamoClass, rows: usize) -> Vec<usize> {
    let template = poke_pt::template().unwrap();
    let mut counts = vec![0; rows];
    for s in Syllable::all() {
        counts[template.select(s).get(class)] += 1;
    }
    counts
}

#[test]
fn outputs_stay_within_declared_counts() {
    for s in Syllable::all() {
        let sel = poke_pt::rule(s);
        assert!(sel.choseong < 20, "{} choseong {}", s, sel.choseong);
        assert!(sel.jungseong < 13, "{} jungseong {}", s, sel.jungseong);
        assert!(sel.jongseong < 7, "{} jongseong {}", s, sel.jongseong);
    }
}

#[test]
fn variant_usage_is_stable() {
    assert_eq!(
        histogram(JamoClass::Choseong, 20),
        vec![
            94, 76, 38, 19, 38, 38, 19, 40, 19, 19, 1539, 3078, 1025, 1539, 2, 1024, 513, 1026,
            513, 513
        ]
    );
    assert_eq!(
        histogram(JamoClass::Jungseong, 13),
        vec![22, 105, 272, 42, 82, 124, 122, 388, 450, 1196, 1077, 567, 6725]
    );
    assert_eq!(
        histogram(JamoClass::Jongseong, 7),
        vec![3248, 5319, 336, 728, 1231, 310, 0]
    );
}

#[test]
fn reo_selects_choseong_variant_one() {
    let reo = Syllable::new(Choseong::Rieul, Jungseong::Eo, Jongseong::None);
    assert_eq!(reo.to_char(), '러');
    assert_eq!(poke_pt::rule(reo).choseong, 1);

    // Baseline for ㅓ without a trailing consonant.
    let geo = Syllable::new(Choseong::Giyeok, Jungseong::Eo, Jongseong::None);
    assert_eq!(poke_pt::rule(geo).choseong, 0);
}

#[test]
fn ga_gets_two_first_column_components() {
    let registry = builtin_registry().unwrap();
    let template = registry.get(poke_pt::NAME).unwrap();
    let mut project = Project::with_hangul_syllables();
    let report = template.apply(&mut project, 0xF0000).unwrap();

    let ga = Syllable::new(Choseong::Giyeok, Jungseong::A, Jongseong::None);
    assert_eq!(ga.codepoint(), 44032);
    let sel = template.select(ga);
    let glyph = project.glyph(0xAC00).unwrap();
    assert_eq!(
        glyph.components(),
        &[
            report.choseong.get(sel.choseong, 0).unwrap(),
            report.jungseong.get(sel.jungseong, 0).unwrap(),
        ]
    );
    assert_eq!(
        project.glyph(glyph.components()[0]).unwrap().name,
        "POKE_PT | choseong | 1 | ㄱ"
    );
    assert_eq!(
        project.glyph(glyph.components()[1]).unwrap().name,
        "POKE_PT | jungseong | 1 | ㅏ"
    );
}

#[test]
fn apply_wires_every_syllable() {
    let registry = builtin_registry().unwrap();
    let mut project = Project::with_hangul_syllables();
    let report = Config::default().apply(&registry, &mut project).unwrap();

    assert_eq!(report.syllables, SYLLABLE_COUNT);
    assert_eq!(report.placeholder_count(), 20 * 19 + 13 * 21 + 7 * 28);
    assert_eq!(report.next_pointer, 0xF0000 + 849);
    assert_eq!(project.len(), SYLLABLE_COUNT + 849);

    for s in Syllable::all() {
        let u = s.codepoint();
        assert!((SYLLABLE_BASE..=SYLLABLE_LAST).contains(&u));
        let glyph = project.glyph(u).unwrap();
        let expected = if s.has_jongseong() { 3 } else { 2 };
        assert_eq!(glyph.components().len(), expected, "{}", s);
        for id in glyph.components() {
            assert!((report.start_pointer..report.next_pointer).contains(id));
        }
    }
}

#[test]
fn reo_glyph_uses_second_choseong_row() {
    let registry = builtin_registry().unwrap();
    let mut project = Project::with_hangul_syllables();
    let report = Config::default().apply(&registry, &mut project).unwrap();

    let reo = project.glyph('러' as u32).unwrap();
    let choseong = project.glyph(reo.components()[0]).unwrap();
    assert_eq!(choseong.name, "POKE_PT | choseong | 2 | ㄹ");
    assert_eq!(reo.components()[0], report.choseong.get(1, 5).unwrap());
}

#[test]
fn second_application_replaces_components() {
    let registry = builtin_registry().unwrap();
    let template = registry.get(poke_pt::NAME).unwrap();
    let mut project = Project::with_hangul_syllables();

    let first = template.apply(&mut project, 0x10_0000).unwrap();
    let snapshot: Vec<Vec<u32>> = Syllable::all()
        .map(|s| project.syllable_glyph(s).unwrap().components().to_vec())
        .collect();

    let second = template.apply(&mut project, 0x20_0000).unwrap();
    assert_eq!(
        project.len(),
        SYLLABLE_COUNT + first.placeholder_count() + second.placeholder_count()
    );

    let offset = 0x20_0000 - 0x10_0000;
    for (s, before) in Syllable::all().zip(snapshot) {
        let after = project.syllable_glyph(s).unwrap().components().to_vec();
        assert_eq!(after.len(), before.len());
        // Same cells, shifted into the second placeholder range.
        let shifted: Vec<u32> = before.iter().map(|id| id + offset).collect();
        assert_eq!(after, shifted, "{}", s);
    }

    // First placeholders remain in place with their names.
    for id in first.start_pointer..first.next_pointer {
        assert!(project.glyph(id).unwrap().name.starts_with("POKE_PT | "));
    }
}

#[test]
fn overlapping_reapplication_is_rejected() {
    let registry = builtin_registry().unwrap();
    let mut project = Project::with_hangul_syllables();
    let config = Config::default();
    config.apply(&registry, &mut project).unwrap();

    let err = config.apply(&registry, &mut project).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::IdCollision {
            id: 0xF0000,
            class: JamoClass::Choseong,
            ..
        }
    ));

    let mut legacy = config.clone();
    legacy.allow_overwrite(true);
    let report = legacy.apply(&registry, &mut project).unwrap();
    assert_eq!(project.len(), SYLLABLE_COUNT + report.placeholder_count());
}
