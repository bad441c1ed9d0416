// templates/src/poke_pt.rs
//
// POKE_PT: 20 choseong, 13 jungseong and 7 jongseong variants.
//
// Each component decision starts from a baseline table and is overridden by
// syllable-specific exceptions checked in order; the first match wins. The
// exceptions fix collisions in the font's drawn shapes and are listed with
// the syllables they cover.
//
// Every table indexed by choseong has 19 entries in alphabet order
// (ㄱㄲㄴㄷㄸㄹㅁㅂㅃㅅㅆㅇㅈㅉㅊㅋㅌㅍㅎ), by jungseong 21 entries
// (ㅏㅐㅑㅒㅓㅔㅕㅖㅗㅘㅙㅚㅛㅜㅝㅞㅟㅠㅡㅢㅣ).

use hangul_template_core::{
    Choseong as C, HangulTemplate, Jongseong as T, Jungseong as V, Result, Syllable,
    TemplateDocs, VariantCounts, VariantSelection, CHOSEONG_COUNT, JUNGSEONG_COUNT,
};

pub const NAME: &str = "POKE_PT";

pub const COUNTS: VariantCounts = VariantCounts {
    choseong: 20,
    jungseong: 13,
    jongseong: 7,
};

//                                            ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ
const CHOSEONG_BY_JUNGSEONG: [usize; JUNGSEONG_COUNT] = [0, 1, 0, 1, 0, 1, 0, 1, 2, 5, 6, 5, 2, 4, 7, 8, 7, 4, 3, 9, 0];
const JONGSEONG_BY_JUNGSEONG: [usize; JUNGSEONG_COUNT] = [0, 1, 0, 1, 0, 1, 0, 1, 2, 1, 1, 1, 2, 4, 1, 1, 0, 4, 4, 1, 0];

//                                                       ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
const OPEN_JUNGSEONG_BY_CHOSEONG: [usize; CHOSEONG_COUNT] = [0, 2, 2, 2, 1, 1, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 1, 2, 1];
const NIEUN_SIOT_JUNGSEONG_BY_CHOSEONG: [usize; CHOSEONG_COUNT] = [3, 4, 7, 5, 5, 7, 7, 7, 7, 6, 6, 7, 7, 6, 7, 4, 7, 5, 7];
const O_JONGSEONG_BY_CHOSEONG: [usize; CHOSEONG_COUNT] = [2, 2, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 2, 3, 2, 3, 3, 3];
const U_JONGSEONG_BY_CHOSEONG: [usize; CHOSEONG_COUNT] = [4, 4, 5, 5, 5, 5, 5, 5, 5, 4, 4, 5, 5, 4, 5, 4, 5, 5, 5];

/// Trailing consonants drawn low enough to sit under a raised ㅜ ㅠ ㅡ.
const LOW_JONGSEONG: [T; 8] = [
    T::Giyeok,
    T::Nieun,
    T::Digeut,
    T::Mieum,
    T::Siot,
    T::Ieung,
    T::Jieut,
    T::Pieup,
];

/// 음 응 읒 읖: ㅇ + ㅡ with these trailing consonants keeps the high ㅡ.
const EU_HIGH_JONGSEONG: [T; 4] = [T::Mieum, T::Ieung, T::Jieut, T::Pieup];

const ROUND_JUNGSEONG: [V; 6] = [V::O, V::Oe, V::Yo, V::U, V::Yu, V::Eu];

pub fn rule(syllable: Syllable) -> VariantSelection {
    VariantSelection::new(
        choseong_variant(syllable),
        jungseong_variant(syllable),
        jongseong_variant(syllable),
    )
}

fn choseong_variant(s: Syllable) -> usize {
    let Syllable {
        choseong: cho,
        jungseong: jung,
        jongseong: jong,
    } = s;

    if !jong.is_present() {
        if cho == C::Rieul && jung == V::Eo {
            return 1; // 러
        }
        if jung.is_any(&[V::Eo, V::Yeo]) {
            return 0;
        }
        if cho == C::Tieut && jung == V::E {
            return 14; // 테
        }
        return CHOSEONG_BY_JUNGSEONG[jung.index()];
    }

    if jung.is_any(&[V::Eo, V::Yeo]) {
        return 11;
    }
    if cho == C::Digeut {
        if jung == V::Wa && jong.is_any(&[T::Nieun, T::Siot]) {
            return 7; // 돤 돳
        }
        if jung == V::O && jong == T::Tieut {
            return 14; // 돝
        }
    }
    if jung.is_any(&[V::U, V::Yu]) {
        return 13;
    }
    10 + CHOSEONG_BY_JUNGSEONG[jung.index()]
}

fn jungseong_variant(s: Syllable) -> usize {
    let Syllable {
        choseong: cho,
        jungseong: jung,
        jongseong: jong,
    } = s;

    if !jong.is_present() {
        if cho == C::Tieut && jung == V::E {
            return 0; // 테
        }
        if jung == V::U && cho.is_any(&[C::Digeut, C::Pieup]) {
            return 1; // 두 푸
        }
        if cho == C::Hieuh && jung == V::O {
            return 2; // 호
        }
        return OPEN_JUNGSEONG_BY_CHOSEONG[cho.index()];
    }

    let narrow_compound = match jung {
        // 뫅-뫟
        V::Wa => cho == C::Mieum,
        // 뢕-뢯 봭-뵇 쐑-쐫 왝-왷
        V::Wae => cho.is_any(&[C::Rieul, C::Bieup, C::SsangSiot, C::Ieung]),
        // 뤅-뤟 뭑-뭫 붝-붷 (except 붠 붯) 쒁-쒛 웍-웧 춱-췋 쿽-퀗 퉉-퉣 풕-풯 훡-훻
        V::Wo => {
            cho.is_any(&[C::Rieul, C::Mieum, C::SsangSiot, C::Ieung])
                || cho >= C::Chieut
                || (cho == C::Bieup && !jong.is_any(&[T::Nieun, T::Siot]))
        }
        // 뇍-뇧 뢱-룋 뫽-묗 뵉-뵣 왹-욓, plus 됟 될
        V::Oe => {
            cho.is_any(&[C::Nieun, C::Rieul, C::Mieum, C::Bieup, C::Ieung])
                || (cho == C::Digeut && jong.is_any(&[T::Digeut, T::Rieul]))
        }
        // 흭-힇
        V::Ui => cho == C::Hieuh,
        _ => false,
    };
    if narrow_compound {
        return 11;
    }

    if jong.is_any(&[T::Nieun, T::Siot]) {
        return NIEUN_SIOT_JUNGSEONG_BY_CHOSEONG[cho.index()];
    }

    if !jung.is_any(&ROUND_JUNGSEONG) {
        return 12;
    }
    if cho == C::Ieung && jung == V::Eu && jong.is_any(&EU_HIGH_JONGSEONG) {
        return 9;
    }
    if cho == C::Digeut && jung == V::O && jong == T::Tieut {
        return 9; // 돝
    }

    let fallback = if jung.is_any(&[V::U, V::Yu, V::Eu]) && !jong.is_any(&LOW_JONGSEONG) {
        9
    } else {
        10
    };
    match cho {
        C::Giyeok | C::SsangGiyeok | C::Kieuk => 8,
        C::Siot | C::SsangSiot | C::SsangJieut => 9,
        _ => fallback,
    }
}

fn jongseong_variant(s: Syllable) -> usize {
    let Syllable {
        choseong: cho,
        jungseong: jung,
        jongseong: jong,
    } = s;

    if cho == C::Digeut && jung.is_any(&[V::We, V::Wi]) && jong == T::Tieut {
        return 5; // 뒡 뒽
    }

    match JONGSEONG_BY_JUNGSEONG[jung.index()] {
        // ㅗ ㅛ: split by choseong
        2 => O_JONGSEONG_BY_CHOSEONG[cho.index()],
        // ㅜ ㅠ ㅡ: split by choseong and jongseong
        4 => {
            if cho == C::Ieung && jung == V::Eu && jong.is_any(&EU_HIGH_JONGSEONG) {
                return 4;
            }
            if !jong.is_present() {
                0
            } else if jong.is_any(&LOW_JONGSEONG) {
                U_JONGSEONG_BY_CHOSEONG[cho.index()]
            } else {
                4
            }
        }
        other => other,
    }
}

const CHOSEONG_DOCS: [&str; 20] = [
    "받침 없는 [ㅏ ㅑ ㅣ ㅓ ㅕ]",
    "받침 없는 [ㅐ ㅒ ㅔ ㅖ], 러",
    "받침 없는 [ㅗ ㅛ]",
    "받침 없는 [ㅡ]",
    "받침 없는 [ㅜ ㅠ]",
    "받침 없는 [ㅘ ㅚ]",
    "받침 없는 [ㅙ]",
    "받침 없는 [ㅝ ㅟ]",
    "받침 없는 [ㅞ]",
    "받침 없는 [ㅢ]",
    "받침 있는 [ㅏ ㅑ ㅣ]",
    "받침 있는 [ㅐ ㅒ ㅓ ㅔ ㅕ ㅖ]",
    "받침 있는 [ㅗ ㅛ]",
    "받침 있는 [ㅜㅠㅡ]",
    "[ㅗㅚㅜㅠㅡ]와 높은받침 결합 낮은초성, 테",
    "받침 있는 [ㅘ ㅚ]",
    "받침 있는 [ㅙ],",
    "받침 있는 [ㅝ ㅟ]",
    "받침 있는 [ㅞ]",
    "받침 있는 [ㅢ]",
];

const JUNGSEONG_DOCS: [&str; 13] = [
    "받침 없는 초성 [ㄱ] 결합, 테",
    "받침 없는 초성 [ㄸ ㄹ ㅆ ㅌ ㅎ] 결합, 두푸",
    "그 외 받침 없음, 호",
    "받침 [ㄴ ㅅ]과 초성 [ㄱ] 결합",
    "받침 [ㄴ ㅅ]과 초성 [ㄲ ㅋ] 결합",
    "받침 [ㄴ ㅅ]과 초성 [ㄷ ㄸ ㅍ] 결합",
    "받침 [ㄴ ㅅ]과 초성 [ㅅ ㅆ ㅉ] 결합",
    "받침 [ㄴ ㅅ]과 그 외 결합",
    "그 외 받침과 초성 [ㄱㄲㅋ]결합 [ㅗㅚㅛㅜㅠㅡ]",
    "그 외 높은종성결합 [ㅡㅗ] 또는 초성[ㅅㅆㅉ]결합 [ㅗㅚㅛㅜㅠㅡ]",
    "그 외 낮은종성 또는 그 외 초성결합 [ㅗㅚㅛㅡ]",
    "일부 낮은종성과 높은초성결합 [ㅘㅙㅚㅝㅢ]",
    "그 외 받침과 그 외 중성",
];

const JONGSEONG_DOCS: [&str; 7] = [
    "중성 [ㅏ ㅑ ㅓ ㅕ ㅟ ㅣ]",
    "중성 [ㅐ ㅒ ㅔ ㅖ ㅘ ㅙ ㅚ ㅝ ㅞ ㅢ ]",
    "초성 [ㄱ ㄲ ㅅ ㅆ ㅉ ㅋ]과 중성 [ㅗ ㅛ] 결합",
    "그 외 초성과 중성 [ㅗ ㅛ] 결합",
    "초성[ㄱㄲㅋㅅㅆㅉ]결합 또는 높은종성결합 중성[ㅜㅠㅡ]",
    "낮은종성[ㄱㄴㄷㅁㅅㅇㅈㅍ]결합 중성[ㅜㅠㅡ]",
    "더미",
];

pub fn template() -> Result<HangulTemplate> {
    HangulTemplate::new(
        NAME,
        COUNTS,
        rule,
        TemplateDocs::new(&CHOSEONG_DOCS, &JUNGSEONG_DOCS, &JONGSEONG_DOCS),
    )
}
