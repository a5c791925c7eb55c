//! End-to-end detection tests against the shared fixture models.

mod common;

use common::*;
use langid_core::{Candidate, DetectionResult, Options, ScriptTable, UNDETERMINED};

fn assert_well_formed(result: &DetectionResult) {
    assert!(!result.candidates().is_empty());
    assert!(result
        .iter()
        .all(|c| (0.0..=1.0).contains(&c.confidence)));
    assert!(result
        .candidates()
        .windows(2)
        .all(|w| w[0].confidence >= w[1].confidence));
}

#[test]
fn fixture_languages_are_recognised() {
    let detector = detector();
    let options = Options::default();
    for (text, expected) in [
        (ENGLISH, "eng"),
        (SPANISH, "spa"),
        (FRENCH, "fra"),
        (GERMAN, "deu"),
        (RUSSIAN, "rus"),
        (UKRAINIAN, "ukr"),
    ] {
        let result = detector.detect(text, &options);
        assert_eq!(result.top().language, expected, "text: {text}");
        assert_eq!(result.top().confidence, 1.0);
        assert_eq!(detector.detect_top(text, &options), expected);
    }
}

#[test]
fn ranked_list_covers_the_script() {
    let detector = detector();
    let result = detector.detect(SPANISH, &Options::default());
    let mut languages: Vec<_> = result.languages().collect();
    assert_eq!(languages[0], "spa");
    languages.sort_unstable();
    assert_eq!(languages, ["deu", "eng", "fra", "spa"]);
    assert_well_formed(&result);
}

#[test]
fn short_inputs_are_undetermined() {
    let detector = detector();
    let undetermined = DetectionResult::undetermined();
    assert_eq!(detector.detect("", &Options::default()), undetermined);
    assert_eq!(detector.detect("ab", &Options::default()), undetermined);
    assert_eq!(detector.detect("123456789", &Options::default()), undetermined);
    assert_eq!(
        detector.detect(ENGLISH, &Options::default().with_min_length(500)),
        undetermined
    );
    assert_eq!(undetermined.candidates(), [Candidate::new(UNDETERMINED, 1.0)]);
}

#[test]
fn results_are_always_well_formed() {
    let detector = detector();
    let long = ENGLISH.repeat(60);
    let inputs = [
        "",
        "a",
        "1234567890",
        "  ...  !!!  ???  ",
        "xqzvkwjxqp",
        "Hello Привет Bonjour Здравствуйте",
        "日本語のテキストです。よろしく",
        "한국어 텍스트입니다 감사합니다",
        "🙂🙂🙂🙂🙂🙂🙂🙂🙂🙂🙂🙂",
        long.as_str(),
        ENGLISH,
        RUSSIAN,
    ];
    for input in inputs {
        for options in [
            Options::default(),
            Options::default().with_only(["spa"]),
            Options::default().with_ignore(["eng", "rus"]),
            Options::default_allowlist(),
        ] {
            let result = detector.detect(input, &options);
            assert_well_formed(&result);
        }
    }
}

#[test]
fn degenerate_normalization_yields_zero_confidences() {
    // Ten distinct trigrams, none in any model: min == 10 * 300, so the
    // denominator is zero.
    let result = detector().detect("xqzvkwjxqp", &Options::default());
    assert_eq!(result.len(), 4);
    assert!(result.iter().all(|c| c.confidence == 0.0));
    assert_eq!(result.languages().collect::<Vec<_>>(), ["eng", "spa", "fra", "deu"]);
}

#[test]
fn confidences_scale_by_input_length() {
    // 53 characters as given, 29 after cleaning.
    // Distances: eng 4568, deu 6602, fra 6616, spa 6900.
    let text = "The cat, the dog!!! 1234567890 ... and the house?????";
    let result = detector().detect(text, &Options::default());
    assert_eq!(result.languages().collect::<Vec<_>>(), ["eng", "deu", "fra", "spa"]);

    let max = (53 * 300 - 4568) as f64;
    let expected = [1.0, 1.0 - 2034.0 / max, 1.0 - 2048.0 / max, 1.0 - 2332.0 / max];
    for (candidate, expected) in result.iter().zip(expected) {
        assert!(
            (candidate.confidence - expected).abs() < 1e-12,
            "{}: {} != {expected}",
            candidate.language,
            candidate.confidence
        );
    }
}

#[test]
fn only_restricts_the_candidates() {
    let detector = detector();
    let options = Options::default().with_only(["spa"]);
    for text in [ENGLISH, SPANISH, FRENCH, RUSSIAN] {
        let result = detector.detect(text, &options);
        assert!(
            result.languages().all(|l| l == "spa" || l == UNDETERMINED),
            "text: {text}"
        );
    }
    assert_eq!(
        detector.detect(ENGLISH, &options).candidates(),
        [Candidate::new("spa", 1.0)]
    );
    assert!(detector.detect(RUSSIAN, &options).is_undetermined());
}

#[test]
fn ignore_removes_candidates() {
    let detector = detector();
    let result = detector.detect(SPANISH, &Options::default().with_ignore(["spa"]));
    assert!(result.languages().all(|l| l != "spa"));
    assert_eq!(result.len(), 3);
}

#[test]
fn ignore_wins_over_only() {
    let detector = detector();
    let options = Options::default().with_only(["fra"]).with_ignore(["fra"]);
    assert!(detector.detect(FRENCH, &options).is_undetermined());
    assert!(detector.detect(ENGLISH, &options).is_undetermined());
}

#[test]
fn detection_is_deterministic() {
    let detector = detector();
    let options = Options::default();
    for text in [ENGLISH, SPANISH, FRENCH, GERMAN, RUSSIAN, UKRAINIAN, "xqzvkwjxqp"] {
        assert_eq!(detector.detect(text, &options), detector.detect(text, &options));
        assert_eq!(
            common::detector().detect(text, &options),
            detector.detect(text, &options)
        );
    }
}

#[test]
fn latin_only_text_classifies_as_latin() {
    let table = ScriptTable::default();
    let found = table.classify("Thequickbrownfoxjumpsoverthelazydog").unwrap();
    assert_eq!(found.script.id(), "Latn");
    assert!((found.ratio - 1.0).abs() < f64::EPSILON);

    let found = table.classify(ENGLISH).unwrap();
    assert_eq!(found.script.id(), "Latn");
    // 64 Latin letters out of 80 characters.
    assert!((found.ratio - 64.0 / 80.0).abs() < 1e-12);
}

#[test]
fn single_language_scripts_skip_trigrams() {
    let detector = detector();
    let options = Options::default();
    assert_eq!(
        detector.detect("这是一个用于测试的中文句子", &options).candidates(),
        [Candidate::new("cmn", 1.0)]
    );
    assert_eq!(detector.detect_top("한국어 텍스트입니다 감사합니다", &options), "kor");
    assert_eq!(detector.detect_top("Καλημέρα σε όλους τους φίλους", &options), "ell");
}

#[test]
fn unmodelled_scripts_are_undetermined() {
    let detector = detector();
    let arabic = "القطة حيوان أليف يعيش في المنزل مع العائلة";
    assert!(detector.detect(arabic, &Options::default()).is_undetermined());
}

#[test]
fn long_input_is_truncated() {
    let detector = detector();
    let text = format!("{}{}", SPANISH.repeat(40), ENGLISH.repeat(40));
    assert!(text.chars().count() > 2048);
    assert_eq!(detector.detect_top(&text, &Options::default()), "spa");
    assert_eq!(
        detector.detect_top(&text, &Options::default().with_max_length(usize::MAX)),
        "eng"
    );
}

#[test]
fn default_allowlist_keeps_common_languages() {
    let detector = detector();
    let options = Options::default_allowlist();
    assert_eq!(detector.detect_top(ENGLISH, &options), "eng");
    assert_eq!(detector.detect_top(RUSSIAN, &options), "rus");
    assert_eq!(detector.detect_top("Καλημέρα σε όλους τους φίλους", &options), "ell");
}

#[test]
fn candidates_expose_language_names() {
    let detector = detector();
    let result = detector.detect(GERMAN, &Options::default());
    assert_eq!(result.top().name(), "German");
    assert_eq!(DetectionResult::undetermined().top().name(), "Undetermined");
}

#[test]
fn supported_languages_are_listed() {
    let detector = detector();
    let supported = detector.supported_languages();
    for code in ["deu", "eng", "fra", "rus", "spa", "ukr", "cmn", "jpn", "kor", "ell"] {
        assert!(supported.contains(&code), "missing {code}");
    }
    assert!(supported.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn detector_is_shared_across_threads() {
    let detector = detector();
    let options = Options::default();
    let texts = [ENGLISH, SPANISH, FRENCH, GERMAN, RUSSIAN, UKRAINIAN];
    let expected: Vec<DetectionResult> =
        texts.iter().map(|t| detector.detect(t, &options)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let detector = detector.clone();
                let options = &options;
                scope.spawn(move || {
                    texts
                        .iter()
                        .map(|t| detector.detect(t, options))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn results_serialize_as_ordered_pairs() {
    let result = detector().detect(ENGLISH, &Options::default().with_only(["eng"]));
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"[{"language":"eng","confidence":1.0}]"#);
}
