use itertools::Itertools;

use harmony::{
    analysis::{find_keys, parse_chords, Analysis, AnalysisSettings},
    primitives::{Key, Mode},
};

#[test]
fn empty_progression_lists_all_keys_in_order() {
    let keys = find_keys(&[]);
    assert_eq!(keys.len(), 24);
    let roots = [
        "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B",
    ];
    let expected = roots
        .iter()
        .flat_map(|root| [root.to_string(), format!("{}m", root)]);
    keys.iter()
        .map(|key| key.to_string())
        .zip_eq(expected)
        .map(|(a, b)| assert_eq!(a, b))
        .count();
}

#[test]
fn no_woman_no_cry() {
    let chords =
        parse_chords(&["C", "G", "Am", "F"]).expect("can not parse chords");
    let keys = find_keys(&chords);
    let c_pos = keys.iter().position(|k| k.to_string() == "C");
    let am_pos = keys.iter().position(|k| k.to_string() == "Am");
    assert!(c_pos.expect("C is a candidate") < am_pos.expect("Am too"));
    for key in keys.iter() {
        assert!(chords.iter().all(|chord| key.contains_chord(chord)));
    }

    let key = &keys[0];
    assert_eq!(key.mode(), Mode::Major);
    let labels = chords
        .iter()
        .map(|chord| key.degree_label(chord).unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(labels, ["I", "V", "vi", "IV"]);
}

#[test]
fn creep_in_g() {
    let key = Key::from_notation("G").unwrap();
    let chords =
        parse_chords(&["G", "B", "C", "Cm"]).expect("can not parse chords");
    let labels = chords
        .iter()
        .map(|chord| key.degree_label(chord).unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(labels, ["I", "III", "IV", "iv"]);

    let contained = chords
        .iter()
        .map(|chord| key.contains_chord(chord))
        .collect::<Vec<_>>();
    assert_eq!(contained, [true, false, true, false]);
}

#[test]
fn diatonic_triads_of_g() {
    let key = Key::from_notation("G").unwrap();
    let triads = key.diatonic_triads().collect::<Vec<_>>();
    assert_eq!(triads.len(), 7);
    assert_eq!(triads[0].to_notation().unwrap(), "G");
    assert!(triads[0].is_major_triad());
    // iterator can be taken again
    assert_eq!(key.diatonic_triads().collect::<Vec<_>>(), triads);
}

#[test]
fn every_diatonic_triad_is_found_in_its_key() {
    for key in Key::all() {
        let triads = key.diatonic_triads().collect::<Vec<_>>();
        assert!(find_keys(&triads).contains(&key));
    }
}

#[test]
fn analysis_with_detected_key() {
    let chords = parse_chords(&["C", "G", "Am", "F"]).unwrap();
    let analysis = Analysis::run(chords, &AnalysisSettings::default())
        .expect("progression is diatonic");
    assert!(analysis.detected);
    assert_eq!(analysis.key.to_string(), "C");
    assert!(analysis.outside.is_empty());
    assert_eq!(
        analysis.to_string(),
        "Chords: C, G, Am, F\n\
        Possible keys: C, Am\n\
        Key: C\n\
        C: I\n\
        G: V\n\
        Am: vi\n\
        F: IV\n"
    );
}
