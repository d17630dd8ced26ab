use std::fs;

use tempfile::tempdir;
use wernicke::{
    evaluate, parse_answer_key, Detector, FrequencyProfile, NgramOrder, ProfileStore, Trainer,
};

#[test]
fn test_save_load_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store = ProfileStore::new(dir.path())?;

    let profile = FrequencyProfile::from_text("abracadabra", NgramOrder::Bigram)?;
    let path = store.save_profile("english", NgramOrder::Bigram, &profile)?;
    let loaded = store.load_profile(&path)?;

    let saved_entries: Vec<(&str, f64)> = profile.iter().collect();
    let loaded_entries: Vec<(&str, f64)> = loaded.iter().collect();
    assert_eq!(saved_entries, loaded_entries);
    Ok(())
}

#[test]
fn test_discovery_matches_suffix_and_derives_label() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store = ProfileStore::new(dir.path())?;

    let unigrams = FrequencyProfile::from_text("eeeet", NgramOrder::Unigram)?;
    store.save_profile("english", NgramOrder::Unigram, &unigrams)?;
    let bigrams = FrequencyProfile::from_text("ababab", NgramOrder::Bigram)?;
    store.save_profile("french", NgramOrder::Bigram, &bigrams)?;
    fs::write(dir.path().join("notes.txt"), "not a weight file")?;

    let discovered = store.discover_profiles(NgramOrder::Unigram)?;
    assert_eq!(discovered.len(), 1);
    assert_eq!(discovered[0].0, "english");

    let discovered = store.discover_profiles(NgramOrder::Bigram)?;
    assert_eq!(discovered.len(), 1);
    assert_eq!(discovered[0].0, "french");
    Ok(())
}

#[test]
fn test_discovery_is_sorted_by_file_name() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store = ProfileStore::new(dir.path())?;

    let profile = FrequencyProfile::from_text("eeeet", NgramOrder::Unigram)?;
    store.save_profile("spanish", NgramOrder::Unigram, &profile)?;
    store.save_profile("english", NgramOrder::Unigram, &profile)?;
    store.save_profile("german", NgramOrder::Unigram, &profile)?;

    let discovered = store.discover_profiles(NgramOrder::Unigram)?;
    let labels: Vec<&str> = discovered.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels, vec!["english", "german", "spanish"]);
    Ok(())
}

#[test]
fn test_malformed_records_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store = ProfileStore::new(dir.path())?;

    let path = dir.path().join("english-unigram-weights.txt");
    fs::write(
        &path,
        "ab\t0.5\nno separator here\nx\t\t1.0\n\t0.2\ny\tnot-a-number\nzz\t0.25\n",
    )?;

    let loaded = store.load_profile(&path)?;
    let entries: Vec<(&str, f64)> = loaded.iter().collect();
    assert_eq!(entries, vec![("ab", 0.5), ("zz", 0.25)]);
    Ok(())
}

#[test]
fn test_label_collision_last_scanned_wins() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store = ProfileStore::new(dir.path())?;

    // Both names contain the suffix, so both map to the label "en"; the
    // `.bak` file sorts after the plain one and must win.
    fs::write(dir.path().join("en-unigram-weights.txt"), "e\t0.9\n")?;
    fs::write(dir.path().join("en-unigram-weights.txt.bak"), "e\t0.1\n")?;

    let discovered = store.discover_profiles(NgramOrder::Unigram)?;
    assert_eq!(discovered.len(), 1);
    assert_eq!(discovered[0].0, "en");
    assert_eq!(discovered[0].1.frequency("e"), Some(0.1));
    Ok(())
}

#[test]
fn test_train_detect_evaluate_pipeline() -> Result<(), Box<dyn std::error::Error>> {
    let corpus_dir = tempdir()?;
    fs::write(corpus_dir.path().join("english"), "eeeet")?;
    fs::write(corpus_dir.path().join("spanish"), "aaaao")?;

    let weights_dir = tempdir()?;
    let store = ProfileStore::new(weights_dir.path())?;
    let trainer = Trainer::new(store, NgramOrder::Unigram);
    let summary = trainer.train_directory(corpus_dir.path())?;
    assert_eq!(summary.trained, 2);
    assert_eq!(summary.skipped, 0);

    let detector = Detector::builder()
        .with_order(NgramOrder::Unigram)
        .with_profile_dir(weights_dir.path())
        .build()?;
    assert_eq!(detector.info().num_languages, 2);

    let predictions = detector.detect_lines("eeet\naaao");
    let expected = parse_answer_key("1 english\n2 spanish");
    let evaluation = evaluate(&expected, &predictions)?;
    assert_eq!(evaluation.to_string(), "Accuracy = 100.00%");
    Ok(())
}

#[test]
fn test_training_skips_empty_corpus_file() -> Result<(), Box<dyn std::error::Error>> {
    let corpus_dir = tempdir()?;
    fs::write(corpus_dir.path().join("english"), "eeeet")?;
    // Normalization strips digits and spaces, leaving nothing to count.
    fs::write(corpus_dir.path().join("numbers"), "12 34 56")?;

    let weights_dir = tempdir()?;
    let store = ProfileStore::new(weights_dir.path())?;
    let trainer = Trainer::new(store.clone(), NgramOrder::Unigram);
    let summary = trainer.train_directory(corpus_dir.path())?;
    assert_eq!(summary.trained, 1);
    assert_eq!(summary.skipped, 1);

    let discovered = store.discover_profiles(NgramOrder::Unigram)?;
    assert_eq!(discovered.len(), 1);
    assert_eq!(discovered[0].0, "english");
    Ok(())
}
