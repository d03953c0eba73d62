//! Whole-corpus runs through the pipeline.

use rebranch::{
    Pipeline, PipelineOptions, RewriteError, Sentence, printer::ja_of, read_derivations,
};

use crate::utils::{get_test_data_path, read_corpus};

const SCENARIO_LEFT: [&str; 3] = [
    r"{> S {>B S/NP {>B S/(S\NP) {S/S Today} {S/(S\NP) Mary}} {(S\NP)/NP ate}} {NP apples}}",
    r"{>Bx1 S\NP {ADV0 S/S {< S {> S {>B S/S {S/S 1} {S/S 2}} {S 3}} {S\S 4}}} {S\NP 5}}",
    r"{> S {>B S/NP {>B S/(S\NP) {S/S Today} {>T S/(S\NP) {NP Mary}}} {(S\NP)/NP ate}} {NP apples}}",
];

#[test]
fn test_scenarios_reach_left_branching_form() -> anyhow::Result<()> {
    let sentences = read_corpus("scenarios.ccgbank");
    let report = Pipeline::default().run_batch(&sentences);
    assert_eq!(report.failed(), 0);
    let left: Vec<_> = report
        .sentences
        .iter()
        .map(|s| ja_of(&s.stages.left))
        .collect();
    assert_eq!(left, SCENARIO_LEFT);
    for sentence in &report.sentences {
        assert!(sentence.stages.converged, "{} did not converge", sentence.id);
        assert!(sentence.stages.type_raised.is_some());
    }
    Ok(())
}

#[test]
fn test_type_raise_can_be_disabled() -> anyhow::Result<()> {
    let sentences = read_corpus("scenarios.ccgbank");
    let pipeline = Pipeline::default().with_type_raise(false);
    assert!(!pipeline.options().type_raise);

    let stages = pipeline.run(&sentences[2].tree)?;
    assert_eq!(stages.type_raised, None);
    assert_eq!(stages.left, stages.right);
    assert_eq!(stages.rotation_passes, 0);
    Ok(())
}

#[test]
fn test_pass_limit_is_respected() -> anyhow::Result<()> {
    let sentences = read_corpus("scenarios.ccgbank");
    let stages = Pipeline::default()
        .with_rotation_passes(1)
        .run(&sentences[0].tree)?;
    assert_eq!(ja_of(&stages.left), SCENARIO_LEFT[0]);
    assert_eq!(stages.rotation_passes, 1);
    assert!(!stages.converged);
    Ok(())
}

#[test]
fn test_failures_do_not_stop_the_batch() {
    let text = std::fs::read_to_string(get_test_data_path().join("broken.ccgbank")).unwrap();
    let (readable, unreadable): (Vec<_>, Vec<_>) =
        read_derivations(&text).into_iter().partition(Result::is_ok);
    assert_eq!(unreadable.len(), 1);
    let sentences: Vec<Sentence> = readable.into_iter().map(Result::unwrap).collect();

    let report = Pipeline::new(PipelineOptions::default()).run_batch(&sentences);
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.sentences[0].id, "ID=1");

    let failure = &report.failures()[0];
    assert_eq!(failure.id, "ID=3");
    assert!(matches!(
        failure.error,
        RewriteError::UnsupportedCategoryShape { arity: 5, .. }
    ));
}

#[test]
fn test_stages_serialize_to_json() {
    let sentences = read_corpus("scenarios.ccgbank");
    let stages = Pipeline::default().run(&sentences[2].tree).unwrap();
    let json = serde_json::to_value(&stages).unwrap();
    assert_eq!(json["converged"], true);
    assert_eq!(json["type_raised"]["kind"], "Binary");
    assert_eq!(json["left"]["rule"], ">");
}
