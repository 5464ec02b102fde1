//! Behavioural tests for the uwuify crate.
//!
//! These tests validate the pipeline against Gherkin scenarios covering
//! phoneme substitution, URL and handle preservation, determinism, and
//! modifier validation.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use uwuify::{ModifierError, Modifiers, Uwuifier};

/// Test world holding the configured uwuifier and pass outputs.
#[derive(Default, ScenarioState)]
struct World {
    uwuifier: Slot<Uwuifier>,
    output: Slot<String>,
    second_output: Slot<String>,
    set_result: Slot<Result<(), ModifierError>>,
}

impl World {
    fn uwuifier(&self) -> Uwuifier {
        self.uwuifier.get().expect("uwuifier should be configured")
    }

    fn output(&self) -> String {
        self.output.get().expect("a pass should have run")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a default uwuifier")]
fn a_default_uwuifier(world: &World) {
    world.uwuifier.set(Uwuifier::new());
}

#[given("an uwuifier with words modifier {value:f64}")]
fn an_uwuifier_with_words_modifier(world: &World, value: f64) {
    let uwuifier = Uwuifier::new().with_words(value).expect("valid modifier");
    world.uwuifier.set(uwuifier);
}

#[given("an uwuifier with every modifier disabled")]
fn an_uwuifier_with_every_modifier_disabled(world: &World) {
    world
        .uwuifier
        .set(Uwuifier::new().with_modifiers(Modifiers::disabled()));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the words pass runs on \"{text}\"")]
fn the_words_pass_runs_on(world: &World, text: String) {
    world.output.set(world.uwuifier().uwuify_words(&text));
}

#[when("the exclamations pass runs on \"{text}\"")]
fn the_exclamations_pass_runs_on(world: &World, text: String) {
    world.output.set(world.uwuifier().uwuify_exclamations(&text));
}

#[when("the sentence pass runs on \"{text}\"")]
fn the_sentence_pass_runs_on(world: &World, text: String) {
    world.output.set(world.uwuifier().uwuify_sentence(&text));
}

#[when("the sentence pass runs twice on \"{text}\"")]
fn the_sentence_pass_runs_twice_on(world: &World, text: String) {
    let uwuifier = world.uwuifier();
    world.output.set(uwuifier.uwuify_sentence(&text));
    world.second_output.set(uwuifier.uwuify_sentence(&text));
}

#[when("the words modifier is set to {value:f64}")]
fn the_words_modifier_is_set_to(world: &World, value: f64) {
    let mut uwuifier = world.uwuifier();
    world.set_result.set(uwuifier.set_words_modifier(value));
    world.uwuifier.set(uwuifier);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the output is \"{expected}\"")]
fn the_output_is(world: &World, expected: String) {
    assert_eq!(world.output(), expected);
}

#[then("both outputs match")]
fn both_outputs_match(world: &World) {
    let second = world.second_output.get().expect("second run should exist");
    assert_eq!(world.output(), second);
}

#[then("the modifier is rejected")]
fn the_modifier_is_rejected(world: &World) {
    let result = world.set_result.get().expect("setter should have run");
    assert!(matches!(result, Err(ModifierError::Words { .. })));
}

#[then("the words modifier is still {value:f64}")]
fn the_words_modifier_is_still(world: &World, value: f64) {
    assert_eq!(world.uwuifier().words_modifier(), value);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/uwuify.feature",
    name = "Phoneme rules apply at full strength"
)]
fn phoneme_rules_apply_at_full_strength(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/uwuify.feature",
    name = "Sentences keep URLs and handles intact"
)]
fn sentences_keep_urls_and_handles_intact(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/uwuify.feature", name = "Repeated runs agree")]
fn repeated_runs_agree(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/uwuify.feature",
    name = "Disabled modifiers leave text untouched"
)]
fn disabled_modifiers_leave_text_untouched(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/uwuify.feature",
    name = "Trailing exclamation runs are replaced"
)]
fn trailing_exclamation_runs_are_replaced(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/uwuify.feature",
    name = "Out of range modifiers are rejected"
)]
fn out_of_range_modifiers_are_rejected(world: World) {
    let _ = world;
}
