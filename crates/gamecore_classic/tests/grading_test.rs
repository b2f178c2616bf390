//! End-to-end grading of the classic games.

use gamecore::{
    ChutesAndLaddersGame, Game, GameTurn, Grader, HandShape, InvariantSet, RockPaperScissorsGame,
    TurnRecordInvariants,
};
use gamecore_classic::{
    ClassicChutesAndLadders, ClassicRockPaperScissors, MatchConfig, RoundSummary, describe_turn,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_all_checks_pass() {
    init_tracing();
    let rps = ClassicRockPaperScissors::new();
    let chutes = ClassicChutesAndLadders::new();

    Grader::verify_rps_logic(&rps).unwrap();
    let winning_round = rps.turn(HandShape::Paper, HandShape::Rock);
    Grader::verify_rps_string(&RoundSummary(&winning_round).to_string()).unwrap();
    Grader::verify_chutes_logic(&chutes).unwrap();
}

#[test]
fn test_games_behind_trait_objects() {
    let games: Vec<Box<dyn Game>> = vec![
        Box::new(ClassicRockPaperScissors::new()),
        Box::new(ClassicChutesAndLadders::new()),
    ];

    let names: Vec<&str> = games.iter().map(|game| game.name()).collect();
    assert_eq!(names, vec!["Rock Paper Scissors", "Chutes and Ladders"]);
}

#[test]
fn test_mixed_history() {
    init_tracing();
    let config = MatchConfig::default().with_seed(2024).with_rounds(3);
    let rps = ClassicRockPaperScissors::with_config(config.clone());
    let chutes = ClassicChutesAndLadders::with_layout(Default::default(), config);

    let mut history: Vec<GameTurn> = rps.play();
    history.extend(chutes.play());

    assert!(history.iter().take(3).all(|turn| turn.as_rps().is_some()));
    assert!(history.iter().skip(3).all(|turn| turn.as_board().is_some()));
    for turn in &history {
        assert!(TurnRecordInvariants::check_all(turn).is_ok());
        assert!(!describe_turn(turn).is_empty());
    }
}
