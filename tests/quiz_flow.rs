use sentence_quiz::QuizApp;
use sentence_quiz::app::Advance;
use sentence_quiz::config::Config;
use sentence_quiz::model::{Question, Screen};
use std::time::Duration;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn question(correct: &[&str]) -> Question {
    Question {
        question: "_____________ _____________ _____________ _____________.".into(),
        options: words(correct),
        correct_answer: words(correct),
    }
}

fn started(bank: Vec<Question>) -> QuizApp {
    let mut app = QuizApp::with_questions(Config::default(), bank);
    assert!(app.is_on(Screen::Start));
    app.start_quiz();
    assert!(app.is_on(Screen::Quiz));
    app
}

fn pick(app: &mut QuizApp, list: &[&str]) {
    for w in list {
        app.select_word(w);
    }
}

#[test]
fn correct_order_scores_one() {
    let mut app = started(vec![question(&["I", "run", "fast", "today"])]);
    pick(&mut app, &["I", "run", "fast", "today"]);
    assert_eq!(app.go_next(), Some(Advance::Finished));

    assert!(app.is_on(Screen::Result));
    assert_eq!(app.score, 1);
    let rows = app.result_rows();
    assert_eq!(rows[0].verdict(), "Correct");
}

#[test]
fn wrong_order_scores_zero_and_shows_canonical_answer() {
    let mut app = started(vec![question(&["I", "run", "fast", "today"])]);
    pick(&mut app, &["run", "I", "fast", "today"]);
    app.go_next();

    assert_eq!(app.score, 0);
    let row = &app.result_rows()[0];
    assert_eq!(row.verdict(), "Incorrect");
    let expected: Vec<&str> = row.expected.iter().map(|p| p.label()).collect();
    assert_eq!(expected, vec!["I", " ", "run", " ", "fast", " ", "today", "."]);
}

#[test]
fn confirmed_quit_after_first_answer_forces_zero() {
    let mut app = started(vec![
        question(&["I", "run", "fast", "today"]),
        question(&["She", "sings", "very", "well"]),
    ]);
    pick(&mut app, &["I", "run", "fast", "today"]);
    assert_eq!(app.go_next(), Some(Advance::NextQuestion(1)));

    app.request_quit();
    app.confirm_quit();

    assert!(app.is_on(Screen::Result));
    assert_eq!(app.score, 0);
    assert_eq!(app.answers, vec![Vec::<String>::new(); 2]);
    assert!(app.result_rows().iter().all(|r| !r.correct));
}

#[test]
fn timer_expiry_records_partial_answer_and_advances() {
    let mut app = started(vec![
        question(&["I", "run", "fast", "today"]),
        question(&["She", "sings", "very", "well"]),
    ]);
    pick(&mut app, &["I", "run"]);
    assert_eq!(
        app.advance_timer(Duration::from_secs(30)),
        Some(Advance::NextQuestion(1))
    );
    assert_eq!(app.answers[0], words(&["I", "run"]));

    pick(&mut app, &["She"]);
    assert_eq!(
        app.advance_timer(Duration::from_secs(30)),
        Some(Advance::Finished)
    );
    assert!(app.is_on(Screen::Result));
    assert_eq!(app.score, 0);
}

#[test]
fn full_loop_back_to_start_keeps_bank() {
    let mut app = started(vec![question(&["I", "run", "fast", "today"])]);
    pick(&mut app, &["I", "run", "fast", "today"]);
    app.go_next();
    app.restart_quiz();
    assert!(app.is_on(Screen::Start));

    app.start_quiz();
    assert!(app.selected_words().is_empty());
    assert_eq!(app.remaining_display(), "00:30");
    assert_eq!(app.questions.len(), 1);
}

#[test]
fn short_timer_from_config() {
    let config = Config {
        seconds_per_question: 0,
        ..Config::default()
    };
    let mut app = QuizApp::with_questions(config, vec![question(&["I", "run", "fast", "today"])]);
    app.start_quiz();
    assert_eq!(app.remaining_display(), "00:00");
    assert_eq!(
        app.advance_timer(Duration::from_secs(1)),
        Some(Advance::Finished)
    );
}
