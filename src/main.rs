//! Tide Quiz entry point
//!
//! Terminal front-end: reads answers from stdin, measures answer time with a
//! wall clock and feeds both into the round driver.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use tide_quiz::consts::SETTINGS_FILE;
use tide_quiz::highscores::normalize_name;
use tide_quiz::persistence::FileStore;
use tide_quiz::quiz::{option_label, parse_option};
use tide_quiz::{Leaderboard, QuestionBank, QuizRound, QuizSelector, QuizSettings, RoundEvent, RoundInput, RoundPhase};

fn main() {
    env_logger::init();
    log::info!("Tide Quiz starting...");

    if let Err(e) = run() {
        log::error!("Terminal I/O failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
    let settings = QuizSettings::load(&settings_path);

    let mut bank = QuestionBank::builtin();
    let mut selector = QuizSelector::from_entropy();
    let mut board = Leaderboard::open(
        FileStore::new(&settings.leaderboard_path),
        settings.leaderboard_capacity,
        settings.name_length,
        settings.update_policy,
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_leaderboard(&board);
    print!("\nEnter your initials ({} letters): ", settings.name_length);
    io::stdout().flush()?;
    let Some(raw_name) = lines.next().transpose()? else {
        return Ok(());
    };
    let name = normalize_name(&raw_name, settings.name_length);

    let mut round = QuizRound::start(&mut bank, &mut selector, &settings);
    while !round.is_over() {
        let Some(question) = round.current_question(&bank) else {
            break;
        };
        println!(
            "\nQuestion {}/{} [{}] - {:.0}s",
            round.question_number().unwrap_or(0),
            round.len(),
            question.difficulty.as_str(),
            settings.question_time
        );
        println!("{}", question.prompt);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", option_label(i), option);
        }

        let shown = Instant::now();
        let choice = loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next().transpose()? else {
                println!("\nQuit before the end; score not recorded.");
                return Ok(());
            };
            match line.trim().chars().next().and_then(parse_option) {
                Some(option) => break option,
                None => println!("Type A, B, C or D"),
            }
        };

        let input = RoundInput {
            select: Some(choice),
            confirm: true,
        };
        for event in round.tick(&bank, &input, shown.elapsed().as_secs_f32()) {
            report(&event, &round, &bank);
        }

        // Skip the reveal delay; the terminal already printed the result
        while round.phase() == RoundPhase::ShowingAnswer {
            for event in round.tick(&bank, &RoundInput::default(), settings.answer_reveal_secs) {
                report(&event, &round, &bank);
            }
        }
    }

    match round.finish(&mut board, &name) {
        Some(rank) => println!("\n{name} placed #{rank}!"),
        None => println!("\nNo new high score this time."),
    }
    print_leaderboard(&board);
    Ok(())
}

fn report(event: &RoundEvent, round: &QuizRound, bank: &QuestionBank) {
    match event {
        RoundEvent::Answered { correct: true, points } => println!("Correct! +{points} points"),
        RoundEvent::Answered { correct: false, .. } | RoundEvent::TimedOut => {
            let verdict = if *event == RoundEvent::TimedOut { "Time's up!" } else { "Wrong." };
            match round.current_question(bank) {
                Some(q) => println!(
                    "{verdict} The answer was {}) {}",
                    option_label(q.correct_option),
                    q.correct_text()
                ),
                None => println!("{verdict}"),
            }
        }
        RoundEvent::NextQuestion { .. } => {}
        RoundEvent::Finished { score } => println!("\nGame over! Final score: {score}"),
    }
}

fn print_leaderboard(board: &Leaderboard) {
    println!("\n=== HIGH SCORES ===");
    for (i, entry) in board.get_entries().iter().enumerate() {
        println!("{:>2}. {:<8} {:>6}", i + 1, entry.name, entry.score);
    }
}
