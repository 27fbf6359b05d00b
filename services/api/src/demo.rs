use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use mindmetrics::assessments::attempts::{AssessmentService, AssessmentSubmission, Owner};
use mindmetrics::assessments::bank::{self, QuestionBank, ScaledBankImporter};
use mindmetrics::assessments::classify;
use mindmetrics::assessments::flow::{AccountPage, ViewState};
use mindmetrics::assessments::scoring::{self, Answer};
use mindmetrics::assessments::TestKind;
use mindmetrics::error::AppError;

use crate::infra::{InMemoryAccountGateway, InMemoryAssessmentRepository};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Test to walk through: iq, adhd, asd, or anxiety. Defaults to anxiety.
    #[arg(long)]
    pub(crate) test: Option<String>,
    /// Skip the screen-flow portion of the demo.
    #[arg(long)]
    pub(crate) skip_flow: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BankValidateArgs {
    /// CSV question-bank export to validate
    pub(crate) file: PathBuf,
}

pub(crate) fn run_bank_validation(args: BankValidateArgs) -> Result<(), AppError> {
    let bank = ScaledBankImporter::from_path(&args.file)?;
    println!("Question bank ok: {}", args.file.display());
    println!(
        "- {} questions | max score {}",
        bank.len(),
        bank.max_score()
    );
    if let QuestionBank::Scaled(questions) = &bank {
        if let Some(first) = questions.first() {
            println!(
                "- first item: \"{}\" ({} options)",
                first.prompt,
                first.options.len()
            );
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { test, skip_flow } = args;

    let test = match test {
        Some(raw) => TestKind::parse(&raw).unwrap_or_else(|| {
            println!("Unknown test '{raw}', falling back to anxiety");
            TestKind::Anxiety
        }),
        None => TestKind::Anxiety,
    };

    println!("Assessment platform demo: {}", test.title());

    let bank = bank::bank(test);
    println!(
        "- bank loaded: {} questions | max score {}",
        bank.len(),
        bank.max_score()
    );

    if !skip_flow {
        render_flow_walkthrough(test);
    }

    println!("\nAssessment lifecycle (in-memory backends)");
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let accounts = Arc::new(InMemoryAccountGateway::default());
    let service = Arc::new(AssessmentService::new(repository, accounts.clone()));

    // An anonymous visitor answers the highest-weighted option everywhere.
    let answers = demo_answers(bank);

    // Score before persisting so a storage failure never hides the result.
    let preview = scoring::score(test, &answers);
    let band = classify::classify(test, preview.classifiable_score());
    println!(
        "- Scored {} of {} -> {}",
        preview.classifiable_score(),
        preview.max_score(),
        band.category
    );

    let submission = AssessmentSubmission {
        test,
        answers,
        session: None,
    };
    let record = match service.submit(submission, None) {
        Ok(record) => record,
        Err(err) => {
            println!("  Result was not persisted: {err}");
            return Ok(());
        }
    };
    let session = match &record.owner {
        Owner::Anonymous(session) => session.clone(),
        Owner::User(user) => {
            println!("  Unexpected owner {} for anonymous submit", user.0);
            return Ok(());
        }
    };
    println!(
        "- Stored assessment {} under anonymous session {}",
        record.id.0, session.0
    );

    match service.summary(&record.id) {
        Ok(summary) => println!(
            "  Free summary: {} ({} of {} answered)",
            summary.category, summary.answered, summary.total_questions
        ),
        Err(err) => println!("  Free summary unavailable: {err}"),
    }

    match service.detailed(&record.id, None) {
        Err(err) => println!("  Detailed view without a sign-in: {err}"),
        Ok(_) => println!("  Detailed view unexpectedly open"),
    }

    let token = "demo-token";
    let user = accounts.issue_token(token, "user-demo");
    println!("- Signed in as {}", user.0);

    match service.claim(&session, Some(token)) {
        Ok(migrated) => println!("  Claimed {migrated} anonymous assessment(s)"),
        Err(err) => {
            println!("  Claim failed: {err}");
            return Ok(());
        }
    }

    match service.detailed(&record.id, Some(token)) {
        Err(err) => println!("  Detailed view before purchase: {err}"),
        Ok(_) => println!("  Detailed view unexpectedly open"),
    }

    match service.unlock(Some(token), "pi_demo_0001") {
        Ok(payer) => println!("- Unlocked detailed results for {}", payer.0),
        Err(err) => {
            println!("  Unlock failed: {err}");
            return Ok(());
        }
    }

    match service.detailed(&record.id, Some(token)) {
        Ok(detail) => match serde_json::to_string_pretty(&detail) {
            Ok(json) => println!("  Detailed payload:\n{json}"),
            Err(err) => println!("  Detailed payload unavailable: {err}"),
        },
        Err(err) => println!("  Detailed view still gated: {err}"),
    }

    match service.list(Some(token)) {
        Ok(owned) => println!("- Account now holds {} assessment(s)", owned.len()),
        Err(err) => println!("  Account listing unavailable: {err}"),
    }

    Ok(())
}

/// Drive the screen state machine end to end and print each hop.
fn render_flow_walkthrough(test: TestKind) {
    println!("\nScreen flow walkthrough");
    println!("  {}", ViewState::Home.screen());

    let mut state = match ViewState::Home.start(test).and_then(ViewState::confirm_gender) {
        Ok(state) => state,
        Err(err) => {
            println!("  intake rejected: {err}");
            return;
        }
    };
    println!("  start -> gender -> {}", state.screen());

    let questions = bank::bank(test).len();
    for _ in 0..questions {
        state = match state.next() {
            Ok(next) => next,
            Err(err) => {
                println!("  advance rejected: {err}");
                return;
            }
        };
    }
    println!("  answered {questions} questions -> {}", state.screen());

    let finish = state
        .view_results()
        .and_then(ViewState::begin_payment)
        .and_then(ViewState::payment_complete)
        .and_then(|state| state.open_account_page(AccountPage::Dashboard))
        .and_then(ViewState::go_home);
    match finish {
        Ok(state) => println!("  results -> payment -> dashboard -> {}", state.screen()),
        Err(err) => println!("  payment path rejected: {err}"),
    }
}

/// Correct answers for IQ banks; the top-weighted option for likert banks.
fn demo_answers(bank: &QuestionBank) -> Vec<Option<Answer>> {
    match bank {
        QuestionBank::Iq(questions) => questions
            .iter()
            .map(|question| Some(Answer::Label(question.correct_answer.clone())))
            .collect(),
        QuestionBank::Scaled(questions) => questions
            .iter()
            .map(|question| {
                let top = question
                    .scoring
                    .iter()
                    .enumerate()
                    .max_by_key(|(_, points)| **points)
                    .map(|(index, _)| index)?;
                Some(Answer::Index(top))
            })
            .collect(),
    }
}
