// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Symptom analysis and history commands.

use std::path::PathBuf;

use medtriage_client::FilePart;
use medtriage_core::types::{
    AnalyzeRequest, FollowUpQuestion, QuestionAnswer, QuestionsRequest, SaveSymptomsRequest,
};
use medtriage_core::{AccountKind, TriageError};
use medtriage_display::{TriageBanner, format_symptom_list};
use tracing::debug;

use crate::Context;
use crate::output;
use crate::prompt;

pub async fn symptoms(ctx: &Context) -> Result<(), TriageError> {
    let catalog = ctx.client.ai().symptoms().await?;
    for symptom in &catalog.symptoms {
        println!("  {symptom}");
    }
    Ok(())
}

/// Full symptom flow: open a session, save the selection, answer the
/// follow-up questions, then show the triage result.
pub async fn analyze(
    ctx: &Context,
    patient_id: Option<String>,
    symptoms: Vec<String>,
    ask_questions: bool,
) -> Result<(), TriageError> {
    let symptoms = normalize(symptoms);
    if symptoms.is_empty() {
        return Err(TriageError::InvalidInput("select at least one symptom".into()));
    }
    let patient_id = ctx.identifier(AccountKind::Patient, patient_id)?;
    let ai = ctx.client.ai();

    let session = ai.start_session(&patient_id).await?;
    println!("Analyzing: {}", format_symptom_list(&symptoms));

    ai.save_symptoms(&SaveSymptomsRequest {
        patient_id: patient_id.clone(),
        session_id: session.session_id.clone(),
        symptoms: symptoms.clone(),
    })
    .await?;

    let answers = if ask_questions {
        let questions = ai
            .questions(&QuestionsRequest {
                session_id: session.session_id.clone(),
                symptoms: symptoms.clone(),
            })
            .await?;
        debug!(count = questions.questions.len(), "follow-up questions received");
        ask(&questions.questions)?
    } else {
        Vec::new()
    };

    let response = ai
        .analyze(&AnalyzeRequest {
            patient_id,
            session_id: session.session_id,
            symptoms,
            answers,
        })
        .await?;
    output::print_banner(&TriageBanner::from(&response));
    Ok(())
}

pub async fn analyze_files(
    ctx: &Context,
    patient_id: Option<String>,
    paths: Vec<PathBuf>,
) -> Result<(), TriageError> {
    let patient_id = ctx.identifier(AccountKind::Patient, patient_id)?;
    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        files.push(FilePart::from_path(path).await?);
    }

    let ai = ctx.client.ai();
    let session = ai.start_session(&patient_id).await?;
    let response = ai
        .analyze_files(&patient_id, Some(&session.session_id), files)
        .await?;
    output::print_banner(&TriageBanner::from(&response));
    Ok(())
}

pub async fn history(ctx: &Context, patient_id: Option<String>) -> Result<(), TriageError> {
    let patient_id = ctx.identifier(AccountKind::Patient, patient_id)?;
    let history = ctx.client.ai().chat_history(&patient_id).await?;
    output::print_sessions(&history.sessions, &ctx.formatter);
    Ok(())
}

fn normalize(symptoms: Vec<String>) -> Vec<String> {
    symptoms
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn ask(questions: &[FollowUpQuestion]) -> Result<Vec<QuestionAnswer>, TriageError> {
    let mut answers = Vec::with_capacity(questions.len());
    for question in questions {
        println!("{}", question.question);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
        let raw = prompt::line("Answer")?;
        answers.push(QuestionAnswer {
            question: question.question.clone(),
            answer: resolve_answer(&question.options, &raw),
        });
    }
    Ok(answers)
}

/// A number picks the matching option; anything else is sent as typed.
fn resolve_answer(options: &[String], raw: &str) -> String {
    raw.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
        .cloned()
        .unwrap_or_else(|| raw.to_string())
}
