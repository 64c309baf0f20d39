// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;

use crate::catalog::CatalogStore;
use crate::error::Fallible;
use crate::error::fail;
use crate::provider::PathProvider;
use crate::review::ScoreBand;
use crate::review::Summary;
use crate::session::QuizSession;
use crate::session::QuizState;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    /// Human-readable output.
    Text,
    /// JSON summary.
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub async fn run_quiz(catalog: &Path, set_name: &str, format: OutputFormat) -> Fallible<()> {
    let mut store = CatalogStore::new();
    store.load(&PathProvider::for_path(catalog)).await;
    let Some(set) = store.find(set_name) else {
        return fail(format!("no question set named {set_name:?}."));
    };
    let mut session = QuizSession::new();
    session.start_quiz(set);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    drill(&mut session, stdin.lock(), &mut stdout)?;
    report(&session, format, &mut stdout)
}

/// Ask every remaining question, reading choices from `input`. Stops early on
/// `q` or end of input.
pub fn drill<R: BufRead, W: Write>(
    session: &mut QuizSession,
    mut input: R,
    output: &mut W,
) -> Fallible<()> {
    if let Some(set) = session.current_set() {
        writeln!(output, "{}", set.name())?;
        writeln!(output)?;
    }
    while let Some(question) = session.current_question() {
        writeln!(output, "{}", session.progress_text())?;
        writeln!(output, "{}", question.text())?;
        for (i, answer) in question.answers().iter().enumerate() {
            writeln!(output, "  {}) {}", label(i), answer.text())?;
        }
        let count = question.answers().len();
        if count == 0 {
            writeln!(output, "This question has no answers; stopping.")?;
            break;
        }
        let Some(choice) = read_choice(&mut input, output, count)? else {
            break;
        };
        session.select_answer(choice);
        feedback(session, output)?;
        session.advance();
        writeln!(output)?;
    }
    if session.state() != QuizState::Complete {
        writeln!(output, "Quiz ended early.")?;
    }
    Ok(())
}

fn feedback<W: Write>(session: &QuizSession, output: &mut W) -> Fallible<()> {
    let Some(question) = session.current_question() else {
        return Ok(());
    };
    if session.last_answer_correct() {
        writeln!(output, "Correct!")?;
    } else {
        match question.correct_answer() {
            Some(answer) => writeln!(output, "Wrong. The answer was: {}", answer.text())?,
            None => writeln!(output, "Wrong.")?,
        }
    }
    if !question.explanation().is_empty() {
        writeln!(output, "{}", question.explanation())?;
    }
    Ok(())
}

/// Read a choice until it names one of `count` answers. `None` means the
/// user quit.
fn read_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    count: usize,
) -> Fallible<Option<usize>> {
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match parse_choice(line) {
            Some(index) if index < count => return Ok(Some(index)),
            _ => writeln!(
                output,
                "Please pick {} to {}, or q to quit.",
                label(0),
                label(count - 1)
            )?,
        }
    }
}

/// Answers are labeled A, B, C, ... and then by number past Z.
fn label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}

/// Accepts a letter (case-insensitive) or a one-based number.
fn parse_choice(input: &str) -> Option<usize> {
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1);
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
        }
        _ => None,
    }
}

pub fn report<W: Write>(
    session: &QuizSession,
    format: OutputFormat,
    output: &mut W,
) -> Fallible<()> {
    let summary = Summary::from_session(session);
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            writeln!(output, "{json}")?;
        }
        OutputFormat::Text => {
            let verdict = match summary.band {
                ScoreBand::Excellent => "Excellent!",
                ScoreBand::Fair => "Not bad.",
                ScoreBand::Poor => "Keep practicing.",
            };
            writeln!(
                output,
                "Score: {}/{} ({}%) {verdict}",
                summary.score.correct, summary.score.total, summary.percentage
            )?;
            if summary.mistakes.is_empty() {
                writeln!(output, "No mistakes.")?;
            }
            for mistake in &summary.mistakes {
                writeln!(output)?;
                writeln!(output, "#{} {}", mistake.number, mistake.question)?;
                writeln!(output, "  Your answer: {}", mistake.selected_answer)?;
                writeln!(
                    output,
                    "  Correct:     {}",
                    mistake.correct_answer.as_deref().unwrap_or("N/A")
                )?;
                if !mistake.explanation.is_empty() {
                    writeln!(output, "  {}", mistake.explanation)?;
                }
            }
        }
    }
    Ok(())
}
