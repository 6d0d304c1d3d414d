//! Textual action scripts for headless runs
//!
//! A script is a list of tokens separated by whitespace or commas:
//! `lock`, `play`, `next`, `prev` (or `previous`). Appending `!` or `:double`
//! to `next`/`prev` makes it a double click, e.g. `play next! lock lock`.

use std::fmt;

use crate::model::{dispatch, Action, ActionEvent, Outcome, PlaybackContext, PlayerError};

/// Walkthrough of every mode: lock while playing, unlock, skip and seek
pub const DEMO_SCRIPT: &str = "play next lock play lock play prev play next! next";

/// One parsed press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub action: Action,
    pub event: ActionEvent,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.action {
            Action::Lock => "lock",
            Action::Play => "play",
            Action::Next => "next",
            Action::Previous => "prev",
        };
        if self.event.double_click {
            write!(f, "{}!", name)
        } else {
            f.write_str(name)
        }
    }
}

/// A step together with what it did
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    pub step: Step,
    pub outcome: Outcome,
}

pub fn parse_script(script: &str) -> Result<Vec<Step>, PlayerError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_step)
        .collect()
}

fn parse_step(token: &str) -> Result<Step, PlayerError> {
    let lower = token.to_ascii_lowercase();
    let (name, double_click) = if let Some(name) = lower.strip_suffix('!') {
        (name, true)
    } else if let Some(name) = lower.strip_suffix(":double") {
        (name, true)
    } else {
        (lower.as_str(), false)
    };

    let action = match name {
        "lock" | "unlock" => Action::Lock,
        "play" | "pause" => Action::Play,
        "next" => Action::Next,
        "prev" | "previous" => Action::Previous,
        _ => {
            return Err(PlayerError::UnknownAction {
                token: token.to_string(),
            })
        }
    };

    // Only the skip buttons distinguish double clicks
    if double_click && matches!(action, Action::Lock | Action::Play) {
        return Err(PlayerError::UnknownAction {
            token: token.to_string(),
        });
    }

    let event = if double_click { ActionEvent::DOUBLE } else { ActionEvent::SINGLE };
    Ok(Step { action, event })
}

/// Run every step against the context in order.
pub fn replay(ctx: &mut PlaybackContext, steps: &[Step]) -> Vec<StepResult> {
    steps
        .iter()
        .map(|step| {
            let before = ctx.mode();
            let outcome = dispatch(ctx, step.action, step.event);
            crate::log_dispatch!(step.action, before, ctx.mode(), outcome);
            StepResult {
                step: *step,
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mode, Playlist};

    #[test]
    fn parses_tokens_with_mixed_separators() {
        let steps = parse_script("play, next  NEXT! prev:double\nlock").unwrap();
        let actions: Vec<_> = steps.iter().map(|s| (s.action, s.event.double_click)).collect();
        assert_eq!(
            actions,
            vec![
                (Action::Play, false),
                (Action::Next, false),
                (Action::Next, true),
                (Action::Previous, true),
                (Action::Lock, false),
            ]
        );
    }

    #[test]
    fn steps_print_back_as_tokens() {
        let steps = parse_script("Previous:double PLAY next").unwrap();
        let printed: Vec<String> = steps.iter().map(|s| s.to_string()).collect();
        assert_eq!(printed, vec!["prev!", "play", "next"]);
    }

    #[test]
    fn empty_script_has_no_steps() {
        assert!(parse_script("  , ,").unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_tokens() {
        let err = parse_script("play stop").unwrap_err();
        match err {
            PlayerError::UnknownAction { token } => assert_eq!(token, "stop"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_double_click_on_play_and_lock() {
        assert!(parse_script("play!").is_err());
        assert!(parse_script("lock:double").is_err());
    }

    #[test]
    fn demo_script_matches_walkthrough() {
        let mut ctx = Playlist::demo().into_context().unwrap();
        let steps = parse_script(DEMO_SCRIPT).unwrap();
        let lines: Vec<String> = replay(&mut ctx, &steps)
            .iter()
            .map(|r| r.outcome.to_string())
            .collect();

        assert_eq!(
            lines,
            vec![
                "Playing: Song A",
                "Fast-forward 5 seconds",
                "Player locked",
                "Player is locked. Play button ignored.",
                "Player unlocked",
                "Playback paused",
                "Previous song: Song C",
                "Playing: Song C",
                "Next song: Song A",
                "Fast-forward 5 seconds",
            ]
        );
        assert_eq!(ctx.mode(), Mode::Playing);
        assert_eq!(ctx.current_index(), 0);
    }
}
