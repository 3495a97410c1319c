//! Interactive session: ask for each value in turn, then print the odds.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use streak_core::{AdjustedOdds, CalcConfig, Calculation, Game, OddsResult, Orientation};

use crate::prompt::Prompter;

pub fn run(game: Option<Game>, config: &CalcConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    session(&mut prompter, game, config)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Drive one calculation through `prompter` and print the result.
pub fn session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    game: Option<Game>,
    config: &CalcConfig,
) -> OddsResult<Calculation> {
    prompter.say(format!("  {} consecutive odds calculator\n", "Streak".bold()))?;

    let game = match game {
        Some(game) => game,
        None => {
            let names: Vec<String> = Game::all()
                .iter()
                .map(|g| g.to_string().to_lowercase())
                .collect();
            prompter.ask(&format!("Which game? [{}]: ", names.join("/")), Game::parse)?
        }
    };
    prompter.say(format!("The current game selected is {game}"))?;

    let base_percent: f64 = prompter
        .ask_parsed("What is the chance of a single roll, in percent (e.g. 10 for 10%)? ")?;
    let odds = AdjustedOdds::new(game, base_percent, config, &mut *prompter)?;

    let orientation =
        prompter.ask("Did it succeed or fail every time? [S/F]: ", Orientation::parse)?;
    let repetitions: u32 = prompter.ask_parsed("How many times in a row did this happen? ")?;

    let calculation = odds.streak(orientation, repetitions);
    prompter.say(calculation.summary(config.decimals))?;
    Ok(calculation)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use streak_core::{OddsError, TierPolicy};

    use super::*;

    fn play(
        input: &str,
        game: Option<Game>,
        config: &CalcConfig,
    ) -> (OddsResult<Calculation>, String) {
        let mut out = Vec::new();
        let result = {
            let mut prompter = Prompter::new(Cursor::new(input), &mut out);
            session(&mut prompter, game, config)
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn terraria_without_luck() {
        let (result, out) = play("terraria\n10\n0\ns\n1\n", None, &CalcConfig::default());
        assert!(result.is_ok());
        assert!(out.contains("The current game selected is Terraria"));
        assert!(out.contains("Your odds were: 10.0%"));
    }

    #[test]
    fn minecraft_rare_literal_bonus() {
        let (_, out) = play(
            "Minecraft\n20\n2\nR\nSuccess\n1\n",
            None,
            &CalcConfig::default(),
        );
        assert!(out.contains("Your odds were: 220.0%"));
    }

    #[test]
    fn minecraft_common_reads_drop_count() {
        let (result, out) = play(
            "minecraft\n20\n1\nc\n0\ns\n1\n",
            None,
            &CalcConfig::default(),
        );
        let calc = result.unwrap();
        assert!((calc.result.value() - 0.3).abs() < 1e-12);
        assert!(out.contains("Your odds were: 30.0%"));
    }

    #[test]
    fn invalid_answers_reprompt() {
        let (result, out) = play(
            "zelda\nterraria\nten\n50\nlots\n0\nmaybe\nfailed\n-2\n2\n",
            None,
            &CalcConfig::default(),
        );
        assert!(result.is_ok());
        assert_eq!(out.matches("Invalid input").count(), 5);
        assert!(out.contains("Your odds were: 25.0%"));
    }

    #[test]
    fn zero_repetitions_is_certain() {
        let (_, out) = play("40\n0\nf\n0\n", Some(Game::Terraria), &CalcConfig::default());
        assert!(out.contains("Your odds were: 100.0%"));
        assert!(!out.contains("Which game?"));
    }

    #[test]
    fn strict_tiers_reprompt() {
        let config = CalcConfig::default().with_tier_policy(TierPolicy::Strict);
        let (_, out) = play("20\n7\n2\nr\ns\n1\n", Some(Game::Minecraft), &config);
        assert_eq!(out.matches("Invalid input").count(), 1);
        assert!(out.contains("Your odds were: 220.0%"));
    }

    #[test]
    fn degenerate_luck_fails() {
        let (result, out) = play("150\n1\n", Some(Game::Terraria), &CalcConfig::default());
        assert!(matches!(result, Err(OddsError::DegenerateLuckDomain { .. })));
        assert!(!out.contains("Your odds were"));
    }

    #[test]
    fn closed_input_fails() {
        let (result, _) = play("terraria\n", None, &CalcConfig::default());
        assert!(matches!(result, Err(OddsError::Input(_))));
    }
}
