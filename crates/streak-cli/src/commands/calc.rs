//! One-shot calculation from command-line flags.

use streak_core::{Calculation, FixedParams, OddsError};

use super::CalcArgs;

pub fn run(args: &CalcArgs) -> Result<(), String> {
    let config = args.config.to_config();
    let mut params = FixedParams {
        luck: args.luck,
        tier: args.tier,
        rarity: args.rarity,
        drops: args.drops,
    };

    let calculation = Calculation::run(
        args.game,
        args.odds,
        args.orientation,
        args.times,
        &config,
        &mut params,
    )
    .map_err(|e| match e {
        OddsError::MissingParameter(name) => {
            format!("{} needs --{name} for its {}", args.game, args.game.rule())
        }
        other => other.to_string(),
    })?;

    if args.json {
        let json = serde_json::to_string_pretty(&calculation)
            .map_err(|e| format!("failed to serialize calculation: {e}"))?;
        println!("{json}");
    } else {
        println!("{}", calculation.summary(config.decimals));
    }
    Ok(())
}
