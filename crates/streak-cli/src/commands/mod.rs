pub mod calc;
pub mod games;
pub mod play;

use clap::Args;

use streak_core::{CalcConfig, DropRarity, Game, Orientation, RareBonus, TierPolicy};

/// Flags that tune how odds are computed and shown.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Reject looting tiers outside 0-3 instead of accepting any integer
    #[arg(long)]
    pub strict_tiers: bool,

    /// Add one percentage point per looting tier to rare drops instead of a
    /// whole 100%
    #[arg(long)]
    pub scaled_rare_bonus: bool,

    /// Decimal places in the result (at most 10)
    #[arg(long, default_value = "2")]
    pub decimals: u32,
}

impl ConfigArgs {
    pub fn to_config(&self) -> CalcConfig {
        let tier_policy = if self.strict_tiers {
            TierPolicy::Strict
        } else {
            TierPolicy::Permissive
        };
        let rare_bonus = if self.scaled_rare_bonus {
            RareBonus::Scaled
        } else {
            RareBonus::Literal
        };
        CalcConfig::default()
            .with_tier_policy(tier_policy)
            .with_rare_bonus(rare_bonus)
            .with_decimals(self.decimals)
    }
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Skip the game prompt (terraria, minecraft)
    #[arg(short, long, value_parser = parse_game)]
    pub game: Option<Game>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Game whose rules apply (terraria, minecraft)
    #[arg(short, long, value_parser = parse_game)]
    pub game: Game,

    /// Base chance of a single roll, in percent
    #[arg(short, long, allow_negative_numbers = true)]
    pub odds: f64,

    /// Count consecutive successes or failures (s/f)
    #[arg(long, value_parser = parse_orientation, default_value = "success")]
    pub orientation: Orientation,

    /// How many times in a row it happened
    #[arg(short, long)]
    pub times: u32,

    /// Luck value (Terraria)
    #[arg(long, allow_negative_numbers = true)]
    pub luck: Option<f64>,

    /// Looting tier (Minecraft)
    #[arg(long, allow_negative_numbers = true)]
    pub tier: Option<i64>,

    /// Item type, common or rare (Minecraft)
    #[arg(long, value_parser = parse_rarity)]
    pub rarity: Option<DropRarity>,

    /// Average number of items dropped (Minecraft, common drops)
    #[arg(long, allow_negative_numbers = true)]
    pub drops: Option<i64>,

    /// Print the full calculation as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

fn parse_game(s: &str) -> Result<Game, String> {
    s.parse::<Game>().map_err(|e| e.to_string())
}

fn parse_orientation(s: &str) -> Result<Orientation, String> {
    Orientation::parse(s).ok_or_else(|| format!("expected success or failure, got '{s}'"))
}

fn parse_rarity(s: &str) -> Result<DropRarity, String> {
    DropRarity::parse(s).ok_or_else(|| format!("expected common or rare, got '{s}'"))
}
