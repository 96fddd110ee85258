use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use wd_core::wardrobe::{ClothingCategory, ClothingColor, Occasion, Season};

#[derive(Debug, Parser)]
#[command(name = "wardrobe")]
#[command(about = "Personal wardrobe catalog and outfit suggestions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to config.toml in the data directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Echo all log events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage clothing items
    #[command(subcommand)]
    Item(ItemCommand),
    /// Manage outfits
    #[command(subcommand)]
    Outfit(OutfitCommand),
    /// Manage the outfit calendar
    #[command(subcommand)]
    Plan(PlanCommand),
    /// Manage outfit photos
    #[command(subcommand)]
    Photo(PhotoCommand),
    /// Suggest an outfit
    Suggest(SuggestArgs),
    /// Show wardrobe statistics
    Stats,
}

#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    /// List items, optionally narrowed to one category or to favorites
    List {
        #[arg(long)]
        category: Option<ClothingCategory>,
        #[arg(long)]
        favorites: bool,
    },
    /// Add a clothing item
    Add(ItemArgs),
    /// Change fields of an item; an empty --brand or --notes clears it
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<ClothingCategory>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long, value_delimiter = ',')]
        colors: Option<Vec<ClothingColor>>,
        #[arg(long, value_delimiter = ',')]
        seasons: Option<Vec<Season>>,
        #[arg(long, value_delimiter = ',')]
        occasions: Option<Vec<Occasion>>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove an item (outfits keep referencing its id)
    Remove { id: String },
    /// Toggle the favorite flag
    Favorite { id: String },
    /// Record that the item was worn today
    Wear { id: String },
    /// Propose an item from a photo; --save adds it to the wardrobe
    Analyze {
        /// Photo URI
        uri: String,
        /// Use this category instead of the detected one
        #[arg(long)]
        category: Option<ClothingCategory>,
        #[arg(long)]
        save: bool,
    },
}

#[derive(Debug, Args)]
pub struct ItemArgs {
    pub name: String,
    #[arg(long)]
    pub category: ClothingCategory,
    /// Photo URI
    #[arg(long)]
    pub image: String,
    #[arg(long, value_delimiter = ',')]
    pub colors: Vec<ClothingColor>,
    #[arg(long, value_delimiter = ',')]
    pub seasons: Vec<Season>,
    #[arg(long, value_delimiter = ',')]
    pub occasions: Vec<Occasion>,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub favorite: bool,
}

#[derive(Debug, Subcommand)]
pub enum OutfitCommand {
    /// List outfits
    List {
        #[arg(long)]
        favorites: bool,
        /// Only the N most recently worn
        #[arg(long)]
        recent: Option<usize>,
    },
    /// Show an outfit with its garments
    Show { id: String },
    /// Create an outfit from at least two items
    Create {
        name: String,
        #[arg(long)]
        occasion: Occasion,
        /// Item ids in wearing order
        #[arg(long = "item", required = true)]
        items: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        seasons: Vec<Season>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        favorite: bool,
    },
    /// Remove an outfit (calendar entries are kept)
    Remove { id: String },
    /// Toggle the favorite flag
    Favorite { id: String },
    /// Record that the outfit and its items were worn today
    Wear { id: String },
}

#[derive(Debug, Subcommand)]
pub enum PlanCommand {
    /// Schedule an outfit on a date (YYYY-MM-DD)
    Add {
        date: NaiveDate,
        outfit: String,
        #[arg(long)]
        event: Option<String>,
    },
    /// Move or relabel a calendar entry; an empty --event clears it
    Update {
        id: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        outfit: Option<String>,
        #[arg(long)]
        event: Option<String>,
    },
    /// Remove a calendar entry
    Remove { id: String },
    /// Show what is planned on a date (today when omitted)
    On { date: Option<NaiveDate> },
}

#[derive(Debug, Subcommand)]
pub enum PhotoCommand {
    /// Remember an outfit photo
    Add { uri: String },
    /// Forget every copy of an outfit photo
    Remove { uri: String },
    /// List outfit photos, oldest first
    List,
}

#[derive(Debug, Args)]
pub struct SuggestArgs {
    #[arg(long)]
    pub occasion: Option<Occasion>,
    #[arg(long)]
    pub season: Option<Season>,
    /// Free text; "cold" adds a layer
    #[arg(long)]
    pub weather: Option<String>,
    #[arg(long)]
    pub mood: Option<String>,
    #[arg(long = "color", value_delimiter = ',')]
    pub colors: Vec<ClothingColor>,
    #[arg(long = "exclude", value_delimiter = ',')]
    pub exclude: Vec<String>,
    /// Free text; "dresses" prefers a dress
    #[arg(long)]
    pub style: Option<String>,
    /// Today's casual suggestion for the current season
    #[arg(long, conflicts_with_all = ["season", "weather", "mood", "colors", "exclude", "style"])]
    pub today: bool,
    /// Keep the suggestion as an outfit
    #[arg(long)]
    pub save: bool,
    /// Reproducible suggestion
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_item_add_with_lists() {
        let cli = Cli::try_parse_from([
            "wardrobe", "item", "add", "Linen Shirt", "--category", "Tops", "--image",
            "file:///linen.jpg", "--colors", "white,beige", "--seasons", "summer",
        ])
        .unwrap();

        let Commands::Item(ItemCommand::Add(args)) = cli.command else {
            panic!("expected item add");
        };
        assert_eq!(args.category, ClothingCategory::Tops);
        assert_eq!(args.colors, [ClothingColor::White, ClothingColor::Beige]);
        assert_eq!(args.seasons, [Season::Summer]);
        assert!(args.occasions.is_empty());
    }

    #[test]
    fn rejects_unknown_vocabulary() {
        let result = Cli::try_parse_from([
            "wardrobe", "item", "list", "--category", "hats",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_suggest_flags() {
        let cli = Cli::try_parse_from([
            "wardrobe", "--json", "suggest", "--occasion", "formal", "--weather", "cold",
            "--color", "black,white", "--exclude", "3", "--seed", "7", "--save",
        ])
        .unwrap();

        assert!(cli.json);
        let Commands::Suggest(args) = cli.command else {
            panic!("expected suggest");
        };
        assert_eq!(args.occasion, Some(Occasion::Formal));
        assert_eq!(args.colors.len(), 2);
        assert_eq!(args.exclude, ["3"]);
        assert_eq!(args.seed, Some(7));
        assert!(args.save);
    }

    #[test]
    fn today_conflicts_with_explicit_constraints() {
        let result = Cli::try_parse_from(["wardrobe", "suggest", "--today", "--season", "winter"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_plan_dates() {
        let cli = Cli::try_parse_from(["wardrobe", "plan", "add", "2025-06-01", "2"]).unwrap();

        let Commands::Plan(PlanCommand::Add { date, outfit, event }) = cli.command else {
            panic!("expected plan add");
        };
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(outfit, "2");
        assert_eq!(event, None);
    }

    #[test]
    fn outfit_create_requires_items() {
        assert!(Cli::try_parse_from(["wardrobe", "outfit", "create", "Date Night", "--occasion", "special"]).is_err());
    }

    #[test]
    fn parses_item_analyze() {
        let cli = Cli::try_parse_from([
            "wardrobe", "item", "analyze", "file:///red-dress.jpg", "--category", "dresses", "--save",
        ])
        .unwrap();

        let Commands::Item(ItemCommand::Analyze { uri, category, save }) = cli.command else {
            panic!("expected item analyze");
        };
        assert_eq!(uri, "file:///red-dress.jpg");
        assert_eq!(category, Some(ClothingCategory::Dresses));
        assert!(save);
    }
}
