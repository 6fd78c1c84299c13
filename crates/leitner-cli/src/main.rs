// Rust guideline compliant 2026-10-19

//! Leitner CLI Application
//!
//! Command-line interface for the Leitner flashcard scheduler.

use clap::Parser;
use leitner_cli::commands;
use leitner_cli::commands::add::AddArgs;
use leitner_cli::commands::update::UpdateArgs;
use leitner_cli::{create_formatter, error_envelope, logging, resolve_data_dir, should_use_color};
use leitner_cli::{terminal, DataDir, OutputFormatter};
use leitner_core::Config;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "ltn",
    version,
    about = "Leitner: spaced-repetition flashcards in five boxes",
    long_about = "Leitner keeps a collection of flashcards in five boxes. A correct answer moves a card up one box and a wrong answer sends it back to box 1. Cards in higher boxes come up for review less often.",
    after_help = "Examples:\n  ltn init\n  ltn add \"Ciao\" \"Hello\" --course italian --lesson greetings\n  ltn due --course italian\n  ltn review card-1a2b3c4d --correct\n  ltn stats --json\n  ltn export --output backup.json\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Data directory (defaults to $LEITNER_DIR, then ./.leitner)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Diagnostic log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for leitner_core::OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Table => Self::Table,
            FormatArg::Plain => Self::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a data directory
    Init,

    /// Add a new card in box 1
    Add {
        /// Prompt text
        front: String,

        /// Answer text
        back: String,

        /// Course tag
        #[arg(long)]
        course: Option<String>,

        /// Lesson tag
        #[arg(long)]
        lesson: Option<String>,

        /// Provenance metadata as a JSON document
        #[arg(long)]
        source_page: Option<String>,
    },

    /// Show details of a card
    Show {
        /// Card ID
        id: String,
    },

    /// List cards
    List {
        /// Filter by course
        #[arg(long)]
        course: Option<String>,

        /// Filter by lesson
        #[arg(long)]
        lesson: Option<String>,

        /// Filter by box (1-5)
        #[arg(long = "box")]
        leitner_box: Option<u8>,

        /// Only cards due for review
        #[arg(long, conflicts_with = "not_due")]
        due: bool,

        /// Only cards not yet due
        #[arg(long)]
        not_due: bool,
    },

    /// Edit fields of a card
    Update {
        /// Card ID
        id: String,

        /// New prompt text
        #[arg(long)]
        front: Option<String>,

        /// New answer text
        #[arg(long)]
        back: Option<String>,

        /// Move the card to a box (1-5)
        #[arg(long = "box")]
        leitner_box: Option<u8>,

        /// New course tag
        #[arg(long, conflicts_with = "clear_course")]
        course: Option<String>,

        /// New lesson tag
        #[arg(long, conflicts_with = "clear_lesson")]
        lesson: Option<String>,

        /// Remove the course tag
        #[arg(long)]
        clear_course: bool,

        /// Remove the lesson tag
        #[arg(long)]
        clear_lesson: bool,

        /// Forget the last review so the card is due now
        #[arg(long)]
        reset_review: bool,
    },

    /// Delete a card
    Delete {
        /// Card ID
        id: String,
    },

    /// Record a review outcome
    Review {
        /// Card ID
        id: String,

        /// The answer was correct
        #[arg(long, conflicts_with = "incorrect", required_unless_present = "incorrect")]
        correct: bool,

        /// The answer was wrong
        #[arg(long)]
        incorrect: bool,
    },

    /// List cards due for review now
    Due {
        /// Restrict to one course
        #[arg(long)]
        course: Option<String>,
    },

    /// Show collection statistics
    Stats {
        /// Restrict to one course
        #[arg(long)]
        course: Option<String>,
    },

    /// List courses with card counts
    Courses,

    /// Export the collection as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the collection with an exported snapshot
    Import {
        /// Snapshot file ('-' for stdin)
        file: PathBuf,
    },

    /// Delete every card
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_errors = cli.json || matches!(cli.format, Some(FormatArg::Json));
    let use_color = !cli.no_color && should_use_color();

    match run(cli, use_color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json_errors {
                eprintln!("{}", error_envelope(&err));
            } else {
                terminal::print_error(&format!("{:#}", err), use_color);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, use_color: bool) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir(cli.dir.as_deref())?;
    let config = Config::load(&data_dir)?;

    logging::init(cli.log_level.as_deref().unwrap_or(&config.log_level))?;

    let format = match cli.format {
        Some(format) => format.into(),
        None if cli.json => leitner_core::OutputFormat::Json,
        None => config.output_format,
    };
    let formatter = create_formatter(format, use_color);
    let formatter = formatter.as_ref();

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Use --help for usage information");
            return Ok(());
        }
    };

    match command {
        Commands::Init => commands::init::execute(&data_dir, &config, formatter),
        command => dispatch(&DataDir::open(data_dir, config)?, command, formatter),
    }
}

fn dispatch(
    ctx: &DataDir,
    command: Commands,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        Commands::Init => commands::init::execute(ctx.dir(), ctx.config(), formatter),
        Commands::Add {
            front,
            back,
            course,
            lesson,
            source_page,
        } => commands::add::execute(
            ctx,
            AddArgs {
                front,
                back,
                course,
                lesson,
                source_page,
            },
            formatter,
        ),
        Commands::Show { id } => commands::show::execute(ctx, &id, formatter),
        Commands::List {
            course,
            lesson,
            leitner_box,
            due,
            not_due,
        } => {
            let filter = commands::list::build_filter(course, lesson, leitner_box, due, not_due)?;
            commands::list::execute(ctx, &filter, formatter)
        }
        Commands::Update {
            id,
            front,
            back,
            leitner_box,
            course,
            lesson,
            clear_course,
            clear_lesson,
            reset_review,
        } => commands::update::execute(
            ctx,
            &id,
            UpdateArgs {
                front,
                back,
                leitner_box,
                course,
                lesson,
                clear_course,
                clear_lesson,
                reset_review,
            },
            formatter,
        ),
        Commands::Delete { id } => commands::delete::execute(ctx, &id, formatter),
        Commands::Review { id, correct, .. } => {
            commands::review::execute(ctx, &id, correct, formatter)
        }
        Commands::Due { course } => commands::due::execute(ctx, course.as_deref(), formatter),
        Commands::Stats { course } => commands::stats::execute(ctx, course.as_deref(), formatter),
        Commands::Courses => commands::courses::execute(ctx, formatter),
        Commands::Export { output } => commands::export::execute(ctx, output.as_deref(), formatter),
        Commands::Import { file } => commands::import::execute(ctx, &file, formatter),
        Commands::Clear { yes } => commands::clear::execute(ctx, yes, formatter),
    }
}
