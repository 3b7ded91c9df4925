use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context};
use log::info;
use structopt::StructOpt;

use boggle_tools::board::parse::read_board;
use boggle_tools::logging::init_logger;
use boggle_tools::wordlist::wordlist::{FileFormat, Wordlist};
use boggle_tools::{Boggle, Dictionary, Grid, SearchConfig};

const DEMO_GRID: [[&str; 4]; 4] = [
    ["T", "W", "Y", "R"],
    ["E", "N", "P", "H"],
    ["G", "St", "Qu", "R"],
    ["O", "N", "T", "A"],
];

const DEMO_WORDS: [&str; 22] = [
    "art", "ego", "gent", "get", "net", "new", "newt", "prat", "pry", "qua", "quart",
    "quartz", "rat", "tar", "tarp", "ten", "went", "wet", "arty", "rhr", "not", "quar",
];

/// Find every dictionary word that can be traced on a letter grid.
#[derive(StructOpt)]
#[structopt(name = "boggle")]
struct Cli {
    /// Word list to search for; whitespace-separated unless --delimiter is given
    #[structopt(parse(from_os_str))]
    dictionary: Option<PathBuf>,

    /// Board file: one row per line with tiles separated by spaces, or a JSON array of rows
    #[structopt(short, long, parse(from_os_str))]
    board: Option<PathBuf>,

    /// Search a random board with this many rows and columns instead of a board file
    #[structopt(short, long, conflicts_with = "board")]
    random: Option<usize>,

    /// Seed for --random
    #[structopt(long, default_value = "0")]
    seed: u64,

    /// Split each dictionary line on this character and take one column
    #[structopt(long)]
    delimiter: Option<char>,

    /// Column holding the word when --delimiter is given
    #[structopt(long, default_value = "0")]
    column: usize,

    /// Longest path, in cells, a single word may use
    #[structopt(long)]
    max_path_len: Option<usize>,

    /// Solve the built-in sample board and word list
    #[structopt(long)]
    demo: bool,

    /// Print the words as a JSON array
    #[structopt(long)]
    json: bool,

    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Cli::from_args();
    init_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let (grid, dictionary) = if args.demo {
        (Grid::new(DEMO_GRID), Dictionary::from(DEMO_WORDS))
    } else {
        (load_grid(args)?, load_dictionary(args)?)
    };

    let config = match args.max_path_len {
        Some(max) => SearchConfig::builder().max_path_len(max).build(),
        None => SearchConfig::new(),
    };
    let boggle = Boggle::with_config(grid, dictionary, config);

    let start = Instant::now();
    let words = boggle.solve();
    info!("{} words in {:.3}s", words.len(), start.elapsed().as_secs_f64());

    if args.json {
        println!("{}", serde_json::to_string(&words)?);
    } else {
        print!("{}", boggle.grid());
        println!();
        words.iter().for_each(|word| println!("{}", word));
    }
    Ok(())
}

fn load_grid(args: &Cli) -> anyhow::Result<Grid> {
    match (&args.board, args.random) {
        (Some(path), _) => read_board(path)
            .with_context(|| format!("loading board {}", path.display())),
        (None, Some(side)) => Ok(Grid::random_with_seed(side, args.seed)),
        (None, None) => bail!("pass --board FILE or --random N (or --demo)"),
    }
}

fn load_dictionary(args: &Cli) -> anyhow::Result<Dictionary> {
    let path = match &args.dictionary {
        Some(path) => path,
        None => bail!("a dictionary file is required (or --demo)"),
    };
    let format = match args.delimiter {
        Some(delimiter) => FileFormat::builder().delimiter(delimiter).word_column(args.column).build(),
        None => FileFormat::default(),
    };
    let wordlist = Wordlist::from_file(path, &format)
        .with_context(|| format!("loading dictionary {}", path.display()))?;
    let dictionary = Dictionary::from(wordlist);
    info!("{} admitted dictionary words", dictionary.len());
    Ok(dictionary)
}
