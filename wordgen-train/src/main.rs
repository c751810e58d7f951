use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use wordgen_core::io::{model_path, read_word_list, resolve_data_dir, save_model};
use wordgen_core::model::trigram_model::DEFAULT_SMOOTHING;
use wordgen_core::{vocabulary, Language, TrigramModel};

/// Train a word generation model and save it next to the server's models
#[derive(Parser, Debug)]
#[command(name = "wordgen-train", version)]
struct Args {
    /// Word file, one word per line (the built-in list is used when omitted)
    words: Option<PathBuf>,

    /// Language of the model to write (ru or en)
    #[arg(long, default_value = "ru")]
    lang: Language,

    /// Additive smoothing constant
    #[arg(long, default_value_t = DEFAULT_SMOOTHING)]
    smoothing: f64,

    /// Directory holding model files (an `instance` sub-directory is preferred)
    #[arg(long, env = "WORDGEN_DATA")]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Either the user's word file or the built-in vocabulary of the language
    let words: Vec<String> = match &args.words {
        Some(path) => {
            let words = read_word_list(path)?;
            info!("Loaded {} words from {}", words.len(), path.display());
            words
        }
        None => {
            let words: Vec<String> = vocabulary::real_words(args.lang).iter().map(|w| (*w).to_owned()).collect();
            info!("Using built-in {} list: {} words", args.lang, words.len());
            words
        }
    };

    if words.is_empty() {
        error!("No words to train on");
        return Ok(ExitCode::FAILURE);
    }

    let model = TrigramModel::train(&words, args.smoothing);

    let out = model_path(resolve_data_dir(args.data_dir.as_deref()), args.lang);
    save_model(&model, &out)?;
    println!("Model saved: {} ({} contexts)", out.display(), model.len());

    Ok(ExitCode::SUCCESS)
}
