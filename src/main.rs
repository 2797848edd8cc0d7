use std::io::{self, BufRead, Write};

use stashline::{CancellationHandle, PredictorRegistry, StashPredictor};

/// Small interactive demo: type lines ending in `bm:<key>` or `snip:<key>`
/// and see what the stock predictors would suggest for them.
fn main() -> stashline::Result<()> {
    let mut registry = PredictorRegistry::new();
    registry.register(Box::new(StashPredictor::bookmarks()?));
    registry.register(Box::new(StashPredictor::snippets()?));

    for predictor in registry.iter() {
        println!("{}: {}", predictor.name(), predictor.description());
    }
    println!("Ctrl-D quits");

    let cancellation = CancellationHandle::new();
    let stdin = io::stdin();

    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;

        let answers = registry.predict_all(&line, &cancellation);
        if answers.is_empty() {
            println!("(no suggestions)");
        }
        for (id, suggestions) in answers {
            for suggestion in suggestions {
                println!(
                    "{} {}  ({id})",
                    suggestion.value,
                    suggestion.label.unwrap_or_default(),
                );
            }
        }

        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}
