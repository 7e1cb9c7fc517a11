use wordmark::{IntroApp, IntroConfig, IntroOutcome};

/// Full intro run with the default brand word.
///
/// The `on_complete` closure is where a host application would reveal its
/// persistent navbar wordmark once the overlay is gone.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = IntroConfig {
        word: "BrandName".into(),
        ..IntroConfig::default()
    };

    IntroApp::new(config)
        .with_on_complete(|outcome| match outcome {
            IntroOutcome::Finished => log::info!("Intro finished; reveal the navbar wordmark"),
            IntroOutcome::FontLoadFailed => {
                log::error!("Typeface never loaded; skipping straight to the page");
            }
            IntroOutcome::Cancelled => log::info!("Intro cancelled"),
        })
        .run()?;

    Ok(())
}
