use anyhow::Context;

use chordline_engine::window::Runtime;
use chordline_studio::fatal;
use chordline_studio::hello::HelloApp;
use chordline_studio::options::StudioOptions;

fn main() {
    fatal::run_or_exit(|| {
        let options = StudioOptions::load_with_logging()?;

        Runtime::run(options.runtime("Hello Window"), options.gpu(), HelloApp::new())
            .context("hello-window stopped with an error")
    });
}
