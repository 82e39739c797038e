use anyhow::Context;

use chordline_engine::window::Runtime;
use chordline_studio::fatal;
use chordline_studio::intersect::IntersectApp;
use chordline_studio::options::StudioOptions;

fn main() {
    fatal::run_or_exit(|| {
        let options = StudioOptions::load_with_logging()?;

        let app = IntersectApp::new(&options)?;
        Runtime::run(options.runtime(&options.window.title), options.gpu(), app)
            .context("chordline stopped with an error")
    });
}
