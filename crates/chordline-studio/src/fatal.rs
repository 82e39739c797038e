//! Reporting of errors that stop the program before or during start-up.

/// Logs `err` and shows it in a blocking native message box.
///
/// The dialog is best effort: on a system without a dialog backend only the
/// log line remains.
pub fn report(err: &anyhow::Error) {
    log::error!("fatal: {err:#}");

    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("chordline")
        .set_description(describe(err))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// One line per error in the chain, outermost first.
pub fn describe(err: &anyhow::Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs `body`; on error, reports it and exits with status 1.
pub fn run_or_exit(body: impl FnOnce() -> anyhow::Result<()>) {
    if let Err(err) = body() {
        report(&err);
        std::process::exit(1);
    }
}
