#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use manya_portfolio::content::Content;

    if let Err(error) = Content::load() {
        eprintln!("content/site.json is invalid: {error}");
        return std::process::ExitCode::FAILURE;
    }

    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
    std::process::ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    manya_portfolio::run();
}
