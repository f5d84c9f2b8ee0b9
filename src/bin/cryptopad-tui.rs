// CryptoPad TUI
// Interactive terminal front end for the transform engine

fn main() -> std::io::Result<()> {
    cryptopad::tui::run()
}
