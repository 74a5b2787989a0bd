use hilite::{Highlighter, Settings};

const DEMO: &str = "fn main() {\n    // TODO: tidy this up\n    // FIX: leaks on error\n}\n";

fn main() {
    // Scan the demo text with the stock pattern table
    let h = Highlighter::from_settings(&Settings::default());
    for region in h.run(DEMO) {
        println!("{region:?}");
    }
}
