use hilite::{layer_sort, Highlighter, Settings};
use lliw::{Bg, Fg};

const DEMO: &str = r#"fn main() {
    // TODO: tidy this up
    // FIX: leaks on error
    // QUESTION: is this the right demo?
    println!("no patterns on this line");
}
"#;

fn main() {
    let h = Highlighter::from_settings(&Settings::default());
    let mut regions = h.run(DEMO);
    // Put line tints beneath spans, then paint back to front
    layer_sort(&mut regions);
    for (i, ch) in DEMO.chars().enumerate() {
        if ch == '\n' {
            println!();
            continue;
        }
        let mut fg = None;
        let mut bg = None;
        for region in regions.iter().filter(|r| r.start <= i && i < r.end) {
            fg = region.foreground.or(fg);
            bg = region.background.or(bg);
        }
        if let Some(c) = fg {
            print!("{}", Fg::Rgb(c.r, c.g, c.b));
        }
        if let Some(c) = bg {
            print!("{}", Bg::Rgb(c.r, c.g, c.b));
        }
        print!("{ch}{}{}", Fg::Reset, Bg::Reset);
    }
}
