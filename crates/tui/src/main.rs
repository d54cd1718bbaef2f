mod renderer;

use anyhow::Result;
use folio_core::page::{Interaction, Page};
use folio_core::svg::render_svg;
use folio_protocol::Viewport;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // `folio --svg out.svg [--light]` writes a static export and exits;
    // with no arguments the interactive terminal view starts.
    if let Some(pos) = args.iter().position(|a| a == "--svg") {
        let Some(path) = args.get(pos + 1) else {
            eprintln!("Usage: folio [--svg <out.svg> [--light]]");
            std::process::exit(1);
        };
        let dark = !args.iter().any(|a| a == "--light");
        let viewport = Viewport::sized(1280.0, 800.0);
        let mut page = Page::new(&viewport)?;
        page.on_scroll(0.0, &viewport);
        page.on_work_scroll(0.0);
        page.on_hobby_scroll(0.0);
        let rendered = page.render(&viewport, 0.0, &Interaction::default());
        let svg = render_svg(
            &rendered.page,
            viewport.width,
            rendered.layout.total_height,
            dark,
        );
        std::fs::write(path, svg)?;
        eprintln!("wrote {path}");
        return Ok(());
    }

    renderer::run()
}
