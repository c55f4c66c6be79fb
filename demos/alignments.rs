use bubblecap::{Alignment, CaptionOptions};

fn main() {
    // Same caption under all three alignments; center doubles the weld
    // tolerance, so the middle rendering can connect lines the other two
    // keep separate.
    let input = "What do you call\na caption|1.3\nthat hugs its text?";

    for alignment in [Alignment::Left, Alignment::Center, Alignment::Right] {
        let options = CaptionOptions {
            alignment,
            ..CaptionOptions::default()
        };
        match bubblecap::caption(input, &options) {
            Ok(svg) => {
                println!("<!-- {} -->", alignment);
                println!("{}", svg);
            }
            Err(e) => eprintln!("Error ({}): {}", alignment, e),
        }
    }
}
