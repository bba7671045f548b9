use canvasfit::{args::Args, error::ResizeError};
use clap::Parser;

fn main() {
    canvasfit::init::init();
    let args = Args::parse();

    match real_main(args) {
        Ok(output) => {
            let output = output.display();
            println!("Image resized successfully and saved to: {output}");
        }
        Err(e) => {
            eprintln!("Error resizing image: {}", e);
            std::process::exit(1);
        }
    }
}

fn real_main(args: Args) -> Result<std::path::PathBuf, ResizeError> {
    args.into_plan().execute()
}
