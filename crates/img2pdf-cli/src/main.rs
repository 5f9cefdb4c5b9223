use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "img2pdf", about = "Convert images to a multi-page PDF", version)]
struct Cli {
    /// Input image file(s), one page each, in the given order
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,

    /// Output file name (without extension; blank falls back to the default)
    #[arg(short, long, default_value = "")]
    name: String,

    /// Directory the PDF is written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let images = img2pdf::load_images(&cli.images).await?;
    let output = cli.out_dir.join(img2pdf::output_file_name(&cli.name));

    img2pdf::convert_to_pdf(&images, &img2pdf::ConvertOptions::default(), &output).await?;

    println!("Converted {} images → {}", images.len(), output.display());

    Ok(())
}
