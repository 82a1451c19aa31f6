use font2img::cli::{self, opt::Options};

fn main() -> color_eyre::Result<()> {
    let opt: Options = cli::init()?;
    cli::run(opt)
}
