use std::time::Duration;

use benchtrend_runs::Fetcher;
use benchtrend_runs::LabelZone;
use benchtrend_runs::Labeler;
use benchtrend_vis::Page;
use benchtrend_vis::RunSeriesBuilder;
use benchtrend_vis::View;
use benchtrend_vis::render::OutputFile;
use benchtrend_vis::render::Render;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::PathExt;
use crate::cli::ViewArgs;
use crate::error::CliError;

pub(crate) fn view(args: ViewArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    info!(
        "benchtrend reads benchmark runs from: `{}` and generates a visual representation in: `{}`",
        args.source,
        output_path.display()
    );

    let fetcher = Fetcher::with_timeout(args.timeout.map(Duration::from_secs))?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let zone = if args.utc {
        LabelZone::Utc
    } else {
        LabelZone::Local
    };

    let mut view = View::new();
    RunSeriesBuilder::new(fetcher, rng)
        .with_labeler(Labeler::new(zone))
        .build(&mut view, &args.source);

    let mut output = OutputFile::new(&output_path)?;
    Page::new(&args.title, &view).render(&mut output)?;
    info!("The page was written to `{}`.", output.path().display());

    output.finish()?;
    Ok(())
}
