use anyhow::Context;
use bigfact::{Algorithm, Mode};
use clap::{CommandFactory, Parser};
use std::io::{self, Write};

#[derive(Clone, Debug, Parser)]
#[command(
    name = "factorial",
    version,
    about = "Compute n! with several algorithms and compare their running times"
)]
struct Args {
    /// The factorial to compute.
    #[arg(allow_negative_numbers = true)]
    n: Option<i64>,

    /// Run only these algorithms. May be repeated. Defaults to all of them.
    #[arg(long = "algorithm", short = 'a', value_name = "NAME")]
    algorithms: Vec<Algorithm>,

    /// Run the algorithms one after another instead of in parallel.
    #[arg(long)]
    sequential: bool,

    /// Also print the computed value.
    #[arg(long)]
    print: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn algorithms(&self) -> &[Algorithm] {
        let all: &'static [Algorithm] = &Algorithm::ALL;
        if self.algorithms.is_empty() {
            all
        } else {
            self.algorithms.as_slice()
        }
    }

    fn mode(&self) -> Mode {
        if self.sequential {
            Mode::Sequential
        } else {
            Mode::Parallel
        }
    }
}

fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::new()
        .filter("FACTORIAL_LOG")
        .write_style("FACTORIAL_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Args::parse();
    log::debug!("{:?}", args);

    let n = match args.n {
        Some(n) => n,
        None => {
            Args::command().print_help()?;
            return Ok(());
        }
    };

    let report = bigfact::compare(n, args.algorithms(), args.mode())
        .with_context(|| format!("failed to compute {}!", n))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let mut json = serde_json::to_value(&report)?;
        if args.print {
            json["value"] = serde_json::Value::String(report.value().to_owned());
        }
        serde_json::to_writer_pretty(&mut out, &json)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}!", n)?;
        if args.print {
            writeln!(out, "{}", report.value())?;
        }
        write!(out, "{}", report)?;
    }
    out.flush()?;
    Ok(())
}
