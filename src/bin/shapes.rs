use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use oop_shapes::account::BankAccount;
use oop_shapes::methods::{MathOperations, Tracked};
use oop_shapes::vehicle::Car;
use oop_shapes::{AreaReporter, Config, PiConstant, Shape, Validation};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Report the areas of configured shapes.
#[derive(Debug, Parser)]
#[command(name = "shapes", version)]
struct Cli {
    /// TOML file with `[[shapes]]` tables; the built-in sample is used otherwise.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject negative or non-finite dimensions.
    #[arg(long)]
    strict: bool,

    /// Use std's π instead of 3.14.
    #[arg(long)]
    exact_pi: bool,

    /// Also run the object-oriented concept demos.
    #[arg(long)]
    tour: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("loading shapes from {}", path.display()))?,
            None => Config::default(),
        };
        if self.strict {
            config.validation = Validation::Strict;
        }
        if self.exact_pi {
            config.pi = PiConstant::Exact;
        }
        Ok(config)
    }
}

fn heading(title: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        format!("== {title} ==")
    } else {
        format!("== {} ==", title.bold().cyan())
    }
}

fn report_shapes(config: &Config, out: impl Write) -> Result<()> {
    let shapes = config.build_shapes().context("building configured shapes")?;
    info!(count = shapes.len(), "reporting shapes");

    let mut reporter = AreaReporter::new(out);
    reporter.report_all(shapes.iter().map(|s| s as &dyn Shape))?;
    Ok(())
}

fn run_tour(out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n{}", heading("Vehicle"))?;
    writeln!(out, "{}", Car::new("Toyota", "Corolla", 2020).display_info())?;

    writeln!(out, "\n{}", heading("Instance vs. class methods"))?;
    let obj = Tracked::new(10);
    writeln!(out, "{}", obj.instance_method())?;
    writeln!(out, "{}", Tracked::class_method())?;
    writeln!(out, "Instances created: {}", Tracked::instance_count())?;

    writeln!(out, "\n{}", heading("Optional arguments"))?;
    writeln!(out, "{}", MathOperations::add(3, 4, None))?;
    writeln!(out, "{}", MathOperations::add(3, 4, Some(5)))?;

    writeln!(out, "\n{}", heading("Encapsulation"))?;
    let mut account = BankAccount::new("12345");
    account.deposit(1000.0)?;
    if let Err(err) = account.withdraw(5000.0) {
        writeln!(out, "{}", err.to_string().yellow())?;
    }
    writeln!(out, "{}", account.balance())?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    oop_shapes::logging::init(cli.verbose);

    let config = cli.resolve_config()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", heading("Areas"))?;
    report_shapes(&config, &mut out)?;

    if cli.tour {
        run_tour(&mut out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oop_shapes::ShapeSpec;

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::parse_from(["shapes", "--strict", "--exact-pi"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.validation, Validation::Strict);
        assert_eq!(config.pi, PiConstant::Exact);
    }

    #[test]
    fn test_report_default_shapes() {
        let mut buf = Vec::new();
        report_shapes(&Config::default(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "The area is: 78.5\nThe area is: 24\n"
        );
    }

    #[test]
    fn test_strict_report_fails_on_negative() {
        let config = Config {
            validation: Validation::Strict,
            shapes: vec![ShapeSpec::Rectangle {
                width: -4.0,
                height: 6.0,
            }],
            ..Config::default()
        };
        let err = report_shapes(&config, Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("width must not be negative"));
    }

    #[test]
    fn test_tour_output() {
        let mut buf = Vec::new();
        run_tour(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Car Information: 2020 Toyota Corolla"));
        assert!(text.contains("Instance value: 10"));
        assert!(text.contains("12"));
        assert!(text.contains("Invalid withdrawal amount"));
    }
}
