mod cli;
mod logging;

use std::fmt::{self, Write as _};
use std::process;

use anyhow::{Context, Result};
use bazi::chinese::animal_for;
use bazi::lucky::lucky_info_of;
use bazi::western::western_zodiac_of;
use bazi::{DateTime, Reading, compute_bazi};
use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command, Format};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Reading(args) => {
            let dt = parse_date_time(&args.datetime)?;
            info!(input = %dt, "computing reading");
            let reading = compute_bazi(dt);
            match args.format {
                Format::Text => print!(
                    "{}",
                    render_text(&reading).context("failed to render reading")?
                ),
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&reading).context("failed to serialize reading")?
                ),
            }
        }
        Command::Animal(args) => {
            let animal = animal_for(args.year);
            println!("{} ({})", animal.symbol(), animal.english());
        }
        Command::Zodiac(args) => {
            let sign = western_zodiac_of(args.month, args.day);
            println!("{} ({})", sign.name(), sign.english());
        }
        Command::Lucky(args) => {
            let dt = parse_date_time(&args.date)?;
            let lucky = lucky_info_of(dt.date());
            println!("{} ({}) {}", lucky.color.name(), lucky.color, lucky.number);
        }
    }
    Ok(())
}

fn parse_date_time(text: &str) -> Result<DateTime> {
    text.parse::<DateTime>()
        .with_context(|| format!("failed to parse date-time {text:?}"))
}

fn render_text(reading: &Reading) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let elements = reading
        .element_tally
        .iter()
        .map(|(e, n)| format!("{}{n}", e.symbol()))
        .collect::<Vec<_>>()
        .join(" ");
    let missing = reading.element_tally.missing();
    writeln!(out, "Pillars:      {}", reading.pillars)?;
    writeln!(out, "Elements:     {elements}")?;
    if !missing.is_empty() {
        let names: String = missing.iter().map(|e| e.symbol()).collect();
        writeln!(out, "Missing:      {names}")?;
    }
    writeln!(out, "Day master:   {}", reading.day_master)?;
    writeln!(
        out,
        "Western sign: {} ({})",
        reading.western_zodiac.name(),
        reading.western_zodiac.english()
    )?;
    writeln!(
        out,
        "Lucky color:  {} ({})",
        reading.lucky_color.name(),
        reading.lucky_color
    )?;
    writeln!(out, "Lucky number: {}", reading.lucky_number)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_reading() {
        let reading = compute_bazi(DateTime::new(2000, 1, 1, 0).unwrap());
        let text = render_text(&reading).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(7, lines.len(), "{text}");
        assert_eq!("Pillars:      己卯 丙子 戊午 壬子", lines[0]);
        assert_eq!("Elements:     木1 火2 土2 金0 水3", lines[1]);
        assert_eq!("Missing:      金", lines[2]);
        assert!(lines[3].starts_with("Day master:   戊土日元"), "{}", lines[3]);
        assert_eq!("Western sign: 摩羯座 (Capricorn)", lines[4]);
        assert_eq!("Lucky color:  橙色 (Orange)", lines[5]);
        assert_eq!("Lucky number: 4", lines[6]);
    }

    #[test]
    fn text_reading_without_missing_elements() {
        // 庚 午 辛 巳 壬 午 甲 辰
        let reading = compute_bazi(DateTime::new(1990, 5, 17, 8).unwrap());
        let text = render_text(&reading).unwrap();
        assert_eq!(6, text.lines().count(), "{text}");
        assert!(!text.contains("Missing:"), "{text}");
    }
}
